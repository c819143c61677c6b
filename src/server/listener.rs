use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::{Instrument, info, info_span};

use crate::config::Config;
use crate::http::connection::{RequestWorker, WorkerSettings};

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    serve(listener, cfg).await
}

/// Accept loop over an already bound listener. One task per connection.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    info!("Listening on {}", listener.local_addr()?);

    let settings = WorkerSettings::from(cfg);
    let limit = cfg.max_connections.map(|n| Arc::new(Semaphore::new(n)));

    loop {
        // wait for a free slot before accepting when bounded
        let permit = match &limit {
            Some(sem) => Some(sem.clone().acquire_owned().await?),
            None => None,
        };

        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let worker = RequestWorker::new(socket, settings.clone());
        tokio::spawn(
            async move {
                worker.run().await;
                drop(permit);
            }
            .instrument(info_span!("conn", %peer)),
        );
    }
}
