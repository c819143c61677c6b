use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};
use tracing::{error, info};

use crate::config::Config;
use crate::http::file::ResolvedFile;
use crate::http::parser::read_request_head;
use crate::http::request::RequestLine;
use crate::http::response::{ResponseHead, StatusCode, format_date};
use crate::http::writer::{write_content, write_head};

/// Per-worker settings taken from the server config.
#[derive(Debug, Clone)]
pub struct WorkerSettings {
    pub root: String,
    pub content_type: String,
    pub read_timeout: Duration,
}

impl From<&Config> for WorkerSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            root: cfg.root.clone(),
            content_type: cfg.content_type.clone(),
            read_timeout: cfg.read_timeout,
        }
    }
}

/// Where one request/response cycle has got to.
enum WorkerState {
    Reading,
    Resolving(RequestLine),
    Writing(ResolvedFile),
    Closed,
}

/// Handles exactly one request on one connection, then closes it.
pub struct RequestWorker<S> {
    stream: S,
    settings: WorkerSettings,
    state: WorkerState,
}

impl<S> RequestWorker<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, settings: WorkerSettings) -> Self {
        Self {
            stream,
            settings,
            state: WorkerState::Reading,
        }
    }

    /// Runs the whole cycle. Never fails: errors are logged and swallowed.
    pub async fn run(mut self) {
        info!("Handling connection...");

        if let Err(e) = self.drive().await {
            error!("Output error: {:#}", e);
        }

        info!("Done handling connection.");
    }

    async fn drive(&mut self) -> Result<()> {
        loop {
            match std::mem::replace(&mut self.state, WorkerState::Closed) {
                WorkerState::Reading => {
                    let mut reader = BufReader::new(&mut self.stream);
                    let request =
                        read_request_head(&mut reader, self.settings.read_timeout).await;
                    self.state = WorkerState::Resolving(request);
                }

                WorkerState::Resolving(request) => {
                    let file = ResolvedFile::probe(&self.settings.root, request.path()).await;
                    self.state = WorkerState::Writing(file);
                }

                WorkerState::Writing(file) => {
                    self.respond(&file).await?;
                    self.state = WorkerState::Closed;
                }

                WorkerState::Closed => break,
            }
        }

        Ok(())
    }

    async fn respond(&mut self, file: &ResolvedFile) -> Result<()> {
        // one timestamp for the Date header and every template expansion
        let date = format_date(SystemTime::now());
        let head = ResponseHead::new(
            StatusCode::from_readable(file.readable),
            date.clone(),
            self.settings.content_type.clone(),
        );

        let mut out = BufWriter::new(&mut self.stream);
        write_head(&mut out, &head).await?;
        write_content(&mut out, file, &date).await?;
        out.flush().await.context("flushing response")?;

        self.stream
            .shutdown()
            .await
            .context("closing connection")?;
        Ok(())
    }
}
