//! HTTP request handling.
//!
//! Every accepted connection gets one [`connection::RequestWorker`], which
//! serves a single request and then closes the connection.
//!
//! # Submodules
//!
//! - **`connection`**: the worker and its state machine
//! - **`parser`**: reads the request head and keeps the first line
//! - **`request`**: the parsed request line and its path token
//! - **`file`**: resolves the path against the document root and probes it
//! - **`response`**: status codes and the header block
//! - **`template`**: placeholder substitution in served files
//! - **`writer`**: writes the header block and the body
//!
//! # Worker State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read lines until the blank line
//!        └──────┬──────┘
//!               │ First line kept
//!               ▼
//!        ┌──────────────────┐
//!        │    Resolving     │ ← "<root>" + path, probe for reading
//!        └──────┬───────────┘
//!               │ readable / not readable
//!               ▼
//!        ┌──────────────────┐
//!        │     Writing      │ ← Header block, then body, then flush
//!        └──────┬───────────┘
//!               │
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use webworker::config::Config;
//! use webworker::http::connection::{RequestWorker, WorkerSettings};
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::default();
//!     let listener = TcpListener::bind(&cfg.listen_addr).await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let settings = WorkerSettings::from(&cfg);
//!         tokio::spawn(RequestWorker::new(socket, settings).run());
//!     }
//! }
//! ```

pub mod connection;
pub mod file;
pub mod parser;
pub mod request;
pub mod response;
pub mod template;
pub mod writer;
