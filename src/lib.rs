//! webworker - a one-request-per-connection static file server
//!
//! Core library for request handling and the accept loop.

pub mod config;
pub mod http;
pub mod server;
