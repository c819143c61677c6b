//! Accepting connections and handing each one to its own worker.

pub mod listener;
