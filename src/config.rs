//! Server configuration.
//!
//! Values come from built-in defaults, an optional YAML file named by
//! `WEBWORKER_CONFIG`, and finally environment variable overrides.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_ROOT: &str = ".";
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the listener binds to
    pub listen_addr: String,

    /// Prefix glued in front of every request path, unnormalized
    pub root: String,

    /// Value of the `Content-Type` header on every response
    pub content_type: String,

    /// Upper bound on reading the whole request head
    pub read_timeout: Duration,

    /// Caps in-flight workers when set; unbounded otherwise
    pub max_connections: Option<usize>,
}

/// On-disk shape of the YAML config file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    listen_addr: Option<String>,
    root: Option<String>,
    content_type: Option<String>,
    read_timeout_secs: Option<u64>,
    max_connections: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            root: DEFAULT_ROOT.to_string(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
            max_connections: None,
        }
    }
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn load() -> Result<Self> {
        let base = match std::env::var("WEBWORKER_CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {}", path))?;
                Self::from_yaml_str(&raw)
                    .with_context(|| format!("parsing config file {}", path))?
            }
            Err(_) => Self::default(),
        };

        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Builds a config from defaults plus whatever `lookup` returns.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_overrides(lookup)
    }

    /// Parses a YAML document on top of the defaults.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let file: FileConfig = serde_yaml::from_str(raw)?;
        let mut cfg = Self::default();

        if let Some(addr) = file.listen_addr {
            cfg.listen_addr = addr;
        }
        if let Some(root) = file.root {
            cfg.root = root;
        }
        if let Some(content_type) = file.content_type {
            cfg.content_type = content_type;
        }
        if let Some(secs) = file.read_timeout_secs {
            cfg.read_timeout = Duration::from_secs(secs);
        }
        cfg.max_connections = file.max_connections.or(cfg.max_connections);

        Ok(cfg)
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("LISTEN") {
            self.listen_addr = addr;
        }
        if let Some(root) = lookup("DOC_ROOT") {
            self.root = root;
        }
        if let Some(secs) = lookup("READ_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("READ_TIMEOUT_SECS is not a number: {:?}", secs))?;
            self.read_timeout = Duration::from_secs(secs);
        }
        if let Some(max) = lookup("MAX_CONNECTIONS") {
            let max: usize = max
                .trim()
                .parse()
                .with_context(|| format!("MAX_CONNECTIONS is not a number: {:?}", max))?;
            // zero would deadlock the accept loop, treat it as "no limit"
            self.max_connections = (max > 0).then_some(max);
        }

        Ok(self)
    }
}
