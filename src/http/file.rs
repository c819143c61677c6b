use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tokio::fs::File;
use tracing::{debug, warn};

/// A request path glued onto the document root, plus the probe outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// `None` when the request carried no path token
    pub path: Option<PathBuf>,
    /// Whether the path could be opened for reading as a regular file
    pub readable: bool,
}

impl ResolvedFile {
    /// Concatenates `root` and `token` as plain strings and probes the result.
    ///
    /// No normalization happens: `"." + "/index.html"` is `./index.html`, and
    /// `..` segments are passed through to the filesystem untouched.
    pub async fn probe(root: &str, token: Option<&str>) -> Self {
        let Some(token) = token else {
            warn!("Error opening file: request has no path");
            return Self {
                path: None,
                readable: false,
            };
        };

        let path = PathBuf::from(format!("{}{}", root, token));
        let readable = match check_readable(&path).await {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Error opening file");
                false
            }
        };

        debug!(path = %path.display(), readable, "Probed file");

        Self {
            path: Some(path),
            readable,
        }
    }

    /// The probed path, only when the probe succeeded.
    pub fn readable_path(&self) -> Option<&Path> {
        if self.readable {
            self.path.as_deref()
        } else {
            None
        }
    }
}

/// Opens and immediately drops the file. Directories count as failures.
async fn check_readable(path: &Path) -> Result<()> {
    let file = File::open(path).await.context("open failed")?;
    let meta = file.metadata().await.context("stat failed")?;

    if !meta.is_file() {
        bail!("not a regular file");
    }

    Ok(())
}
