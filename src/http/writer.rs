use anyhow::{Context, Result};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::http::file::ResolvedFile;
use crate::http::response::{NOT_FOUND_BODY, ResponseHead};
use crate::http::template::render_bytes;

/// Writes the status line and headers. Must precede any body bytes.
pub async fn write_head<W>(out: &mut W, head: &ResponseHead) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(&head.to_bytes())
        .await
        .context("writing response head")?;
    Ok(())
}

/// Writes the response body.
///
/// A readable file is streamed line by line through the template
/// substitution, each line followed by a single `\n`. Anything else gets the
/// fixed 404 page.
pub async fn write_content<W>(out: &mut W, file: &ResolvedFile, date: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let Some(path) = file.readable_path() else {
        out.write_all(NOT_FOUND_BODY.as_bytes())
            .await
            .context("writing 404 body")?;
        return Ok(());
    };

    debug!(path = %path.display(), "Serving file");

    let handle = File::open(path)
        .await
        .with_context(|| format!("reopening {}", path.display()))?;
    let mut reader = BufReader::new(handle);
    let mut line = Vec::new();

    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        if n == 0 {
            break;
        }

        strip_terminator(&mut line);

        out.write_all(&render_bytes(&line, date)).await?;
        out.write_all(b"\n").await?;
    }

    Ok(())
}

fn strip_terminator(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}
