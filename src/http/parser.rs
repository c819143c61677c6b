use std::fmt;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};
use tokio::time::{Instant, timeout_at};
use tracing::{debug, warn};

use crate::http::request::RequestLine;

/// Longest request or header line accepted, terminator included.
pub const MAX_LINE_LEN: usize = 8 * 1024;

#[derive(Debug)]
pub enum ReadError {
    /// The request head did not complete before the deadline
    Timeout,
    /// Peer closed its side before the blank line
    Closed,
    /// Line exceeded `MAX_LINE_LEN` without a terminator
    TooLong,
    Io(std::io::Error),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Timeout => write!(f, "timed out waiting for request data"),
            ReadError::Closed => write!(f, "connection closed before end of request head"),
            ReadError::TooLong => write!(f, "request line longer than {} bytes", MAX_LINE_LEN),
            ReadError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ReadError {}

impl From<std::io::Error> for ReadError {
    fn from(e: std::io::Error) -> Self {
        ReadError::Io(e)
    }
}

/// Reads the request head up to and including the blank line.
///
/// The first line is kept and parsed; later lines are consumed and dropped.
/// `limit` bounds the whole head, not each line. Any failure stops reading
/// and is only logged: the caller gets whatever first line made it through,
/// or an empty `RequestLine` if none did.
pub async fn read_request_head<R>(reader: &mut R, limit: Duration) -> RequestLine
where
    R: AsyncBufRead + Unpin,
{
    let deadline = Instant::now() + limit;
    let mut first: Option<String> = None;

    loop {
        match next_line(reader, deadline).await {
            Ok(line) => {
                debug!("Request line: ({})", line);
                let end_of_head = line.is_empty();

                if first.is_none() {
                    first = Some(line);
                }
                if end_of_head {
                    break;
                }
            }
            Err(e) => {
                warn!(error = %e, "Request error");
                break;
            }
        }
    }

    let request = first.map(RequestLine::parse).unwrap_or_else(RequestLine::empty);
    debug!(path = ?request.path, "Requested file path");
    request
}

/// Reads one line with its `\n` or `\r\n` terminator removed.
pub async fn next_line<R>(reader: &mut R, deadline: Instant) -> Result<String, ReadError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let mut bounded = (&mut *reader).take(MAX_LINE_LEN as u64);

    let n = timeout_at(deadline, bounded.read_until(b'\n', &mut buf))
        .await
        .map_err(|_| ReadError::Timeout)??;

    if n == 0 {
        return Err(ReadError::Closed);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    } else if n >= MAX_LINE_LEN {
        return Err(ReadError::TooLong);
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_first_line_and_skips_headers() {
        let mut input: &[u8] = b"GET /a.html HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let request = read_request_head(&mut input, Duration::from_secs(1)).await;

        assert_eq!(request.raw.as_deref(), Some("GET /a.html HTTP/1.1"));
        assert_eq!(request.path(), Some("/a.html"));
        assert!(input.is_empty());
    }
}
