use std::time::SystemTime;

/// Protocol token on every status line.
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Fixed value of the `Server` header.
pub const SERVER_NAME: &str = "Jon's very own server";

/// Body sent when the requested file cannot be served.
pub const NOT_FOUND_BODY: &str =
    "<html><head></head><body>\n<h3>404 NOT FOUND</h3>\n</body></html>\n";

/// The two outcomes a worker can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 NOT FOUND
    NotFound,
}

impl StatusCode {
    /// Maps the file probe outcome to a status.
    pub fn from_readable(readable: bool) -> Self {
        if readable {
            StatusCode::Ok
        } else {
            StatusCode::NotFound
        }
    }

    /// # Example
    ///
    /// ```
    /// # use webworker::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Reason phrase as this server spells it on the wire.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "NOT FOUND",
        }
    }
}

/// Formats a timestamp as an RFC 1123 date in GMT.
pub fn format_date(time: SystemTime) -> String {
    httpdate::fmt_http_date(time)
}

/// Everything needed to produce the header block of one response.
///
/// There is deliberately no `Content-Length`: the body is delimited by the
/// server closing the connection.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    pub status: StatusCode,
    pub date: String,
    pub content_type: String,
}

impl ResponseHead {
    pub fn new(status: StatusCode, date: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            status,
            date: date.into(),
            content_type: content_type.into(),
        }
    }

    /// Serializes the header block, blank-line terminator included.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(160);

        let status_line = format!(
            "{} {} {}\n",
            HTTP_VERSION,
            self.status.as_u16(),
            self.status.reason_phrase()
        );
        buf.extend_from_slice(status_line.as_bytes());

        buf.extend_from_slice(b"Date: ");
        buf.extend_from_slice(self.date.as_bytes());
        buf.extend_from_slice(b"\n");

        buf.extend_from_slice(b"Server: ");
        buf.extend_from_slice(SERVER_NAME.as_bytes());
        buf.extend_from_slice(b"\n");

        buf.extend_from_slice(b"Connection: close\n");

        buf.extend_from_slice(b"Content-Type: ");
        buf.extend_from_slice(self.content_type.as_bytes());

        // header block ends with two newlines
        buf.extend_from_slice(b"\n\n");

        buf
    }
}
