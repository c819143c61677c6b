/// The first line of a request and the path extracted from it.
///
/// Nothing else about the request is kept: the method and version tokens are
/// not validated, and header lines are read only to get past them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestLine {
    /// The first line exactly as received, minus its line terminator
    pub raw: Option<String>,
    /// Second whitespace-separated token of `raw`, if there is one
    pub path: Option<String>,
}

impl RequestLine {
    /// Builds a request line from the raw first line.
    ///
    /// # Example
    ///
    /// ```
    /// # use webworker::http::request::RequestLine;
    /// let line = RequestLine::parse("GET /index.html HTTP/1.1");
    /// assert_eq!(line.path.as_deref(), Some("/index.html"));
    ///
    /// let short = RequestLine::parse("GET");
    /// assert_eq!(short.path, None);
    /// ```
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let path = raw.split_whitespace().nth(1).map(str::to_string);

        Self {
            raw: Some(raw),
            path,
        }
    }

    /// A request where not even a first line arrived.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}
