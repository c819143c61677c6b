use webworker::http::request::RequestLine;

#[test]
fn test_parse_standard_request_line() {
    let line = RequestLine::parse("GET /index.html HTTP/1.1");

    assert_eq!(line.raw.as_deref(), Some("GET /index.html HTTP/1.1"));
    assert_eq!(line.path(), Some("/index.html"));
}

#[test]
fn test_parse_single_token_has_no_path() {
    let line = RequestLine::parse("GET");

    assert_eq!(line.raw.as_deref(), Some("GET"));
    assert_eq!(line.path(), None);
}

#[test]
fn test_parse_empty_line_has_no_path() {
    let line = RequestLine::parse("");
    assert_eq!(line.path(), None);
}

#[test]
fn test_parse_ignores_method_and_version() {
    // nothing beyond the second token is validated
    let line = RequestLine::parse("BREW /pot.html");
    assert_eq!(line.path(), Some("/pot.html"));
}

#[test]
fn test_parse_collapses_repeated_whitespace() {
    let line = RequestLine::parse("GET   /a.html\tHTTP/1.1");
    assert_eq!(line.path(), Some("/a.html"));
}

#[test]
fn test_parse_keeps_query_string_in_path() {
    let line = RequestLine::parse("GET /search?q=rust HTTP/1.1");
    assert_eq!(line.path(), Some("/search?q=rust"));
}

#[test]
fn test_empty_request_line() {
    let line = RequestLine::empty();

    assert_eq!(line.raw, None);
    assert_eq!(line.path(), None);
}
