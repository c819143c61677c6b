use std::time::{Duration, UNIX_EPOCH};

use webworker::http::response::{
    NOT_FOUND_BODY, ResponseHead, StatusCode, format_date,
};

const DATE: &str = "Sun, 06 Nov 1994 08:49:37 GMT";

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "NOT FOUND");
}

#[test]
fn test_status_from_probe_outcome() {
    assert_eq!(StatusCode::from_readable(true), StatusCode::Ok);
    assert_eq!(StatusCode::from_readable(false), StatusCode::NotFound);
}

#[test]
fn test_head_ok_exact_bytes() {
    let head = ResponseHead::new(StatusCode::Ok, DATE, "text/html");

    let expected = format!(
        "HTTP/1.1 200 OK\n\
         Date: {DATE}\n\
         Server: Jon's very own server\n\
         Connection: close\n\
         Content-Type: text/html\n\n"
    );
    assert_eq!(String::from_utf8(head.to_bytes()).unwrap(), expected);
}

#[test]
fn test_head_not_found_status_line() {
    let head = ResponseHead::new(StatusCode::NotFound, DATE, "text/html");
    let text = String::from_utf8(head.to_bytes()).unwrap();

    assert!(text.starts_with("HTTP/1.1 404 NOT FOUND\n"));
}

#[test]
fn test_head_has_no_content_length() {
    let head = ResponseHead::new(StatusCode::Ok, DATE, "text/plain");
    let text = String::from_utf8(head.to_bytes()).unwrap();

    assert!(!text.contains("Content-Length"));
    assert!(text.contains("Content-Type: text/plain\n"));
}

#[test]
fn test_head_ends_with_single_blank_line() {
    let head = ResponseHead::new(StatusCode::Ok, DATE, "text/html");
    let text = String::from_utf8(head.to_bytes()).unwrap();

    assert!(text.ends_with("\n\n"));
    assert!(!text.ends_with("\n\n\n"));
    assert_eq!(text.matches("\n\n").count(), 1);
}

#[test]
fn test_format_date_is_rfc1123() {
    let time = UNIX_EPOCH + Duration::from_secs(784111777);
    assert_eq!(format_date(time), DATE);
}

#[test]
fn test_not_found_body() {
    assert_eq!(
        NOT_FOUND_BODY,
        "<html><head></head><body>\n<h3>404 NOT FOUND</h3>\n</body></html>\n"
    );
}
