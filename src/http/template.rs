//! Serve-time placeholder substitution for file contents.

use std::borrow::Cow;

pub const DATE_TOKEN: &str = "{{cs371date}}";
pub const SERVER_TOKEN: &str = "{{cs371server}}";
pub const SERVER_TEXT: &str = "CS371 SERVER";

/// Replaces every placeholder in a single line.
///
/// `date` is the already formatted timestamp; the date token expands to
/// `Date: <date>`. The line need not be UTF-8: bytes that don't decode are
/// kept as they are and tokens around them are still replaced. Lines without
/// any token are returned borrowed.
///
/// ```
/// # use webworker::http::template::render_bytes;
/// let out = render_bytes(b"Hello {{cs371server}}", "Mon, 01 Jan 2024 00:00:00 GMT");
/// assert_eq!(&out[..], b"Hello CS371 SERVER");
/// ```
pub fn render_bytes<'a>(line: &'a [u8], date: &str) -> Cow<'a, [u8]> {
    let mut out = Cow::Borrowed(line);

    let date_text = format!("Date: {}", date);
    if let Some(replaced) = replace_all(&out, DATE_TOKEN.as_bytes(), date_text.as_bytes()) {
        out = Cow::Owned(replaced);
    }
    if let Some(replaced) = replace_all(&out, SERVER_TOKEN.as_bytes(), SERVER_TEXT.as_bytes()) {
        out = Cow::Owned(replaced);
    }

    out
}

/// `None` when `needle` does not occur.
fn replace_all(haystack: &[u8], needle: &[u8], with: &[u8]) -> Option<Vec<u8>> {
    let mut rest = haystack;
    let mut out: Option<Vec<u8>> = None;

    while let Some(pos) = rest.windows(needle.len()).position(|w| w == needle) {
        let buf = out.get_or_insert_with(|| Vec::with_capacity(haystack.len()));
        buf.extend_from_slice(&rest[..pos]);
        buf.extend_from_slice(with);
        rest = &rest[pos + needle.len()..];
    }

    out.map(|mut buf| {
        buf.extend_from_slice(rest);
        buf
    })
}
