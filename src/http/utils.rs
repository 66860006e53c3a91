//! Utility functions for building request URIs.
//!
//! Free-text values (partner names, domain names) are embedded into request
//! paths as single segments, so every character that could change the path
//! structure has to be percent-encoded. Space becomes `%20`, never `+`.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::form_urlencoded;

/// Characters escaped inside one path segment.
///
/// Everything outside the RFC 3986 unreserved set is encoded, including the
/// sub-delimiters, so the result is safe regardless of server-side routing.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Encodes `text` for use as a single URL path segment.
///
/// # Example
///
/// ```rust
/// use netki::http::url_encode;
///
/// assert_eq!(url_encode("Test Partner 1"), "Test%20Partner%201");
/// assert_eq!(url_encode("a/b"), "a%2Fb");
/// ```
pub fn url_encode(text: &str) -> String {
    utf8_percent_encode(text, PATH_SEGMENT).to_string()
}

/// Builds a query string from the non-empty pairs, in the given order.
///
/// Returns an empty string (no `?`) when every value is empty.
pub(crate) fn query_string(pairs: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs.iter().filter(|(_, value)| !value.is_empty()) {
        serializer.append_pair(key, value);
        any = true;
    }

    if any {
        format!("?{}", serializer.finish())
    } else {
        String::new()
    }
}
