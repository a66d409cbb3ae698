// ABOUTME: Stripping helpers for URL strings
// ABOUTME: Removes the query string or the http(s) scheme while keeping the rest intact

use ::url::Url;

/// Drop everything from the first `?` onward.
pub fn strip_querystring(url: &str) -> String {
    match url.split_once('?') {
        Some((head, _)) => head.to_string(),
        None => url.to_string(),
    }
}

/// Turn an absolute `http:`/`https:` URL into its protocol-relative form.
///
/// The URL is normalized first, so a bare host gains a trailing `/`:
/// `"http://foo.bar"` becomes `"//foo.bar/"`. Anything else, including
/// relative paths and other schemes, comes back unchanged.
pub fn strip_protocol(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
            parsed.as_str()[parsed.scheme().len() + 1..].to_string()
        }
        _ => url.to_string(),
    }
}
