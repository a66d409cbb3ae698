// ABOUTME: Percent-encoding of URI components
// ABOUTME: Escapes everything but the unreserved mark set, and decodes escapes strictly

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::error::{Result, UrlError};

/// Characters left as-is when encoding a URI component: alphanumerics plus
/// `- _ . ! ~ * ' ( )`. Everything else, including `: / ? # & =` and space,
/// is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `text` as a single URI component.
///
/// Non-ASCII characters are encoded as their UTF-8 bytes, with uppercase hex
/// digits.
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Decode percent-escapes in `text`.
///
/// Unlike a lenient decoder, a `%` that does not start a two-digit hex
/// escape is an error, as is a byte sequence that does not decode to UTF-8.
pub fn decode_uri_component(text: &str) -> Result<String> {
    let bytes = text.as_bytes();
    let mut cursor = 0;
    while let Some(offset) = bytes[cursor..].iter().position(|&b| b == b'%') {
        let at = cursor + offset;
        let well_formed = bytes
            .get(at + 1..at + 3)
            .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(UrlError::MalformedEscape(text.to_string()));
        }
        cursor = at + 3;
    }

    percent_decode_str(text)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| UrlError::InvalidUtf8(text.to_string()))
}
