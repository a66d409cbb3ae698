// ABOUTME: Error types for URL operations
// ABOUTME: Covers malformed URLs, bad percent-escapes, and non-UTF-8 decoded text

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UrlError {
    #[error("Invalid URL '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: ::url::ParseError,
    },

    #[error("Malformed percent-escape in '{0}'")]
    MalformedEscape(String),

    #[error("Decoded text is not valid UTF-8: '{0}'")]
    InvalidUtf8(String),
}

pub type Result<T> = std::result::Result<T, UrlError>;
