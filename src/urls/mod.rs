// ABOUTME: URL transforms used by the template helpers
// ABOUTME: Resolution, parsing, percent-encoding and stripping of URL strings

pub mod encode;
pub mod error;
pub mod parse;
pub mod resolve;
pub mod strip;

pub use encode::{decode_uri_component, encode_uri_component};
pub use error::{Result, UrlError};
pub use parse::{url_parse, UrlRecord};
pub use resolve::url_resolve;
pub use strip::{strip_protocol, strip_querystring};
