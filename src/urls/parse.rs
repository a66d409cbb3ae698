// ABOUTME: Decomposition of a URL string into a flat record of its components
// ABOUTME: Absolute URLs go through the WHATWG parser; relative ones are split by hand

use ::url::{ParseError, Url};
use percent_encoding::percent_decode_str;
use serde::Serialize;

use super::error::{Result, UrlError};

/// Flat decomposition of a URL. Field order is the serialization order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    /// Scheme with its trailing colon, e.g. `"http:"`.
    pub protocol: Option<String>,
    /// `true` when `//` follows the scheme.
    pub slashes: Option<bool>,
    /// `user[:password]`, percent-decoded.
    pub auth: Option<String>,
    /// Hostname plus `:port` when a port was given.
    pub host: Option<String>,
    pub port: Option<String>,
    pub hostname: Option<String>,
    /// Fragment including the leading `#`.
    pub hash: Option<String>,
    /// Query including the leading `?`.
    pub search: Option<String>,
    /// Query without the leading `?`.
    pub query: Option<String>,
    pub pathname: Option<String>,
    /// `pathname` followed by `search`.
    pub path: Option<String>,
    pub href: String,
}

/// Split `input` into a [`UrlRecord`].
///
/// Relative inputs leave the scheme and authority fields empty and keep
/// `href` exactly as given. An input that has a scheme but fails to parse is
/// an error.
pub fn url_parse(input: &str) -> Result<UrlRecord> {
    match Url::parse(input) {
        Ok(url) => Ok(from_absolute(&url)),
        Err(ParseError::RelativeUrlWithoutBase) => Ok(from_relative(input)),
        Err(source) => Err(UrlError::Invalid {
            input: input.to_string(),
            source,
        }),
    }
}

fn from_absolute(url: &Url) -> UrlRecord {
    let auth = if url.username().is_empty() && url.password().is_none() {
        None
    } else {
        let user = percent_decode_str(url.username()).decode_utf8_lossy();
        Some(match url.password() {
            Some(password) => format!(
                "{}:{}",
                user,
                percent_decode_str(password).decode_utf8_lossy()
            ),
            None => user.into_owned(),
        })
    };

    let bracketed = url.host_str().filter(|h| !h.is_empty());
    let hostname = bracketed.map(|h| h.trim_start_matches('[').trim_end_matches(']').to_string());
    let port = url.port().map(|p| p.to_string());
    let host = bracketed.map(|h| match &port {
        Some(port) => format!("{}:{}", h, port),
        None => h.to_string(),
    });

    let pathname = Some(url.path()).filter(|p| !p.is_empty()).map(str::to_string);
    let search = url.query().map(|q| format!("?{}", q));

    UrlRecord {
        protocol: Some(format!("{}:", url.scheme())),
        slashes: url.has_authority().then_some(true),
        auth,
        host,
        port,
        hostname,
        hash: url.fragment().map(|f| format!("#{}", f)),
        path: join_path(&pathname, &search),
        query: url.query().map(str::to_string),
        search,
        pathname,
        href: url.as_str().to_string(),
    }
}

fn from_relative(input: &str) -> UrlRecord {
    let (rest, hash) = match input.find('#') {
        Some(at) => (&input[..at], Some(input[at..].to_string())),
        None => (input, None),
    };
    let (pathname, search) = match rest.find('?') {
        Some(at) => (&rest[..at], Some(rest[at..].to_string())),
        None => (rest, None),
    };
    let pathname = Some(pathname).filter(|p| !p.is_empty()).map(str::to_string);

    UrlRecord {
        hash,
        query: search.as_deref().map(|s| s[1..].to_string()),
        path: join_path(&pathname, &search),
        search,
        pathname,
        href: input.to_string(),
        ..UrlRecord::default()
    }
}

fn join_path(pathname: &Option<String>, search: &Option<String>) -> Option<String> {
    match (pathname, search) {
        (None, None) => None,
        (pathname, search) => Some(format!(
            "{}{}",
            pathname.as_deref().unwrap_or(""),
            search.as_deref().unwrap_or("")
        )),
    }
}
