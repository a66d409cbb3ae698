// ABOUTME: Browser-style resolution of a href against a base URL
// ABOUTME: Absolute bases use WHATWG joining; path-only bases resolve path-wise

use ::url::{ParseError, Position, Url};

use super::error::{Result, UrlError};

/// Anchor used to resolve path-only bases. Never appears in output.
const PATH_ANCHOR: &str = "http://path-anchor.invalid";

/// Prefix of the placeholder directories put in front of a relative base so
/// that `..` segments climbing out of it can be counted.
const SCAFFOLD_DIR: &str = "path-anchor-";

/// Resolve `href` against `base` the way a browser resolves a link on a page.
///
/// * Absolute `base`: standard URL joining, so `("http://example.com/one", "/two")`
///   gives `"http://example.com/two"`.
/// * Absolute `href`: the href replaces the base.
/// * Path-only `base`: the result is path-only too, so `("/one/two/three", "four")`
///   gives `"/one/two/four"`. `..` segments stop at the root of a rooted base,
///   but climb out of a relative one: `("a/b", "../../x")` gives `"../x"`.
/// * Protocol-relative `base` (`//host/path`): the result keeps the `//host` form.
///
/// A base that carries a scheme but does not parse is an error, as is a href
/// that cannot be joined.
pub fn url_resolve(base: &str, href: &str) -> Result<String> {
    match Url::parse(base) {
        Ok(base_url) => base_url
            .join(href)
            .map(String::from)
            .map_err(|source| invalid(href, source)),
        Err(ParseError::RelativeUrlWithoutBase) => match Url::parse(href) {
            Ok(absolute) => Ok(absolute.into()),
            Err(_) => resolve_path_only(base, href),
        },
        Err(source) => Err(invalid(base, source)),
    }
}

fn resolve_path_only(base: &str, href: &str) -> Result<String> {
    let protocol_relative = base.starts_with("//");
    let rooted = base.starts_with('/');
    let depth = if rooted { 0 } else { parent_segments(href) };
    let scaffold: String = (0..depth)
        .map(|i| format!("/{}{}", SCAFFOLD_DIR, i))
        .collect();

    let anchored = if protocol_relative {
        format!("http:{}", base)
    } else if rooted {
        format!("{}{}", PATH_ANCHOR, base)
    } else {
        format!("{}{}/{}", PATH_ANCHOR, scaffold, base)
    };
    let anchor = Url::parse(&anchored).map_err(|source| invalid(base, source))?;
    let joined = anchor.join(href).map_err(|source| invalid(href, source))?;

    if protocol_relative || joined.host_str() != anchor.host_str() {
        return Ok(format!("//{}", &joined[Position::BeforeUsername..]));
    }

    let path = &joined[Position::BeforePath..];
    if rooted || href.starts_with('/') {
        return Ok(path.to_string());
    }

    let mut rest = path;
    let mut kept = 0;
    for i in 0..depth {
        let dir = format!("/{}{}", SCAFFOLD_DIR, i);
        match rest
            .strip_prefix(dir.as_str())
            .filter(|r| r.is_empty() || r.starts_with('/'))
        {
            Some(remaining) => {
                rest = remaining;
                kept += 1;
            }
            None => break,
        }
    }
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    Ok(format!("{}{}", "../".repeat(depth - kept), rest))
}

/// Number of `..` segments in the path part of `href`.
fn parent_segments(href: &str) -> usize {
    href.split(['?', '#'])
        .next()
        .unwrap_or("")
        .split('/')
        .filter(|segment| *segment == "..")
        .count()
}

fn invalid(input: &str, source: ParseError) -> UrlError {
    UrlError::Invalid {
        input: input.to_string(),
        source,
    }
}
