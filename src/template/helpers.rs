// ABOUTME: Handlebars helper functions for URL manipulation
// ABOUTME: Wraps the URL transforms as value-returning helpers usable inline or as subexpressions

use handlebars::{Context, Handlebars, Helper, HelperDef, RenderContext, RenderError, ScopedJson};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::urls;

type HelperValue = std::result::Result<JsonValue, RenderError>;
type HelperFn = for<'reg, 'rc> fn(&Helper<'reg, 'rc>) -> HelperValue;

/// Adapts a plain function into a helper that returns a value instead of
/// writing to the output. Handlebars then applies its own escaping rules,
/// and the helper can be nested as `(name ...)`.
pub struct ValueHelper(HelperFn);

impl HelperDef for ValueHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> std::result::Result<ScopedJson<'reg, 'rc>, RenderError> {
        (self.0)(h).map(ScopedJson::Derived)
    }
}

/// Helpers in registration order.
const HELPERS: &[(&str, HelperFn)] = &[
    ("urlResolve", url_resolve_helper),
    ("stripQuerystring", strip_querystring_helper),
    ("encodeURI", encode_uri_helper),
    ("decodeURI", decode_uri_helper),
    ("urlParse", url_parse_helper),
    ("stripProtocol", strip_protocol_helper),
    ("escape", encode_uri_helper),
    ("url_encode", encode_uri_helper),
    ("url_decode", decode_uri_helper),
    ("JSONstringify", json_stringify_helper),
];

/// String argument at `index`, or `None` when it is absent or not a string.
/// Helpers render nothing in that case instead of failing the template.
fn string_param<'a>(h: &'a Helper, index: usize) -> Option<&'a str> {
    h.param(index).and_then(|v| v.value().as_str())
}

fn url_failure(h: &Helper, err: urls::UrlError) -> RenderError {
    let desc = format!("{} helper failed: {}", h.name(), err);
    RenderError::from_error(&desc, err)
}

/// urlResolve helper - resolves a href against a base URL
pub fn url_resolve_helper(h: &Helper) -> HelperValue {
    let (Some(base), Some(href)) = (string_param(h, 0), string_param(h, 1)) else {
        return Ok(JsonValue::Null);
    };

    let resolved = urls::url_resolve(base, href).map_err(|e| url_failure(h, e))?;
    Ok(JsonValue::String(resolved))
}

/// stripQuerystring helper
pub fn strip_querystring_helper(h: &Helper) -> HelperValue {
    let Some(url) = string_param(h, 0) else {
        return Ok(JsonValue::Null);
    };
    Ok(JsonValue::String(urls::strip_querystring(url)))
}

/// encodeURI helper - percent-encodes its input as a URI component
pub fn encode_uri_helper(h: &Helper) -> HelperValue {
    let Some(text) = string_param(h, 0) else {
        return Ok(JsonValue::Null);
    };
    Ok(JsonValue::String(urls::encode_uri_component(text)))
}

/// decodeURI helper. Output may contain markup-significant characters, so
/// templates should use `{{{decodeURI ...}}}`.
pub fn decode_uri_helper(h: &Helper) -> HelperValue {
    let Some(text) = string_param(h, 0) else {
        return Ok(JsonValue::Null);
    };

    let decoded = urls::decode_uri_component(text).map_err(|e| url_failure(h, e))?;
    Ok(JsonValue::String(decoded))
}

/// urlParse helper - returns the URL record as an object
pub fn url_parse_helper(h: &Helper) -> HelperValue {
    let Some(url) = string_param(h, 0) else {
        return Ok(JsonValue::Null);
    };

    let record = urls::url_parse(url).map_err(|e| url_failure(h, e))?;
    serde_json::to_value(record)
        .map_err(|e| RenderError::new(format!("urlParse serialization error: {}", e)))
}

/// stripProtocol helper
pub fn strip_protocol_helper(h: &Helper) -> HelperValue {
    let Some(url) = string_param(h, 0) else {
        return Ok(JsonValue::Null);
    };
    Ok(JsonValue::String(urls::strip_protocol(url)))
}

/// JSONstringify helper - compact JSON of any value
pub fn json_stringify_helper(h: &Helper) -> HelperValue {
    let Some(value) = h.param(0).map(|v| v.value()).filter(|v| !v.is_null()) else {
        return Ok(JsonValue::Null);
    };

    let json = serde_json::to_string(value)
        .map_err(|e| RenderError::new(format!("JSON serialization error: {}", e)))?;
    Ok(JsonValue::String(json))
}

/// Names of every helper installed by [`register_helpers`].
pub fn helper_names() -> Vec<&'static str> {
    HELPERS.iter().map(|(name, _)| *name).collect()
}

/// Register all URL helpers with a Handlebars instance
pub fn register_helpers(handlebars: &mut Handlebars) {
    for (name, helper) in HELPERS {
        handlebars.register_helper(name, Box::new(ValueHelper(*helper)));
    }
    debug!("Registered {} URL helpers", HELPERS.len());
}
