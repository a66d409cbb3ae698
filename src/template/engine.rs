// ABOUTME: Template engine built on Handlebars with the URL helpers registered
// ABOUTME: Provides configured rendering, syntax validation, and custom helper registration

use handlebars::Handlebars;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::{debug, trace};

use super::context::TemplateContext;
use super::error::{Result, TemplateError};
use super::helpers;

/// How rendered `{{ }}` expressions are escaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeMode {
    /// HTML escaping, the Handlebars default. `{{{ }}}` bypasses it.
    #[default]
    Html,
    /// No escaping at all.
    None,
}

impl std::str::FromStr for EscapeMode {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(EscapeMode::Html),
            "none" => Ok(EscapeMode::None),
            other => Err(TemplateError::InvalidData(format!(
                "unknown escape mode '{}', expected 'html' or 'none'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Fail when a template references a missing variable.
    #[serde(default)]
    pub strict_mode: bool,

    #[serde(default)]
    pub escape: EscapeMode,
}

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with default settings and all URL helpers
    pub fn new() -> Self {
        Self::with_config(&TemplateConfig::default())
    }

    /// Create a template engine from configuration
    pub fn with_config(config: &TemplateConfig) -> Self {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(config.strict_mode);
        handlebars.set_dev_mode(false);

        if config.escape == EscapeMode::None {
            handlebars.register_escape_fn(handlebars::no_escape);
        }

        helpers::register_helpers(&mut handlebars);

        debug!(
            strict_mode = config.strict_mode,
            escape = ?config.escape,
            "Template engine initialized"
        );
        Self { handlebars }
    }

    /// Render a template string with JSON data
    pub fn render_template(&self, template: &str, data: &JsonValue) -> Result<String> {
        trace!(template_len = template.len(), "Rendering template");
        self.handlebars
            .render_template(template, data)
            .map_err(TemplateError::HandlebarsError)
    }

    /// Render a template string with the given context
    pub fn render(&self, template: &str, context: &TemplateContext) -> Result<String> {
        let json_context = context.to_json()?;
        self.render_template(template, &json_context)
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, template: &str) -> Result<()> {
        handlebars::Template::compile(template)
            .map(|_| ())
            .map_err(|e| TemplateError::SyntaxError(e.to_string()))
    }

    /// Check if a string contains template expressions
    pub fn has_templates(&self, text: &str) -> bool {
        text.contains("{{") && text.contains("}}")
    }

    /// Register a custom helper function
    pub fn register_helper<F>(&mut self, name: &str, helper: F)
    where
        F: handlebars::HelperDef + Send + Sync + 'static,
    {
        self.handlebars.register_helper(name, Box::new(helper));
    }

    /// Names of the built-in URL helpers
    pub fn helper_names(&self) -> Vec<&'static str> {
        helpers::helper_names()
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
