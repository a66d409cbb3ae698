// ABOUTME: Template module wiring the URL helpers into handlebars
// ABOUTME: Provides the helper registry, a configured engine, and render contexts

pub mod context;
pub mod engine;
pub mod error;
pub mod helpers;

pub use context::TemplateContext;
pub use engine::{EscapeMode, TemplateConfig, TemplateEngine};
pub use error::{Result, TemplateError};
pub use helpers::{helper_names, register_helpers};
