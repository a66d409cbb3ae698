// ABOUTME: Main library module for urlhelpers
// ABOUTME: Exports the URL transforms, the handlebars helper registry, and the CLI

pub mod cli;
pub mod template;
pub mod urls;

// Re-export commonly used types
pub use template::{register_helpers, TemplateEngine};
pub use urls::{UrlError, UrlRecord};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
