// ABOUTME: Error types for template engine operations
// ABOUTME: Wraps handlebars, syntax and data failures raised while rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template syntax error: {0}")]
    SyntaxError(String),

    #[error("Invalid template data: {0}")]
    InvalidData(String),

    #[error("Handlebars error: {0}")]
    HandlebarsError(#[from] handlebars::RenderError),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
