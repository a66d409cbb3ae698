// ABOUTME: Command implementations for the urlhelpers CLI
// ABOUTME: Handles execution of the render, validate, and helpers commands

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::info;

use super::config::Config;
use crate::template::{TemplateContext, TemplateEngine};

/// Where the template text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Inline(String),
    Stdin,
    File(PathBuf),
}

impl TemplateSource {
    /// Interpret a positional argument: `-` means stdin, anything else a file
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            TemplateSource::Stdin
        } else {
            TemplateSource::File(PathBuf::from(arg))
        }
    }

    async fn read(self) -> Result<String> {
        match self {
            TemplateSource::Inline(text) => Ok(text),
            TemplateSource::Stdin => {
                let mut text = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut text)
                    .await
                    .context("Failed to read template from stdin")?;
                Ok(text)
            }
            TemplateSource::File(path) => tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read template '{}'", path.display())),
        }
    }
}

/// Render a template and write the result
pub async fn render(
    source: TemplateSource,
    data: Option<PathBuf>,
    output: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let template = source.read().await?;

    let mut context = TemplateContext::new(&config.template_vars);
    if let Some(data_path) = data {
        let raw = tokio::fs::read_to_string(&data_path)
            .await
            .with_context(|| format!("Failed to read data file '{}'", data_path.display()))?;
        let json = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid JSON in '{}'", data_path.display()))?;
        context = context.with_data(json);
    }
    info!("Rendering with {} template variables", context.variables.len());

    let engine = TemplateEngine::with_config(&config.template);
    let rendered = engine.render(&template, &context)?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, &rendered)
                .await
                .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
            info!("Output written to: {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Validate template syntax
pub async fn validate(template_path: PathBuf, config: &Config) -> Result<()> {
    info!("Validating template: {}", template_path.display());

    let template = TemplateSource::File(template_path.clone()).read().await?;
    let engine = TemplateEngine::with_config(&config.template);
    engine.validate_template(&template)?;

    println!("✓ Template '{}' is valid", template_path.display());
    Ok(())
}

/// Print the registered helper names, one per line
pub fn list_helpers(config: &Config) -> Result<()> {
    let engine = TemplateEngine::with_config(&config.template);
    for name in engine.helper_names() {
        println!("{}", name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_template_source_from_arg() {
        assert_eq!(TemplateSource::from_arg("-"), TemplateSource::Stdin);
        assert_eq!(
            TemplateSource::from_arg("page.hbs"),
            TemplateSource::File(PathBuf::from("page.hbs"))
        );
    }

    #[tokio::test]
    async fn test_render_to_file() {
        let temp_dir = tempdir().unwrap();
        let out = temp_dir.path().join("out.txt");

        let mut config = Config::default();
        config
            .template_vars
            .insert("url".to_string(), "https://foo.bar".to_string());

        render(
            TemplateSource::Inline("{{stripProtocol url}}".to_string()),
            None,
            Some(out.clone()),
            &config,
        )
        .await
        .unwrap();

        assert_eq!(std::fs::read_to_string(out).unwrap(), "//foo.bar/");
    }

    #[tokio::test]
    async fn test_render_with_data_file() {
        let temp_dir = tempdir().unwrap();
        let data = temp_dir.path().join("data.json");
        let out = temp_dir.path().join("out.txt");
        std::fs::write(&data, r#"{"page": "http://example.com/a/b"}"#).unwrap();

        render(
            TemplateSource::Inline("{{urlResolve page \"c\"}}".to_string()),
            Some(data),
            Some(out.clone()),
            &Config::default(),
        )
        .await
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(out).unwrap(),
            "http://example.com/a/c"
        );
    }

    #[tokio::test]
    async fn test_validate_rejects_bad_syntax() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.hbs");
        std::fs::write(&path, "{{urlParse url}").unwrap();

        assert!(validate(path, &Config::default()).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_template_file() {
        let result = render(
            TemplateSource::File(PathBuf::from("/nonexistent/template.hbs")),
            None,
            None,
            &Config::default(),
        )
        .await;
        assert!(result.is_err());
    }
}
