// ABOUTME: Configuration management for the urlhelpers application
// ABOUTME: Handles loading and merging configuration from files and environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::template::TemplateConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub template: TemplateConfig,

    #[serde(default)]
    pub template_vars: HashMap<String, String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file(),
        };

        let mut config: Config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&contents)?
        } else {
            Config::default()
        };

        config.merge_env()?;
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        let possible_paths = [
            PathBuf::from("urlhelpers.yaml"),
            PathBuf::from("urlhelpers.yml"),
            PathBuf::from(".urlhelpers.yaml"),
            PathBuf::from(".urlhelpers.yml"),
        ];

        // Check home directory
        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".urlhelpers").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        // Check current directory
        for path in possible_paths {
            if path.exists() {
                return path;
            }
        }

        // Return default path (may not exist)
        PathBuf::from("urlhelpers.yaml")
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) -> Result<()> {
        if let Ok(level) = std::env::var("URLHELPERS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("URLHELPERS_LOG_FORMAT") {
            self.logging.format = format;
        }

        if let Ok(strict) = std::env::var("URLHELPERS_STRICT") {
            self.template.strict_mode = strict.parse()?;
        }
        if let Ok(escape) = std::env::var("URLHELPERS_ESCAPE") {
            self.template.escape = escape.parse()?;
        }

        Ok(())
    }

    /// Merge additional variables into template variables
    pub fn merge_variables(&mut self, vars: HashMap<String, String>) {
        self.template_vars.extend(vars);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::EscapeMode;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(!config.template.strict_mode);
        assert_eq!(config.template.escape, EscapeMode::Html);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("urlhelpers.yaml");

        let config_content = r#"
template:
  strict_mode: true
  escape: none
template_vars:
  base: "https://example.com/"
logging:
  level: debug
  format: compact
"#;
        fs::write(&config_path, config_content).unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert!(config.template.strict_mode);
        assert_eq!(config.template.escape, EscapeMode::None);
        assert_eq!(
            config.template_vars.get("base"),
            Some(&"https://example.com/".to_string())
        );
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = tempdir().unwrap();
        let config = Config::load(Some(temp_dir.path().join("absent.yaml"))).unwrap();
        assert!(config.template_vars.is_empty());
    }

    #[test]
    fn test_merge_variables() {
        let mut config = Config::default();
        let mut vars = HashMap::new();
        vars.insert("url".to_string(), "https://foo.bar".to_string());
        config.merge_variables(vars);
        assert_eq!(config.template_vars.len(), 1);
    }
}
