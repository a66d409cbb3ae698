// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides temp-dir fixtures for template and data files plus a render shortcut

#![allow(dead_code)]

use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::fs;

use urlhelpers::TemplateEngine;

/// Render `template` with the default engine, panicking on failure.
pub fn render(template: &str, data: &JsonValue) -> String {
    TemplateEngine::new()
        .render_template(template, data)
        .unwrap_or_else(|e| panic!("failed to render {:?}: {}", template, e))
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.path().join(format!("{}_output.txt", name))
    }

    pub async fn create_template_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(format!("{}.hbs", name));
        fs::write(&path, content)
            .await
            .expect("Failed to write template file");
        path
    }

    pub async fn create_data_file(&self, name: &str, data: &JsonValue) -> PathBuf {
        let path = self.path().join(format!("{}.json", name));
        let content = serde_json::to_string_pretty(data).expect("Failed to serialize data");
        fs::write(&path, content)
            .await
            .expect("Failed to write data file");
        path
    }

    pub async fn create_config_file(&self, content: &str) -> PathBuf {
        let path = self.path().join("urlhelpers.yaml");
        fs::write(&path, content)
            .await
            .expect("Failed to write config file");
        path
    }
}
