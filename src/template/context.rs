// ABOUTME: Template context management for rendering
// ABOUTME: Combines string variables with an optional JSON data document

use serde_json::{Map, Value as JsonValue};
use std::collections::HashMap;

use super::error::{Result, TemplateError};

#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    pub variables: HashMap<String, String>,
    pub data: Option<JsonValue>,
}

impl TemplateContext {
    /// Create a new template context from string variables
    pub fn new(variables: &HashMap<String, String>) -> Self {
        Self {
            variables: variables.clone(),
            data: None,
        }
    }

    /// Attach a JSON document whose top-level keys override variables
    pub fn with_data(mut self, data: JsonValue) -> Self {
        self.data = Some(data);
        self
    }

    /// Add or update a variable
    pub fn set_variable(&mut self, key: String, value: String) {
        self.variables.insert(key, value);
    }

    /// Get a variable value
    pub fn get_variable(&self, key: &str) -> Option<&String> {
        self.variables.get(key)
    }

    /// Add multiple variables
    pub fn extend_variables(&mut self, vars: HashMap<String, String>) {
        self.variables.extend(vars);
    }

    /// Convert context to JSON for handlebars rendering
    pub fn to_json(&self) -> Result<JsonValue> {
        let mut merged: Map<String, JsonValue> = self
            .variables
            .iter()
            .map(|(k, v)| (k.clone(), JsonValue::String(v.clone())))
            .collect();

        match &self.data {
            None => {}
            Some(JsonValue::Object(obj)) => {
                for (key, value) in obj {
                    merged.insert(key.clone(), value.clone());
                }
            }
            Some(other) => {
                return Err(TemplateError::InvalidData(format!(
                    "expected a JSON object, found {}",
                    json_kind(other)
                )))
            }
        }

        Ok(JsonValue::Object(merged))
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_context_creation() {
        let mut variables = HashMap::new();
        variables.insert("site".to_string(), "https://example.com".to_string());

        let context = TemplateContext::new(&variables);
        assert_eq!(
            context.get_variable("site"),
            Some(&"https://example.com".to_string())
        );
        assert_eq!(context.get_variable("missing"), None);
    }

    #[test]
    fn test_set_and_extend_variables() {
        let mut context = TemplateContext::default();
        context.set_variable("a".to_string(), "1".to_string());

        let mut more = HashMap::new();
        more.insert("b".to_string(), "2".to_string());
        context.extend_variables(more);

        assert_eq!(context.variables.len(), 2);
    }

    #[test]
    fn test_data_overrides_variables() {
        let mut variables = HashMap::new();
        variables.insert("testUrl".to_string(), "http://old.example".to_string());
        variables.insert("keep".to_string(), "yes".to_string());

        let context = TemplateContext::new(&variables)
            .with_data(json!({ "testUrl": "https://foo.bar", "nested": { "n": 1 } }));
        let json = context.to_json().unwrap();

        assert_eq!(json["testUrl"], "https://foo.bar");
        assert_eq!(json["keep"], "yes");
        assert_eq!(json["nested"]["n"], 1);
    }

    #[test]
    fn test_non_object_data_is_rejected() {
        let context = TemplateContext::default().with_data(json!([1, 2, 3]));
        assert!(matches!(
            context.to_json(),
            Err(TemplateError::InvalidData(_))
        ));
    }
}
