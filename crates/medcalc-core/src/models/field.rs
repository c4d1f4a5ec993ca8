use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::value::InputValue;

/// Semantic type of an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldType {
    Numeric,
    Enumerated,
    Boolean,
    FreeText,
    Date,
}

/// Declarative description of one calculator input. Consumed by form
/// builders and validation layers; produced by each calculator's
/// `input_schema`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InputFieldSpec {
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub allowed: Option<Vec<String>>,
    pub default: Option<InputValue>,
    pub help: Option<String>,
}

impl InputFieldSpec {
    pub fn new(name: &str, label: &str, field_type: FieldType, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            field_type,
            required,
            min: None,
            max: None,
            allowed: None,
            default: None,
            help: None,
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_allowed(mut self, allowed: &[&str]) -> Self {
        self.allowed = Some(allowed.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_default(mut self, default: InputValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_bounds_and_help() {
        let spec = InputFieldSpec::new("psa", "PSA (ng/mL)", FieldType::Numeric, true)
            .with_range(0.0, 5000.0)
            .with_help("Serum prostate-specific antigen");
        assert_eq!(spec.name, "psa");
        assert!(spec.required);
        assert_eq!(spec.min, Some(0.0));
        assert_eq!(spec.max, Some(5000.0));
        assert!(spec.allowed.is_none());
        assert_eq!(spec.help.as_deref(), Some("Serum prostate-specific antigen"));
    }
}
