//! Per-field plausibility rules and the extraction-quality checker.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use medcalc_core::models::field::FieldType;
use medcalc_core::models::value::{InputMap, InputValue};

/// How badly a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    /// The value cannot be used at all (wrong type or format).
    Error,
    /// Plausible value outside the typical clinical range.
    Warning,
}

/// One finding from extraction-quality checking.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldIssue {
    pub field: String,
    pub value: String,
    pub severity: Severity,
    pub is_valid: bool,
    pub message: String,
}

/// Plausibility rule for one canonical clinical field.
pub struct FieldRule {
    pub field: &'static str,
    pub expected: FieldType,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub pattern: Option<Regex>,
}

fn numeric(field: &'static str, min: f64, max: f64) -> FieldRule {
    FieldRule {
        field,
        expected: FieldType::Numeric,
        min: Some(min),
        max: Some(max),
        pattern: None,
    }
}

fn boolean(field: &'static str) -> FieldRule {
    FieldRule {
        field,
        expected: FieldType::Boolean,
        min: None,
        max: None,
        pattern: None,
    }
}

fn enumerated(field: &'static str, pattern: &str) -> FieldRule {
    FieldRule {
        field,
        expected: FieldType::Enumerated,
        min: None,
        max: None,
        pattern: Some(Regex::new(pattern).expect("static field pattern")),
    }
}

static RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    vec![
        numeric("age", 0.0, 120.0),
        numeric("psa", 0.0, 5000.0),
        numeric("prostate_volume", 1.0, 500.0),
        numeric("gleason_primary", 1.0, 5.0),
        numeric("gleason_secondary", 1.0, 5.0),
        numeric("gleason_tertiary", 1.0, 5.0),
        numeric("percent_positive_cores", 0.0, 100.0),
        numeric("creatinine", 0.1, 20.0),
        numeric("weight_kg", 1.0, 500.0),
        numeric("height_cm", 30.0, 260.0),
        numeric("urea", 0.5, 100.0),
        numeric("respiratory_rate", 4.0, 80.0),
        numeric("systolic_bp", 40.0, 300.0),
        numeric("diastolic_bp", 20.0, 200.0),
        enumerated("clinical_stage", r"(?i)^T[1-4][a-c]?$"),
        enumerated("sex", r"(?i)^(male|female)$"),
        boolean("confusion"),
        boolean("chf"),
        boolean("hypertension"),
        boolean("diabetes"),
        boolean("stroke_history"),
        boolean("vascular_disease"),
    ]
});

/// The plausibility rule for a canonical field, if one is declared.
pub fn rule_for(field: &str) -> Option<&'static FieldRule> {
    RULES.iter().find(|rule| rule.field == field)
}

/// Check every extracted field against its canonical rule. Fields with
/// no declared rule produce no issue. Out-of-range numerics are
/// warnings; type and format mismatches are errors.
pub fn validate_entities(entities: &InputMap) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    for (field, value) in entities {
        let Some(rule) = rule_for(field) else {
            continue;
        };
        if let Some(issue) = check_value(rule, field, value) {
            issues.push(issue);
        }
    }
    issues
}

fn check_value(rule: &FieldRule, field: &str, value: &InputValue) -> Option<FieldIssue> {
    match rule.expected {
        FieldType::Numeric => {
            // Extracted numbers often arrive as text; parse before
            // declaring a type mismatch.
            let parsed = match value {
                InputValue::Number(n) => Some(*n),
                InputValue::Text(s) => s.trim().parse::<f64>().ok(),
                InputValue::Bool(_) => None,
            };
            let Some(n) = parsed else {
                return Some(issue(
                    field,
                    value,
                    Severity::Error,
                    format!("{field} must be numeric"),
                ));
            };
            if let (Some(min), Some(max)) = (rule.min, rule.max)
                && (n < min || n > max)
            {
                return Some(issue(
                    field,
                    value,
                    Severity::Warning,
                    format!("{field} value {n} outside plausible range [{min}, {max}]"),
                ));
            }
            None
        }
        FieldType::Boolean => match value {
            InputValue::Bool(_) => None,
            _ => Some(issue(
                field,
                value,
                Severity::Error,
                format!("{field} must be true or false"),
            )),
        },
        FieldType::Enumerated => {
            let Some(text) = value.as_text() else {
                return Some(issue(
                    field,
                    value,
                    Severity::Error,
                    format!("{field} must be text"),
                ));
            };
            match &rule.pattern {
                Some(pattern) if !pattern.is_match(text.trim()) => Some(issue(
                    field,
                    value,
                    Severity::Error,
                    format!("{field} value '{text}' does not match the expected format"),
                )),
                _ => None,
            }
        }
        FieldType::FreeText | FieldType::Date => None,
    }
}

fn issue(field: &str, value: &InputValue, severity: Severity, message: String) -> FieldIssue {
    FieldIssue {
        field: field.to_string(),
        value: value.display(),
        severity,
        is_valid: false,
        message,
    }
}
