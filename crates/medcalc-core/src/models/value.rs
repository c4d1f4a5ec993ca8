use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single typed input value.
///
/// Values are tagged once at the boundary so calculators can assume
/// well-typed fields after validation instead of re-checking types ad
/// hoc. Untagged on the wire: JSON numbers, strings, and booleans map
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum InputValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl InputValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            InputValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            InputValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            InputValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Human-readable rendering for messages and note text.
    pub fn display(&self) -> String {
        match self {
            InputValue::Bool(b) => b.to_string(),
            InputValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            InputValue::Number(n) => n.to_string(),
            InputValue::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for InputValue {
    fn from(n: f64) -> Self {
        InputValue::Number(n)
    }
}

impl From<i64> for InputValue {
    fn from(n: i64) -> Self {
        InputValue::Number(n as f64)
    }
}

impl From<bool> for InputValue {
    fn from(b: bool) -> Self {
        InputValue::Bool(b)
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::Text(s.to_string())
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        InputValue::Text(s)
    }
}

/// Field name → typed value. Ordered map so iteration, serialization,
/// and rendering stay deterministic.
pub type InputMap = BTreeMap<String, InputValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_none_across_types() {
        assert_eq!(InputValue::Number(7.5).as_number(), Some(7.5));
        assert_eq!(InputValue::Number(7.5).as_text(), None);
        assert_eq!(InputValue::Text("male".into()).as_text(), Some("male"));
        assert_eq!(InputValue::Text("male".into()).as_bool(), None);
        assert_eq!(InputValue::Bool(true).as_bool(), Some(true));
        assert_eq!(InputValue::Bool(true).as_number(), None);
    }

    #[test]
    fn untagged_serde_round_trip() {
        let raw = r#"{"age": 64, "sex": "male", "confusion": false}"#;
        let map: InputMap = serde_json::from_str(raw).unwrap();
        assert_eq!(map["age"], InputValue::Number(64.0));
        assert_eq!(map["sex"], InputValue::Text("male".into()));
        assert_eq!(map["confusion"], InputValue::Bool(false));
    }

    #[test]
    fn display_trims_integral_numbers() {
        assert_eq!(InputValue::Number(64.0).display(), "64");
        assert_eq!(InputValue::Number(7.5).display(), "7.5");
    }
}
