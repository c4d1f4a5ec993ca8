//! Completeness gate: is an extraction populated enough to be worth
//! sending downstream at all?

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use medcalc_core::models::value::{InputMap, InputValue};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompletenessReport {
    pub total_fields: usize,
    pub populated_fields: usize,
    /// populated / total; 0.0 for an empty extraction.
    pub filled_ratio: f64,
    pub missing_required: Vec<String>,
    /// No required field missing and at least one field populated.
    pub usable: bool,
}

fn is_empty(value: &InputValue) -> bool {
    matches!(value, InputValue::Text(text) if text.trim().is_empty())
}

/// Compute what fraction of the extraction is populated and which of
/// the caller's required canonical fields are absent or blank.
pub fn completeness(entities: &InputMap, required: &[&str]) -> CompletenessReport {
    let total_fields = entities.len();
    let populated_fields = entities.values().filter(|value| !is_empty(value)).count();
    let filled_ratio = if total_fields == 0 {
        0.0
    } else {
        populated_fields as f64 / total_fields as f64
    };

    let missing_required: Vec<String> = required
        .iter()
        .filter(|field| entities.get(**field).is_none_or(is_empty))
        .map(|field| field.to_string())
        .collect();

    let usable = missing_required.is_empty() && populated_fields > 0;
    CompletenessReport {
        total_fields,
        populated_fields,
        filled_ratio,
        missing_required,
        usable,
    }
}
