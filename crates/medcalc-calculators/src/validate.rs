//! Reusable field checks that calculators compose inside their own
//! `validate_inputs`, short-circuiting on the first failure, plus typed
//! readers for use inside `calculate` once validation has passed.

use medcalc_core::models::value::{InputMap, InputValue};

/// Every named field is present.
pub fn require_fields(inputs: &InputMap, names: &[&str]) -> Result<(), String> {
    for name in names {
        if !inputs.contains_key(*name) {
            return Err(format!("missing required field: {name}"));
        }
    }
    Ok(())
}

/// The field is present and numeric.
pub fn require_number(inputs: &InputMap, name: &str) -> Result<f64, String> {
    match inputs.get(name) {
        Some(value) => value
            .as_number()
            .ok_or_else(|| format!("{name} must be numeric")),
        None => Err(format!("missing required field: {name}")),
    }
}

/// The field is present and boolean.
pub fn require_bool(inputs: &InputMap, name: &str) -> Result<bool, String> {
    match inputs.get(name) {
        Some(value) => value
            .as_bool()
            .ok_or_else(|| format!("{name} must be true or false")),
        None => Err(format!("missing required field: {name}")),
    }
}

/// Numeric value within [min, max]. Absent fields pass — pair with
/// `require_fields` for presence.
pub fn check_range(inputs: &InputMap, name: &str, min: f64, max: f64) -> Result<(), String> {
    let Some(value) = inputs.get(name) else {
        return Ok(());
    };
    let n = value
        .as_number()
        .ok_or_else(|| format!("{name} must be numeric"))?;
    if n < min || n > max {
        return Err(format!("{name} must be between {min} and {max}, got {n}"));
    }
    Ok(())
}

/// Text value drawn from an allowed set, case-insensitive. Absent
/// fields pass.
pub fn check_allowed(inputs: &InputMap, name: &str, allowed: &[&str]) -> Result<(), String> {
    let Some(value) = inputs.get(name) else {
        return Ok(());
    };
    let text = value
        .as_text()
        .ok_or_else(|| format!("{name} must be one of: {}", allowed.join(", ")))?;
    if allowed.iter().any(|a| a.eq_ignore_ascii_case(text)) {
        Ok(())
    } else {
        Err(format!(
            "{name} must be one of: {}, got '{text}'",
            allowed.join(", ")
        ))
    }
}

/// Read a validated numeric field. Panics if absent or non-numeric;
/// `calculate` only runs after `validate_inputs` accepted the map.
pub fn number(inputs: &InputMap, name: &str) -> f64 {
    inputs
        .get(name)
        .and_then(InputValue::as_number)
        .unwrap_or_else(|| panic!("{name} missing or non-numeric after validation"))
}

/// Read a validated boolean field.
pub fn boolean(inputs: &InputMap, name: &str) -> bool {
    inputs
        .get(name)
        .and_then(InputValue::as_bool)
        .unwrap_or_else(|| panic!("{name} missing or non-boolean after validation"))
}

/// Read a validated text field.
pub fn text<'a>(inputs: &'a InputMap, name: &str) -> &'a str {
    inputs
        .get(name)
        .and_then(InputValue::as_text)
        .unwrap_or_else(|| panic!("{name} missing or non-text after validation"))
}

/// Read an optional numeric field.
pub fn opt_number(inputs: &InputMap, name: &str) -> Option<f64> {
    inputs.get(name).and_then(InputValue::as_number)
}
