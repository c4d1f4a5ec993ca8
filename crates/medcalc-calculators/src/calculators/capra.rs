use std::collections::BTreeMap;

use medcalc_core::models::category::Category;
use medcalc_core::models::field::{FieldType, InputFieldSpec};
use medcalc_core::models::outcome::{CalculationOutcome, ScoreResult};
use medcalc_core::models::value::InputMap;

use crate::Calculator;
use crate::validate::{check_allowed, check_range, number, require_fields, text};

const STAGES: &[&str] = &["T1", "T1a", "T1b", "T1c", "T2", "T2a", "T2b", "T2c", "T3a"];

/// UCSF-CAPRA: pre-treatment prostate cancer risk from PSA, Gleason
/// patterns, clinical stage, age, and percent positive biopsy cores.
/// Total 0-10; 0-2 low, 3-5 intermediate, 6+ high risk.
pub struct Capra;

fn psa_points(psa: f64) -> f64 {
    if psa <= 6.0 {
        0.0
    } else if psa <= 10.0 {
        1.0
    } else if psa <= 20.0 {
        2.0
    } else if psa <= 30.0 {
        3.0
    } else {
        4.0
    }
}

fn gleason_points(primary: u32, secondary: u32) -> f64 {
    if primary >= 4 {
        3.0
    } else if secondary >= 4 {
        1.0
    } else {
        0.0
    }
}

impl Calculator for Capra {
    fn id(&self) -> &'static str {
        "capra"
    }

    fn name(&self) -> &'static str {
        "UCSF-CAPRA"
    }

    fn category(&self) -> Category {
        Category::Oncology
    }

    fn description(&self) -> &'static str {
        "Cancer of the Prostate Risk Assessment score for pre-treatment risk stratification."
    }

    fn references(&self) -> &'static [&'static str] {
        &[
            "Cooperberg MR et al. The University of California, San Francisco Cancer of the Prostate Risk Assessment score. J Urol 2005;173:1938-42.",
        ]
    }

    fn required_inputs(&self) -> &'static [&'static str] {
        &[
            "age",
            "psa",
            "gleason_primary",
            "gleason_secondary",
            "clinical_stage",
            "percent_positive_cores",
        ]
    }

    fn input_schema(&self) -> Vec<InputFieldSpec> {
        vec![
            InputFieldSpec::new("age", "Age (years)", FieldType::Numeric, true)
                .with_range(18.0, 120.0),
            InputFieldSpec::new("psa", "PSA (ng/mL)", FieldType::Numeric, true)
                .with_range(0.0, 5000.0),
            InputFieldSpec::new("gleason_primary", "Gleason primary", FieldType::Numeric, true)
                .with_range(1.0, 5.0),
            InputFieldSpec::new(
                "gleason_secondary",
                "Gleason secondary",
                FieldType::Numeric,
                true,
            )
            .with_range(1.0, 5.0),
            InputFieldSpec::new("clinical_stage", "Clinical T stage", FieldType::Enumerated, true)
                .with_allowed(STAGES),
            InputFieldSpec::new(
                "percent_positive_cores",
                "Positive biopsy cores (%)",
                FieldType::Numeric,
                true,
            )
            .with_range(0.0, 100.0),
        ]
    }

    fn validate_inputs(&self, inputs: &InputMap) -> Result<(), String> {
        require_fields(inputs, self.required_inputs())?;
        check_range(inputs, "age", 18.0, 120.0)?;
        check_range(inputs, "psa", 0.0, 5000.0)?;
        check_range(inputs, "gleason_primary", 1.0, 5.0)?;
        check_range(inputs, "gleason_secondary", 1.0, 5.0)?;
        check_allowed(inputs, "clinical_stage", STAGES)?;
        check_range(inputs, "percent_positive_cores", 0.0, 100.0)?;
        Ok(())
    }

    fn calculate(&self, inputs: &InputMap) -> CalculationOutcome {
        let age = number(inputs, "age");
        let psa = number(inputs, "psa");
        let primary = number(inputs, "gleason_primary") as u32;
        let secondary = number(inputs, "gleason_secondary") as u32;
        let stage = text(inputs, "clinical_stage");
        let cores = number(inputs, "percent_positive_cores");

        let stage_points = if stage.eq_ignore_ascii_case("T3a") { 1.0 } else { 0.0 };
        let components = BTreeMap::from([
            ("psa".to_string(), psa_points(psa)),
            ("gleason".to_string(), gleason_points(primary, secondary)),
            ("stage".to_string(), stage_points),
            ("age".to_string(), if age >= 50.0 { 1.0 } else { 0.0 }),
            (
                "percent_positive_cores".to_string(),
                if cores >= 34.0 { 1.0 } else { 0.0 },
            ),
        ]);
        let total: f64 = components.values().sum();

        let risk = if total <= 2.0 {
            "low"
        } else if total <= 5.0 {
            "intermediate"
        } else {
            "high"
        };
        let interpretation = format!("CAPRA score {total:.0} of 10: {risk}-risk disease.");

        let mut parts = components;
        parts.insert("total".to_string(), total);

        CalculationOutcome::new(
            self.id(),
            self.name(),
            ScoreResult::Composite(parts),
            &interpretation,
        )
        .with_risk_level(risk)
        .with_references(self.references())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medcalc_core::models::value::InputValue;

    fn inputs() -> InputMap {
        InputMap::from([
            ("age".to_string(), InputValue::Number(65.0)),
            ("psa".to_string(), InputValue::Number(7.5)),
            ("gleason_primary".to_string(), InputValue::Number(3.0)),
            ("gleason_secondary".to_string(), InputValue::Number(4.0)),
            ("clinical_stage".to_string(), InputValue::Text("T2a".to_string())),
            ("percent_positive_cores".to_string(), InputValue::Number(50.0)),
        ])
    }

    #[test]
    fn intermediate_risk_example() {
        let outcome = Capra.calculate(&inputs());
        let ScoreResult::Composite(parts) = &outcome.result else {
            panic!("expected composite result");
        };
        assert_eq!(parts["psa"], 1.0);
        assert_eq!(parts["gleason"], 1.0);
        assert_eq!(parts["stage"], 0.0);
        assert_eq!(parts["age"], 1.0);
        assert_eq!(parts["percent_positive_cores"], 1.0);
        assert_eq!(parts["total"], 4.0);
        assert_eq!(outcome.risk_level.as_deref(), Some("intermediate"));
    }

    #[test]
    fn primary_pattern_four_dominates_gleason_points() {
        let mut map = inputs();
        map.insert("gleason_primary".to_string(), InputValue::Number(4.0));
        map.insert("gleason_secondary".to_string(), InputValue::Number(3.0));
        let outcome = Capra.calculate(&map);
        let ScoreResult::Composite(parts) = &outcome.result else {
            panic!("expected composite result");
        };
        assert_eq!(parts["gleason"], 3.0);
    }

    #[test]
    fn unknown_stage_fails_validation() {
        let mut map = inputs();
        map.insert("clinical_stage".to_string(), InputValue::Text("T4".to_string()));
        let err = Capra.validate_inputs(&map).unwrap_err();
        assert!(err.contains("clinical_stage"));
    }
}
