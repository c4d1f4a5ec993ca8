use medcalc_core::models::category::Category;
use medcalc_core::models::field::{FieldType, InputFieldSpec};
use medcalc_core::models::outcome::{CalculationOutcome, ScoreResult};
use medcalc_core::models::value::InputMap;

use crate::Calculator;
use crate::validate::{check_range, number, require_fields};

/// Body mass index: weight (kg) / height (m)², with WHO weight-status
/// classification.
pub struct Bmi;

impl Calculator for Bmi {
    fn id(&self) -> &'static str {
        "bmi"
    }

    fn name(&self) -> &'static str {
        "BMI"
    }

    fn category(&self) -> Category {
        Category::General
    }

    fn description(&self) -> &'static str {
        "Body mass index from weight and height, classified per WHO weight-status bands."
    }

    fn references(&self) -> &'static [&'static str] {
        &[
            "WHO. Obesity: preventing and managing the global epidemic. WHO Technical Report Series 894, 2000.",
        ]
    }

    fn required_inputs(&self) -> &'static [&'static str] {
        &["weight_kg", "height_cm"]
    }

    fn input_schema(&self) -> Vec<InputFieldSpec> {
        vec![
            InputFieldSpec::new("weight_kg", "Weight (kg)", FieldType::Numeric, true)
                .with_range(1.0, 500.0),
            InputFieldSpec::new("height_cm", "Height (cm)", FieldType::Numeric, true)
                .with_range(30.0, 260.0),
        ]
    }

    fn validate_inputs(&self, inputs: &InputMap) -> Result<(), String> {
        require_fields(inputs, self.required_inputs())?;
        check_range(inputs, "weight_kg", 1.0, 500.0)?;
        check_range(inputs, "height_cm", 30.0, 260.0)?;
        Ok(())
    }

    fn calculate(&self, inputs: &InputMap) -> CalculationOutcome {
        let weight = number(inputs, "weight_kg");
        let height_m = number(inputs, "height_cm") / 100.0;
        let bmi = (weight / (height_m * height_m) * 10.0).round() / 10.0;

        let (risk, interpretation) = if bmi < 18.5 {
            ("underweight", "BMI below the healthy range.")
        } else if bmi < 25.0 {
            ("normal", "BMI within the healthy range.")
        } else if bmi < 30.0 {
            ("overweight", "BMI above the healthy range.")
        } else {
            ("obese", "BMI in the obese range.")
        };

        CalculationOutcome::new(self.id(), self.name(), ScoreResult::Scalar(bmi), interpretation)
            .with_risk_level(risk)
            .with_references(self.references())
            .with_metadata("units", "kg/m2")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medcalc_core::models::value::InputValue;

    fn inputs(weight: f64, height: f64) -> InputMap {
        InputMap::from([
            ("weight_kg".to_string(), InputValue::Number(weight)),
            ("height_cm".to_string(), InputValue::Number(height)),
        ])
    }

    #[test]
    fn classifies_healthy_range() {
        let outcome = Bmi.calculate(&inputs(70.0, 175.0));
        assert_eq!(outcome.result, ScoreResult::Scalar(22.9));
        assert_eq!(outcome.risk_level.as_deref(), Some("normal"));
    }

    #[test]
    fn classifies_obese_range() {
        let outcome = Bmi.calculate(&inputs(110.0, 170.0));
        assert_eq!(outcome.result, ScoreResult::Scalar(38.1));
        assert_eq!(outcome.risk_level.as_deref(), Some("obese"));
    }

    #[test]
    fn rejects_implausible_height() {
        let err = Bmi.validate_inputs(&inputs(70.0, 10.0)).unwrap_err();
        assert!(err.contains("height_cm"));
    }
}
