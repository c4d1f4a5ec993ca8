use medcalc_core::models::category::Category;
use medcalc_core::models::field::{FieldType, InputFieldSpec};
use medcalc_core::models::outcome::{CalculationOutcome, ScoreResult};
use medcalc_core::models::value::{InputMap, InputValue};

use crate::Calculator;
use crate::validate::{boolean, check_range, number, require_bool, require_fields};

/// CURB-65: community-acquired pneumonia severity and site-of-care
/// guidance. One point each for confusion, urea > 7 mmol/L, respiratory
/// rate ≥ 30, systolic BP < 90 or diastolic ≤ 60, and age ≥ 65.
pub struct Curb65;

impl Calculator for Curb65 {
    fn id(&self) -> &'static str {
        "curb65"
    }

    fn name(&self) -> &'static str {
        "CURB-65"
    }

    fn category(&self) -> Category {
        Category::Pulmonology
    }

    fn description(&self) -> &'static str {
        "Pneumonia severity score guiding outpatient versus inpatient management."
    }

    fn references(&self) -> &'static [&'static str] {
        &[
            "Lim WS et al. Defining community acquired pneumonia severity on presentation to hospital: an international derivation and validation study. Thorax 2003;58:377-82.",
        ]
    }

    fn required_inputs(&self) -> &'static [&'static str] {
        &[
            "confusion",
            "urea",
            "respiratory_rate",
            "systolic_bp",
            "diastolic_bp",
            "age",
        ]
    }

    fn input_schema(&self) -> Vec<InputFieldSpec> {
        vec![
            InputFieldSpec::new("confusion", "New-onset confusion", FieldType::Boolean, true)
                .with_default(InputValue::Bool(false)),
            InputFieldSpec::new("urea", "Blood urea (mmol/L)", FieldType::Numeric, true)
                .with_range(0.5, 100.0),
            InputFieldSpec::new(
                "respiratory_rate",
                "Respiratory rate (breaths/min)",
                FieldType::Numeric,
                true,
            )
            .with_range(4.0, 80.0),
            InputFieldSpec::new("systolic_bp", "Systolic BP (mmHg)", FieldType::Numeric, true)
                .with_range(40.0, 300.0),
            InputFieldSpec::new("diastolic_bp", "Diastolic BP (mmHg)", FieldType::Numeric, true)
                .with_range(20.0, 200.0),
            InputFieldSpec::new("age", "Age (years)", FieldType::Numeric, true)
                .with_range(18.0, 120.0),
        ]
    }

    fn validate_inputs(&self, inputs: &InputMap) -> Result<(), String> {
        require_fields(inputs, self.required_inputs())?;
        require_bool(inputs, "confusion")?;
        check_range(inputs, "urea", 0.5, 100.0)?;
        check_range(inputs, "respiratory_rate", 4.0, 80.0)?;
        check_range(inputs, "systolic_bp", 40.0, 300.0)?;
        check_range(inputs, "diastolic_bp", 20.0, 200.0)?;
        check_range(inputs, "age", 18.0, 120.0)?;
        Ok(())
    }

    fn calculate(&self, inputs: &InputMap) -> CalculationOutcome {
        let mut score = 0.0;
        if boolean(inputs, "confusion") {
            score += 1.0;
        }
        if number(inputs, "urea") > 7.0 {
            score += 1.0;
        }
        if number(inputs, "respiratory_rate") >= 30.0 {
            score += 1.0;
        }
        if number(inputs, "systolic_bp") < 90.0 || number(inputs, "diastolic_bp") <= 60.0 {
            score += 1.0;
        }
        if number(inputs, "age") >= 65.0 {
            score += 1.0;
        }

        let (risk, interpretation, recommendation) = if score <= 1.0 {
            (
                "low",
                "Low 30-day mortality risk.",
                "Consider outpatient management",
            )
        } else if score == 2.0 {
            (
                "moderate",
                "Intermediate 30-day mortality risk.",
                "Consider short inpatient stay or supervised outpatient care",
            )
        } else {
            (
                "high",
                "High 30-day mortality risk.",
                "Admit to hospital; assess for ICU care if score is 4 or 5",
            )
        };

        CalculationOutcome::new(
            self.id(),
            self.name(),
            ScoreResult::Scalar(score),
            interpretation,
        )
        .with_risk_level(risk)
        .with_recommendation(recommendation)
        .with_references(self.references())
    }
}
