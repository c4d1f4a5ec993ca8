use medcalc_core::models::category::Category;
use medcalc_core::models::field::{FieldType, InputFieldSpec};
use medcalc_core::models::outcome::{CalculationOutcome, ScoreResult};
use medcalc_core::models::value::InputMap;

use crate::Calculator;
use crate::validate::{check_allowed, check_range, number, require_fields, text};

/// Estimated GFR via the race-free CKD-EPI creatinine equation (2021),
/// with KDIGO G-staging.
pub struct EgfrCkdEpi;

impl Calculator for EgfrCkdEpi {
    fn id(&self) -> &'static str {
        "egfr_ckd_epi"
    }

    fn name(&self) -> &'static str {
        "eGFR (CKD-EPI 2021)"
    }

    fn category(&self) -> Category {
        Category::Nephrology
    }

    fn description(&self) -> &'static str {
        "Estimated glomerular filtration rate from serum creatinine, age, and sex."
    }

    fn references(&self) -> &'static [&'static str] {
        &[
            "Inker LA et al. New creatinine- and cystatin C-based equations to estimate GFR without race. N Engl J Med 2021;385:1737-49.",
        ]
    }

    fn required_inputs(&self) -> &'static [&'static str] {
        &["creatinine", "age", "sex"]
    }

    fn input_schema(&self) -> Vec<InputFieldSpec> {
        vec![
            InputFieldSpec::new("creatinine", "Serum creatinine (mg/dL)", FieldType::Numeric, true)
                .with_range(0.1, 20.0),
            InputFieldSpec::new("age", "Age (years)", FieldType::Numeric, true)
                .with_range(18.0, 120.0),
            InputFieldSpec::new("sex", "Sex", FieldType::Enumerated, true)
                .with_allowed(&["male", "female"]),
        ]
    }

    fn validate_inputs(&self, inputs: &InputMap) -> Result<(), String> {
        require_fields(inputs, self.required_inputs())?;
        check_range(inputs, "creatinine", 0.1, 20.0)?;
        check_range(inputs, "age", 18.0, 120.0)?;
        check_allowed(inputs, "sex", &["male", "female"])?;
        Ok(())
    }

    fn calculate(&self, inputs: &InputMap) -> CalculationOutcome {
        let creatinine = number(inputs, "creatinine");
        let age = number(inputs, "age");
        let female = text(inputs, "sex").eq_ignore_ascii_case("female");

        let (kappa, alpha, sex_factor) = if female {
            (0.7, -0.241, 1.012)
        } else {
            (0.9, -0.302, 1.0)
        };
        let ratio = creatinine / kappa;
        let egfr = 142.0
            * ratio.min(1.0).powf(alpha)
            * ratio.max(1.0).powf(-1.200)
            * 0.9938_f64.powf(age)
            * sex_factor;
        let egfr = egfr.round();

        let (stage, interpretation) = if egfr >= 90.0 {
            ("G1", "Normal or high GFR.")
        } else if egfr >= 60.0 {
            ("G2", "Mildly decreased GFR.")
        } else if egfr >= 45.0 {
            ("G3a", "Mildly to moderately decreased GFR.")
        } else if egfr >= 30.0 {
            ("G3b", "Moderately to severely decreased GFR.")
        } else if egfr >= 15.0 {
            ("G4", "Severely decreased GFR.")
        } else {
            ("G5", "Kidney failure.")
        };

        let mut outcome = CalculationOutcome::new(
            self.id(),
            self.name(),
            ScoreResult::Scalar(egfr),
            interpretation,
        )
        .with_risk_level(stage)
        .with_references(self.references())
        .with_metadata("units", "mL/min/1.73m2")
        .with_metadata("equation", "CKD-EPI 2021, race-free");

        if matches!(stage, "G4" | "G5") {
            outcome = outcome.with_recommendation("Refer to nephrology");
        }
        outcome
    }
}
