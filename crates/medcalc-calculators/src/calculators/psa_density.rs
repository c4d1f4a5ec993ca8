use medcalc_core::models::category::Category;
use medcalc_core::models::field::{FieldType, InputFieldSpec};
use medcalc_core::models::outcome::{CalculationOutcome, ScoreResult};
use medcalc_core::models::value::InputMap;

use crate::Calculator;
use crate::validate::{check_range, number, require_fields};

/// PSA density: serum PSA divided by prostate volume. Values above
/// 0.15 ng/mL/cc raise suspicion for clinically significant cancer.
pub struct PsaDensity;

impl Calculator for PsaDensity {
    fn id(&self) -> &'static str {
        "psa_density"
    }

    fn name(&self) -> &'static str {
        "PSA Density"
    }

    fn category(&self) -> Category {
        Category::Urology
    }

    fn description(&self) -> &'static str {
        "Serum PSA normalized by prostate volume, to separate BPH-driven PSA elevation from cancer."
    }

    fn references(&self) -> &'static [&'static str] {
        &[
            "Benson MC et al. Prostate specific antigen density: a means of distinguishing benign prostatic hypertrophy and prostate cancer. J Urol 1992;147:815-6.",
        ]
    }

    fn required_inputs(&self) -> &'static [&'static str] {
        &["psa", "prostate_volume"]
    }

    fn input_schema(&self) -> Vec<InputFieldSpec> {
        vec![
            InputFieldSpec::new("psa", "PSA (ng/mL)", FieldType::Numeric, true)
                .with_range(0.0, 5000.0)
                .with_help("Serum prostate-specific antigen"),
            InputFieldSpec::new(
                "prostate_volume",
                "Prostate volume (cc)",
                FieldType::Numeric,
                true,
            )
            .with_range(1.0, 500.0)
            .with_help("From transrectal ultrasound or MRI"),
        ]
    }

    fn validate_inputs(&self, inputs: &InputMap) -> Result<(), String> {
        require_fields(inputs, self.required_inputs())?;
        check_range(inputs, "psa", 0.0, 5000.0)?;
        check_range(inputs, "prostate_volume", 1.0, 500.0)?;
        Ok(())
    }

    fn calculate(&self, inputs: &InputMap) -> CalculationOutcome {
        let psa = number(inputs, "psa");
        let volume = number(inputs, "prostate_volume");
        let density = (psa / volume * 100.0).round() / 100.0;

        let (risk, interpretation) = if density >= 0.15 {
            (
                "elevated",
                "PSA density at or above 0.15 ng/mL/cc; elevation less likely explained by gland volume alone.",
            )
        } else {
            (
                "low",
                "PSA density below 0.15 ng/mL/cc; consistent with benign gland enlargement.",
            )
        };

        CalculationOutcome::new(
            self.id(),
            self.name(),
            ScoreResult::Scalar(density),
            interpretation,
        )
        .with_risk_level(risk)
        .with_references(self.references())
        .with_metadata("units", "ng/mL/cc")
    }
}
