use medcalc_core::models::category::Category;
use medcalc_core::models::field::{FieldType, InputFieldSpec};
use medcalc_core::models::outcome::{CalculationOutcome, ScoreResult};
use medcalc_core::models::value::InputMap;

use crate::Calculator;
use crate::validate::{check_range, number, opt_number, require_fields};

/// ISUP grade group from Gleason primary and secondary patterns.
pub struct GleasonGrade;

fn grade_group(primary: u32, secondary: u32) -> u32 {
    match (primary, secondary) {
        (p, s) if p + s <= 6 => 1,
        (3, 4) => 2,
        (4, 3) => 3,
        (p, s) if p + s == 7 => 2,
        (p, s) if p + s == 8 => 4,
        _ => 5,
    }
}

impl Calculator for GleasonGrade {
    fn id(&self) -> &'static str {
        "gleason_grade"
    }

    fn name(&self) -> &'static str {
        "Gleason Grade Group"
    }

    fn category(&self) -> Category {
        Category::Oncology
    }

    fn description(&self) -> &'static str {
        "ISUP 2014 grade group (1-5) from Gleason primary and secondary patterns."
    }

    fn references(&self) -> &'static [&'static str] {
        &[
            "Epstein JI et al. The 2014 International Society of Urological Pathology (ISUP) Consensus Conference on Gleason Grading of Prostatic Carcinoma. Am J Surg Pathol 2016;40:244-52.",
        ]
    }

    fn required_inputs(&self) -> &'static [&'static str] {
        &["gleason_primary", "gleason_secondary"]
    }

    fn optional_inputs(&self) -> &'static [&'static str] {
        &["gleason_tertiary"]
    }

    fn input_schema(&self) -> Vec<InputFieldSpec> {
        vec![
            InputFieldSpec::new("gleason_primary", "Primary pattern", FieldType::Numeric, true)
                .with_range(1.0, 5.0),
            InputFieldSpec::new(
                "gleason_secondary",
                "Secondary pattern",
                FieldType::Numeric,
                true,
            )
            .with_range(1.0, 5.0),
            InputFieldSpec::new(
                "gleason_tertiary",
                "Tertiary pattern",
                FieldType::Numeric,
                false,
            )
            .with_range(1.0, 5.0)
            .with_help("Reported when a third pattern is present"),
        ]
    }

    fn validate_inputs(&self, inputs: &InputMap) -> Result<(), String> {
        require_fields(inputs, self.required_inputs())?;
        for field in ["gleason_primary", "gleason_secondary", "gleason_tertiary"] {
            check_range(inputs, field, 1.0, 5.0)?;
        }
        Ok(())
    }

    fn calculate(&self, inputs: &InputMap) -> CalculationOutcome {
        let primary = number(inputs, "gleason_primary") as u32;
        let secondary = number(inputs, "gleason_secondary") as u32;
        let group = grade_group(primary, secondary);

        let risk = match group {
            1 => "low",
            2 => "favorable intermediate",
            3 => "unfavorable intermediate",
            4 => "high",
            _ => "very high",
        };
        let label = format!(
            "Grade Group {group} (Gleason {primary}+{secondary}={})",
            primary + secondary
        );
        let interpretation = format!("ISUP {label}, {risk}-risk histology.");

        let mut outcome = CalculationOutcome::new(
            self.id(),
            self.name(),
            ScoreResult::Text(label),
            &interpretation,
        )
        .with_risk_level(risk)
        .with_references(self.references());

        if let Some(tertiary) = opt_number(inputs, "gleason_tertiary") {
            outcome = outcome.with_metadata("tertiary_pattern", &format!("{}", tertiary as u32));
            if tertiary as u32 == 5 && group <= 2 {
                outcome = outcome.with_recommendation(
                    "Tertiary pattern 5 present; consider managing as the next-higher grade group",
                );
            }
        }
        outcome
    }
}
