use medcalc_core::models::category::Category;
use medcalc_core::models::field::{FieldType, InputFieldSpec};
use medcalc_core::models::outcome::{CalculationOutcome, ScoreResult};
use medcalc_core::models::value::InputMap;

use crate::Calculator;
use crate::validate::{boolean, check_allowed, check_range, number, require_bool, require_fields, text};

const FLAGS: &[&str] = &[
    "chf",
    "hypertension",
    "diabetes",
    "stroke_history",
    "vascular_disease",
];

/// CHA₂DS₂-VASc: annual stroke risk in non-valvular atrial
/// fibrillation, used to guide anticoagulation.
pub struct Cha2ds2Vasc;

impl Calculator for Cha2ds2Vasc {
    fn id(&self) -> &'static str {
        "cha2ds2_vasc"
    }

    fn name(&self) -> &'static str {
        "CHA2DS2-VASc"
    }

    fn category(&self) -> Category {
        Category::Cardiology
    }

    fn description(&self) -> &'static str {
        "Stroke risk stratification for atrial fibrillation from age, sex, and comorbidities."
    }

    fn references(&self) -> &'static [&'static str] {
        &[
            "Lip GY et al. Refining clinical risk stratification for predicting stroke and thromboembolism in atrial fibrillation. Chest 2010;137:263-72.",
        ]
    }

    fn required_inputs(&self) -> &'static [&'static str] {
        &[
            "age",
            "sex",
            "chf",
            "hypertension",
            "diabetes",
            "stroke_history",
            "vascular_disease",
        ]
    }

    fn input_schema(&self) -> Vec<InputFieldSpec> {
        let mut schema = vec![
            InputFieldSpec::new("age", "Age (years)", FieldType::Numeric, true)
                .with_range(18.0, 120.0),
            InputFieldSpec::new("sex", "Sex", FieldType::Enumerated, true)
                .with_allowed(&["male", "female"]),
        ];
        let labels = [
            ("chf", "Congestive heart failure"),
            ("hypertension", "Hypertension"),
            ("diabetes", "Diabetes mellitus"),
            ("stroke_history", "Prior stroke or TIA"),
            ("vascular_disease", "Vascular disease"),
        ];
        for (name, label) in labels {
            schema.push(InputFieldSpec::new(name, label, FieldType::Boolean, true));
        }
        schema
    }

    fn validate_inputs(&self, inputs: &InputMap) -> Result<(), String> {
        require_fields(inputs, self.required_inputs())?;
        check_range(inputs, "age", 18.0, 120.0)?;
        check_allowed(inputs, "sex", &["male", "female"])?;
        for flag in FLAGS {
            require_bool(inputs, flag)?;
        }
        Ok(())
    }

    fn calculate(&self, inputs: &InputMap) -> CalculationOutcome {
        let age = number(inputs, "age");
        let female = text(inputs, "sex").eq_ignore_ascii_case("female");

        let mut score = 0.0;
        if age >= 75.0 {
            score += 2.0;
        } else if age >= 65.0 {
            score += 1.0;
        }
        if female {
            score += 1.0;
        }
        if boolean(inputs, "chf") {
            score += 1.0;
        }
        if boolean(inputs, "hypertension") {
            score += 1.0;
        }
        if boolean(inputs, "diabetes") {
            score += 1.0;
        }
        if boolean(inputs, "stroke_history") {
            score += 2.0;
        }
        if boolean(inputs, "vascular_disease") {
            score += 1.0;
        }

        // Sex category only modifies risk in the presence of another
        // risk factor; a lone point from female sex is treated as low.
        let effective = if female { score - 1.0 } else { score };
        let (risk, interpretation, recommendation) = if effective >= 2.0 {
            (
                "high",
                "Elevated annual stroke risk.",
                Some("Oral anticoagulation recommended"),
            )
        } else if effective >= 1.0 {
            (
                "moderate",
                "Intermediate annual stroke risk.",
                Some("Consider oral anticoagulation"),
            )
        } else {
            ("low", "Low annual stroke risk.", None)
        };

        let mut outcome = CalculationOutcome::new(
            self.id(),
            self.name(),
            ScoreResult::Scalar(score),
            interpretation,
        )
        .with_risk_level(risk)
        .with_references(self.references());

        if let Some(recommendation) = recommendation {
            outcome = outcome.with_recommendation(recommendation);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medcalc_core::models::value::InputValue;

    fn inputs(age: f64, sex: &str) -> InputMap {
        let mut map = InputMap::from([
            ("age".to_string(), InputValue::Number(age)),
            ("sex".to_string(), InputValue::Text(sex.to_string())),
        ]);
        for flag in FLAGS {
            map.insert(flag.to_string(), InputValue::Bool(false));
        }
        map
    }

    #[test]
    fn comorbid_female_scores_high() {
        let mut map = inputs(70.0, "female");
        map.insert("hypertension".to_string(), InputValue::Bool(true));
        let outcome = Cha2ds2Vasc.calculate(&map);
        assert_eq!(outcome.result, ScoreResult::Scalar(3.0));
        assert_eq!(outcome.risk_level.as_deref(), Some("high"));
        assert_eq!(outcome.recommendations.len(), 1);
    }

    #[test]
    fn lone_female_sex_point_stays_low_risk() {
        let outcome = Cha2ds2Vasc.calculate(&inputs(50.0, "female"));
        assert_eq!(outcome.result, ScoreResult::Scalar(1.0));
        assert_eq!(outcome.risk_level.as_deref(), Some("low"));
        assert!(outcome.recommendations.is_empty());
    }

    #[test]
    fn prior_stroke_scores_two_points() {
        let mut map = inputs(50.0, "male");
        map.insert("stroke_history".to_string(), InputValue::Bool(true));
        let outcome = Cha2ds2Vasc.calculate(&map);
        assert_eq!(outcome.result, ScoreResult::Scalar(2.0));
        assert_eq!(outcome.risk_level.as_deref(), Some("high"));
    }

    #[test]
    fn non_boolean_flag_fails_validation() {
        let mut map = inputs(50.0, "male");
        map.insert("chf".to_string(), InputValue::Text("yes".to_string()));
        let err = Cha2ds2Vasc.validate_inputs(&map).unwrap_err();
        assert_eq!(err, "chf must be true or false");
    }
}
