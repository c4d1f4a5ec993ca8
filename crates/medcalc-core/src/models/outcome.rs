use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::value::InputMap;

/// The primary result of a calculation: a single score, a categorical
/// label, or a set of named sub-results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreResult {
    Scalar(f64),
    Text(String),
    Composite(BTreeMap<String, f64>),
}

impl ScoreResult {
    /// Single-line rendering for messages and note text.
    pub fn render(&self) -> String {
        match self {
            ScoreResult::Scalar(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            ScoreResult::Scalar(n) => n.to_string(),
            ScoreResult::Text(s) => s.clone(),
            ScoreResult::Composite(parts) => parts
                .iter()
                .map(|(k, v)| {
                    if v.fract() == 0.0 {
                        format!("{k}: {}", *v as i64)
                    } else {
                        format!("{k}: {v}")
                    }
                })
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// The full result of one calculator invocation. Constructed fresh per
/// call and never mutated afterwards; `computed_at` is informational
/// only and excluded from determinism guarantees.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculationOutcome {
    pub calculator_id: String,
    pub calculator_name: String,
    pub result: ScoreResult,
    pub interpretation: String,
    /// Calculator-local label (e.g. "low", "G3a"); the label set is
    /// defined per calculator, not globally.
    pub risk_level: Option<String>,
    pub recommendations: Vec<String>,
    pub references: Vec<String>,
    pub metadata: BTreeMap<String, String>,
    /// Copy of the validated inputs the score was computed from.
    pub inputs: InputMap,
    pub computed_at: jiff::Timestamp,
}

impl CalculationOutcome {
    pub fn new(
        calculator_id: &str,
        calculator_name: &str,
        result: ScoreResult,
        interpretation: &str,
    ) -> Self {
        Self {
            calculator_id: calculator_id.to_string(),
            calculator_name: calculator_name.to_string(),
            result,
            interpretation: interpretation.to_string(),
            risk_level: None,
            recommendations: Vec::new(),
            references: Vec::new(),
            metadata: BTreeMap::new(),
            inputs: InputMap::new(),
            computed_at: jiff::Timestamp::now(),
        }
    }

    pub fn with_risk_level(mut self, risk_level: &str) -> Self {
        self.risk_level = Some(risk_level.to_string());
        self
    }

    pub fn with_recommendation(mut self, recommendation: &str) -> Self {
        self.recommendations.push(recommendation.to_string());
        self
    }

    pub fn with_references(mut self, references: &[&str]) -> Self {
        self.references = references.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    /// Format the outcome as plain text for inclusion in generated
    /// clinical documentation.
    pub fn to_note_text(&self) -> String {
        let mut output = format!("## {}\n\n", self.calculator_name);
        output.push_str(&format!("Result: {}\n", self.result.render()));
        output.push_str(&format!("Interpretation: {}\n", self.interpretation));
        if let Some(risk) = &self.risk_level {
            output.push_str(&format!("Risk level: {risk}\n"));
        }
        if !self.recommendations.is_empty() {
            output.push_str("\nRecommendations:\n");
            for recommendation in &self.recommendations {
                output.push_str(&format!("- {recommendation}\n"));
            }
        }
        if !self.references.is_empty() {
            output.push_str("\nReferences:\n");
            for reference in &self.references {
                output.push_str(&format!("- {reference}\n"));
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_scalar_and_composite() {
        assert_eq!(ScoreResult::Scalar(4.0).render(), "4");
        assert_eq!(ScoreResult::Scalar(0.15).render(), "0.15");
        let parts = BTreeMap::from([("psa".to_string(), 2.0), ("total".to_string(), 5.0)]);
        assert_eq!(ScoreResult::Composite(parts).render(), "psa: 2, total: 5");
    }

    #[test]
    fn note_text_includes_risk_and_recommendations() {
        let outcome = CalculationOutcome::new(
            "curb65",
            "CURB-65",
            ScoreResult::Scalar(4.0),
            "Severe pneumonia.",
        )
        .with_risk_level("high")
        .with_recommendation("Admit to hospital")
        .with_references(&["Lim WS et al. Thorax 2003"]);

        let text = outcome.to_note_text();
        assert!(text.starts_with("## CURB-65"));
        assert!(text.contains("Result: 4"));
        assert!(text.contains("Interpretation: Severe pneumonia."));
        assert!(text.contains("Risk level: high"));
        assert!(text.contains("- Admit to hospital"));
        assert!(text.contains("- Lim WS et al. Thorax 2003"));
    }

    #[test]
    fn new_outcome_starts_with_empty_inputs() {
        let outcome =
            CalculationOutcome::new("bmi", "BMI", ScoreResult::Scalar(22.9), "Healthy range.");
        assert!(outcome.inputs.is_empty());
        assert!(outcome.risk_level.is_none());
    }
}
