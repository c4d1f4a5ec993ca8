//! medcalc-suggest
//!
//! Ranks calculators by how well their input requirements are covered
//! by entities extracted from an unstructured source, so users are
//! offered relevant calculators without knowing their names. Pure
//! computation over its inputs; never fails — an empty suggestion list
//! is itself the negative signal.

pub mod catalogue;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use medcalc_core::models::category::Category;
use medcalc_core::models::value::InputMap;

use crate::catalogue::Catalogue;

/// Coarse ranking of how well-supported a suggestion is. Declaration
/// order is sort order: High entries always precede Medium, Medium
/// precede Low.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// One ranked calculator suggestion. Transient per request; never
/// stored.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Suggestion {
    pub calculator_id: String,
    pub calculator_name: String,
    pub category: Category,
    pub confidence: Confidence,
    /// Set only at high confidence: every required input was detected.
    pub auto_select: bool,
    pub reason: String,
    pub required_inputs: Vec<String>,
    pub available_inputs: Vec<String>,
    pub missing_required: Vec<String>,
    /// Detected entity values, for traceability.
    pub detected_values: InputMap,
}

/// Tunable thresholds. The 0.5 default is an explainable heuristic, not
/// a clinically validated constant, so it stays configurable.
#[derive(Debug, Clone, Copy)]
pub struct SuggestConfig {
    /// Fraction of a calculator's required-field count that detected
    /// inputs (required or optional) must reach for medium confidence.
    pub medium_required_ratio: f64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            medium_required_ratio: 0.5,
        }
    }
}

/// Rank every catalogue entry against the extracted entities.
///
/// Entries sharing no field with the entity map are skipped outright.
/// The rest are classified High (all required inputs present, eligible
/// for auto-selection), Medium (detected inputs cover at least
/// `medium_required_ratio` of the required-field count), or Low, then
/// stably sorted by tier so catalogue order breaks ties.
pub fn suggest(catalogue: &Catalogue, entities: &InputMap, config: &SuggestConfig) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    for entry in catalogue.entries() {
        let available: Vec<String> = entry
            .required
            .iter()
            .chain(&entry.optional)
            .filter(|field| entities.contains_key(*field))
            .cloned()
            .collect();
        if available.is_empty() {
            continue;
        }
        let missing_required: Vec<String> = entry
            .required
            .iter()
            .filter(|field| !entities.contains_key(*field))
            .cloned()
            .collect();

        let (confidence, auto_select, reason) = if missing_required.is_empty() {
            (Confidence::High, true, "all required inputs detected".to_string())
        } else {
            let coverage = available.len() as f64;
            let threshold = config.medium_required_ratio * entry.required.len() as f64;
            let tier = if coverage >= threshold {
                Confidence::Medium
            } else {
                Confidence::Low
            };
            let reason = format!(
                "{} of {} required inputs missing",
                missing_required.len(),
                entry.required.len()
            );
            (tier, false, reason)
        };

        let detected_values: InputMap = available
            .iter()
            .filter_map(|field| {
                entities
                    .get(field)
                    .map(|value| (field.clone(), value.clone()))
            })
            .collect();

        suggestions.push(Suggestion {
            calculator_id: entry.id.clone(),
            calculator_name: entry.name.clone(),
            category: entry.category,
            confidence,
            auto_select,
            reason,
            required_inputs: entry.required.clone(),
            available_inputs: available,
            missing_required,
            detected_values,
        });
    }

    // Stable sort: ties keep catalogue order.
    suggestions.sort_by_key(|suggestion| suggestion.confidence);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::CatalogueEntry;
    use medcalc_core::models::value::InputValue;

    fn entry(id: &str, required: &[&str], optional: &[&str]) -> CatalogueEntry {
        CatalogueEntry {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: Category::General,
            description: String::new(),
            required: required.iter().map(|f| f.to_string()).collect(),
            optional: optional.iter().map(|f| f.to_string()).collect(),
        }
    }

    fn entities(fields: &[&str]) -> InputMap {
        fields
            .iter()
            .map(|field| (field.to_string(), InputValue::Number(1.0)))
            .collect()
    }

    #[test]
    fn all_required_present_is_high_and_auto_selected() {
        let catalogue = Catalogue::from_entries(vec![entry("a", &["w", "x", "y", "z"], &[])]);
        let out = suggest(&catalogue, &entities(&["w", "x", "y", "z"]), &SuggestConfig::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].confidence, Confidence::High);
        assert!(out[0].auto_select);
        assert_eq!(out[0].reason, "all required inputs detected");
        assert!(out[0].missing_required.is_empty());
    }

    #[test]
    fn half_of_four_required_is_medium() {
        let catalogue = Catalogue::from_entries(vec![entry("a", &["w", "x", "y", "z"], &[])]);
        let out = suggest(&catalogue, &entities(&["w", "x"]), &SuggestConfig::default());
        assert_eq!(out[0].confidence, Confidence::Medium);
        assert!(!out[0].auto_select);
        assert_eq!(out[0].reason, "2 of 4 required inputs missing");
    }

    #[test]
    fn one_of_four_required_is_low() {
        let catalogue = Catalogue::from_entries(vec![entry("a", &["w", "x", "y", "z"], &[])]);
        let out = suggest(&catalogue, &entities(&["w"]), &SuggestConfig::default());
        assert_eq!(out[0].confidence, Confidence::Low);
        assert_eq!(out[0].reason, "3 of 4 required inputs missing");
    }

    #[test]
    fn optional_matches_count_toward_coverage() {
        let catalogue = Catalogue::from_entries(vec![entry("a", &["w", "x", "y", "z"], &["o"])]);
        let out = suggest(&catalogue, &entities(&["w", "o"]), &SuggestConfig::default());
        assert_eq!(out[0].confidence, Confidence::Medium);
    }

    #[test]
    fn zero_signal_entries_are_skipped() {
        let catalogue = Catalogue::from_entries(vec![
            entry("a", &["w", "x"], &[]),
            entry("b", &["y"], &["z"]),
        ]);
        let out = suggest(&catalogue, &entities(&["w"]), &SuggestConfig::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].calculator_id, "a");
    }

    #[test]
    fn output_is_sorted_high_medium_low_with_stable_ties() {
        let catalogue = Catalogue::from_entries(vec![
            entry("low_a", &["p", "q", "r", "s"], &[]),
            entry("high_a", &["w"], &[]),
            entry("medium_a", &["w", "x", "m1", "m2"], &[]),
            entry("medium_b", &["w", "x", "m1"], &[]),
        ]);
        let out = suggest(&catalogue, &entities(&["w", "x", "p"]), &SuggestConfig::default());
        let ids: Vec<&str> = out.iter().map(|s| s.calculator_id.as_str()).collect();
        assert_eq!(ids, vec!["high_a", "medium_a", "medium_b", "low_a"]);
        let tiers: Vec<Confidence> = out.iter().map(|s| s.confidence).collect();
        assert!(tiers.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn threshold_is_configurable() {
        let catalogue = Catalogue::from_entries(vec![entry("a", &["w", "x", "y", "z"], &[])]);
        let strict = SuggestConfig {
            medium_required_ratio: 0.75,
        };
        let out = suggest(&catalogue, &entities(&["w", "x"]), &strict);
        assert_eq!(out[0].confidence, Confidence::Low);
    }

    #[test]
    fn detected_values_carry_the_entity_values() {
        let catalogue = Catalogue::from_entries(vec![entry("a", &["w", "x"], &[])]);
        let mut map = entities(&["w"]);
        map.insert("unrelated".to_string(), InputValue::Bool(true));
        let out = suggest(&catalogue, &map, &SuggestConfig::default());
        assert_eq!(out[0].detected_values.len(), 1);
        assert_eq!(out[0].detected_values["w"], InputValue::Number(1.0));
    }

    #[test]
    fn standard_catalogue_suggests_urology_calculators_from_psa_fields() {
        let map = entities(&["psa", "prostate_volume"]);
        let out = suggest(Catalogue::standard(), &map, &SuggestConfig::default());
        let psa_density = out
            .iter()
            .find(|s| s.calculator_id == "psa_density")
            .expect("psa_density suggested");
        assert_eq!(psa_density.confidence, Confidence::High);
        assert!(psa_density.auto_select);
        // CURB-65 shares no fields with this entity map.
        assert!(out.iter().all(|s| s.calculator_id != "curb65"));
    }
}
