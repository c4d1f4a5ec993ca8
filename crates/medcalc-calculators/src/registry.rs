//! Calculator registry: the single construction point for calculator
//! instances. Built once at application startup from the static factory
//! table and immutable afterwards, so read paths need no locking.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use medcalc_core::models::category::Category;

use crate::{Calculator, FACTORIES};

/// Lightweight listing entry for enumeration views.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculatorSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Maps calculator identifiers to their factories. Construct one at
/// startup and pass it by reference to whatever needs lookup — there is
/// no global instance.
pub struct CalculatorRegistry {
    index: BTreeMap<&'static str, fn() -> Box<dyn Calculator>>,
}

impl CalculatorRegistry {
    /// Build the registry from the standard factory table.
    pub fn new() -> Self {
        Self::with_factories(FACTORIES)
    }

    /// Build from an explicit factory list. Identifiers are derived from
    /// the constructed instances; a duplicate id is logged and skipped
    /// rather than aborting registration, so one bad entry never takes
    /// the rest down.
    pub fn with_factories(factories: &[fn() -> Box<dyn Calculator>]) -> Self {
        let mut index: BTreeMap<&'static str, fn() -> Box<dyn Calculator>> = BTreeMap::new();
        for factory in factories {
            let calculator = factory();
            let id = calculator.id();
            if index.contains_key(id) {
                warn!(id, "duplicate calculator id, keeping first registration");
                continue;
            }
            debug!(id, name = calculator.name(), "registered calculator");
            index.insert(id, *factory);
        }
        Self { index }
    }

    /// Fresh, independently-owned instance per call; `None` for unknown
    /// ids — the caller decides whether that is fatal.
    pub fn get(&self, id: &str) -> Option<Box<dyn Calculator>> {
        self.index.get(id).map(|factory| factory())
    }

    pub fn get_by_category(&self, category: Category) -> Vec<Box<dyn Calculator>> {
        self.index
            .values()
            .map(|factory| factory())
            .filter(|calculator| calculator.category() == category)
            .collect()
    }

    pub fn all(&self) -> Vec<Box<dyn Calculator>> {
        self.index.values().map(|factory| factory()).collect()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.index.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Enumeration view grouped by clinical domain.
    pub fn by_category(&self) -> BTreeMap<Category, Vec<CalculatorSummary>> {
        let mut grouped: BTreeMap<Category, Vec<CalculatorSummary>> = BTreeMap::new();
        for calculator in self.all() {
            grouped
                .entry(calculator.category())
                .or_default()
                .push(CalculatorSummary {
                    id: calculator.id().to_string(),
                    name: calculator.name().to_string(),
                    description: calculator.description().to_string(),
                });
        }
        grouped
    }
}

impl Default for CalculatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::bmi::Bmi;

    #[test]
    fn unknown_id_is_none_not_an_error() {
        let registry = CalculatorRegistry::new();
        assert!(registry.get("not_a_calculator").is_none());
    }

    #[test]
    fn every_id_resolves_to_a_fresh_instance() {
        let registry = CalculatorRegistry::new();
        for id in registry.ids() {
            let calculator = registry.get(id).unwrap();
            assert_eq!(calculator.id(), id);
        }
    }

    #[test]
    fn duplicate_ids_keep_first_registration() {
        let factories: &[fn() -> Box<dyn Calculator>] =
            &[|| Box::new(Bmi), || Box::new(Bmi)];
        let registry = CalculatorRegistry::with_factories(factories);
        assert_eq!(registry.len(), 1);
        assert!(registry.get("bmi").is_some());
    }

    #[test]
    fn by_category_covers_every_registered_calculator() {
        let registry = CalculatorRegistry::new();
        let grouped = registry.by_category();
        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, registry.len());
        for calculator in registry.get_by_category(Category::Urology) {
            assert_eq!(calculator.category(), Category::Urology);
        }
    }
}
