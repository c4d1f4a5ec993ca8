//! Static requirement catalogue. A parallel table of every calculator's
//! input requirements, so suggestion requests never need to construct
//! calculator instances.

use std::sync::LazyLock;

use medcalc_core::models::category::Category;
use medcalc_calculators::FACTORIES;

/// Input requirements for one calculator.
#[derive(Debug, Clone)]
pub struct CatalogueEntry {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub required: Vec<String>,
    pub optional: Vec<String>,
}

/// Ordered list of catalogue entries. Suggestion output preserves this
/// order within a confidence tier.
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
}

impl Catalogue {
    /// The catalogue for the standard factory table, built once per
    /// process. Each factory is instantiated exactly once, here, to
    /// read its static descriptors.
    pub fn standard() -> &'static Catalogue {
        static CATALOGUE: LazyLock<Catalogue> = LazyLock::new(|| {
            let entries = FACTORIES
                .iter()
                .map(|factory| {
                    let calculator = factory();
                    CatalogueEntry {
                        id: calculator.id().to_string(),
                        name: calculator.name().to_string(),
                        category: calculator.category(),
                        description: calculator.description().to_string(),
                        required: calculator
                            .required_inputs()
                            .iter()
                            .map(|f| f.to_string())
                            .collect(),
                        optional: calculator
                            .optional_inputs()
                            .iter()
                            .map(|f| f.to_string())
                            .collect(),
                    }
                })
                .collect();
            Catalogue { entries }
        });
        &CATALOGUE
    }

    pub fn from_entries(entries: Vec<CatalogueEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalogue_mirrors_the_factory_table() {
        let catalogue = Catalogue::standard();
        assert_eq!(catalogue.entries().len(), FACTORIES.len());
        for (entry, factory) in catalogue.entries().iter().zip(FACTORIES) {
            let calculator = factory();
            assert_eq!(entry.id, calculator.id());
            assert_eq!(entry.required.len(), calculator.required_inputs().len());
        }
    }
}
