//! medcalc-calculators
//!
//! Clinical risk/severity calculators. Pure arithmetic over validated
//! inputs — no I/O. Defines the contract every calculator implements,
//! the static factory table enumerating them, and the registry built
//! from that table.

pub mod calculators;
pub mod registry;
pub mod validate;

use medcalc_core::error::CalculatorError;
use medcalc_core::models::category::Category;
use medcalc_core::models::descriptor::CalculatorDescriptor;
use medcalc_core::models::field::InputFieldSpec;
use medcalc_core::models::outcome::CalculationOutcome;
use medcalc_core::models::value::InputMap;

/// Trait implemented by each clinical calculator.
pub trait Calculator: Send + Sync {
    /// Unique identifier (e.g., "psa_density", "curb65").
    fn id(&self) -> &'static str;

    /// Human-readable name (e.g., "PSA Density", "CURB-65").
    fn name(&self) -> &'static str;

    fn category(&self) -> Category;

    fn description(&self) -> &'static str;

    /// Published sources for the scoring rule.
    fn references(&self) -> &'static [&'static str] {
        &[]
    }

    /// Fields that must be present for a valid computation. Disjoint
    /// from `optional_inputs`.
    fn required_inputs(&self) -> &'static [&'static str];

    /// Fields that refine the computation when present.
    fn optional_inputs(&self) -> &'static [&'static str] {
        &[]
    }

    /// Declarative schema for form builders. Must name every required
    /// and optional input exactly once.
    fn input_schema(&self) -> Vec<InputFieldSpec> {
        Vec::new()
    }

    /// Serializable descriptor assembled from the static accessors, for
    /// presentation layers.
    fn descriptor(&self) -> CalculatorDescriptor {
        CalculatorDescriptor {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            description: self.description().to_string(),
            required_inputs: self
                .required_inputs()
                .iter()
                .map(|f| f.to_string())
                .collect(),
            optional_inputs: self
                .optional_inputs()
                .iter()
                .map(|f| f.to_string())
                .collect(),
            references: self.references().iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Calculator-specific validation of the exact fields this
    /// calculator consumes. Must not mutate the inputs.
    fn validate_inputs(&self, inputs: &InputMap) -> Result<(), String>;

    /// The pure scoring function. Precondition: `inputs` already passed
    /// `validate_inputs`. Identical inputs yield identical outcomes
    /// (timestamp aside); a failure here is a calculator-author bug and
    /// propagates as a panic rather than a recoverable error.
    fn calculate(&self, inputs: &InputMap) -> CalculationOutcome;

    /// The invocation entry point: validate, then calculate, attaching
    /// a copy of the raw inputs to the outcome.
    fn run(&self, inputs: &InputMap) -> Result<CalculationOutcome, CalculatorError> {
        self.validate_inputs(inputs)
            .map_err(|message| CalculatorError::Validation {
                calculator: self.name().to_string(),
                message,
            })?;
        let mut outcome = self.calculate(inputs);
        outcome.inputs = inputs.clone();
        Ok(outcome)
    }
}

/// Factory table enumerating every calculator module. The registry and
/// the suggestion catalogue are both built from this list; adding a
/// calculator means adding one line here.
pub const FACTORIES: &[fn() -> Box<dyn Calculator>] = &[
    || Box::new(calculators::bmi::Bmi),
    || Box::new(calculators::psa_density::PsaDensity),
    || Box::new(calculators::gleason_grade::GleasonGrade),
    || Box::new(calculators::capra::Capra),
    || Box::new(calculators::egfr_ckd_epi::EgfrCkdEpi),
    || Box::new(calculators::cha2ds2_vasc::Cha2ds2Vasc),
    || Box::new(calculators::curb65::Curb65),
];
