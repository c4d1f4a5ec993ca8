use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::category::Category;

/// Static metadata describing one calculator, for presentation and
/// form-building layers. Immutable once the calculator type is
/// registered; required and optional input lists are disjoint.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculatorDescriptor {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub required_inputs: Vec<String>,
    pub optional_inputs: Vec<String>,
    pub references: Vec<String>,
}
