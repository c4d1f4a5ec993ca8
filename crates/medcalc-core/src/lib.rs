//! medcalc-core
//!
//! Pure domain types for the clinical scoring framework. No I/O, no
//! calculator logic — this is the shared vocabulary of the medcalc
//! system: typed input values, field specs, calculation outcomes, and
//! the error taxonomy.

pub mod error;
pub mod models;
