//! medcalc-extract
//!
//! Quality checking for loosely-structured clinical data extracted from
//! free text. Rules here are keyed by canonical field name and encode
//! general clinical plausibility, independent of whichever calculator
//! eventually consumes a value — calculator-specific rules live with
//! the calculators.

pub mod completeness;
pub mod fields;
