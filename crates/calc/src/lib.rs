//! Calculation data model — the request/response shapes a calculation
//! engine hands to lifecycle hooks.
//!
//! A request carries named input fields, a response carries named output
//! fields; each field holds a 2-D grid of scalar cell values. Hooks read
//! the request and may annotate the response. No engine concepts beyond
//! that: no formulas, no recalc, no dependency tracking.

mod field;
mod value;

pub use field::{CalculationRequest, CalculationResponse, InputField, OutputField};
pub use value::{CellValue, ValueGrid};
