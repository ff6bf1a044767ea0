//! Comma-list string calculator
//!
//! Validates free text as a comma-separated list of canonical non-negative
//! integers and computes their exact decimal sum with digit-string addition,
//! so totals never lose precision to a fixed-width numeric type.

pub mod calc;
pub mod repl;

pub use calc::{add_decimal, is_valid, sum, CalcError};
