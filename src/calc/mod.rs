//! Comma-list calculator core
//!
//! Two pure functions form the boundary: `is_valid` decides whether raw text
//! is a well-formed comma list of canonical non-negative integers, and `sum`
//! folds a validated list into an exact decimal total. The total is carried
//! as a digit string (see bignum.rs) so token magnitude is unbounded.
//!
//! ## Module Structure
//!
//! - **validate.rs**: token-level formatting rules
//! - **bignum.rs**: digit-wise decimal string addition
//! - **sum.rs**: validate-then-fold driver
//! - **error.rs**: the single recoverable error kind

pub mod bignum;
pub mod error;
pub mod sum;
pub mod validate;

// Re-export public types
pub use bignum::add_decimal;
pub use error::CalcError;
pub use sum::sum;
pub use validate::is_valid;
