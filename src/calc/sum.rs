use super::bignum::add_decimal;
use super::error::CalcError;
use super::validate::is_valid;

/// Sums a comma list of non-negative integers into an exact decimal string.
///
/// Validation is repeated here rather than trusted from the caller; a caller
/// that skipped `is_valid` gets `CalcError::InvalidInput` instead of a bogus
/// total. Empty segments are dropped before folding so the accumulator only
/// ever sees digit strings.
pub fn sum(input: &str) -> Result<String, CalcError> {
    if !is_valid(input) {
        return Err(CalcError::InvalidInput);
    }

    Ok(input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .fold(String::from("0"), |acc, token| add_decimal(&acc, token)))
}
