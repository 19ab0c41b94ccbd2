use crate::domain::model::{Digits, InputNumber};
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{validate_non_empty_token, Validate};
use std::num::IntErrorKind;

/// Parses a single decimal integer token.
///
/// A token that is a well-formed integer but does not fit in `i64` is
/// reported as out of range rather than malformed.
pub fn parse_token(token: &str) -> Result<i64> {
    validate_non_empty_token(token)?;
    let token = token.trim();
    token.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => CheckError::out_of_range(token),
        _ => CheckError::malformed(token),
    })
}

pub fn validate_range(value: i64) -> Result<InputNumber> {
    let number = InputNumber::new(value);
    number.validate()?;
    Ok(number)
}

/// Values that never went through [`validate_range`] are still rejected here.
pub fn decompose(number: InputNumber) -> Result<Digits> {
    number
        .digits()
        .ok_or_else(|| CheckError::out_of_range(number.value))
}

pub fn is_palindrome(value: i64) -> Result<bool> {
    let number = validate_range(value)?;
    Ok(decompose(number)?.is_palindrome())
}
