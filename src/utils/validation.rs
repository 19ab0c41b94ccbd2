use crate::utils::error::{CheckError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        tracing::debug!("{} is outside [{}, {}]", value, min, max);
        return Err(CheckError::out_of_range(value));
    }
    Ok(())
}

pub fn validate_non_empty_token(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(CheckError::malformed(token));
    }
    Ok(())
}
