use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_VALUE: i64 = 1000;
pub const MAX_VALUE: i64 = 9999;

/// A number read from input. Only values in `[MIN_VALUE, MAX_VALUE]` have digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputNumber {
    pub value: i64,
}

impl InputNumber {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    pub fn is_valid(&self) -> bool {
        (MIN_VALUE..=MAX_VALUE).contains(&self.value)
    }

    pub fn digits(&self) -> Option<Digits> {
        if !self.is_valid() {
            return None;
        }
        let v = self.value;
        Some(Digits {
            units: (v % 10) as u8,
            tens: (v / 10 % 10) as u8,
            hundreds: (v / 100 % 10) as u8,
            thousands: (v / 1000 % 10) as u8,
        })
    }
}

impl Validate for InputNumber {
    fn validate(&self) -> Result<()> {
        validate_range(self.value, MIN_VALUE, MAX_VALUE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digits {
    pub units: u8,
    pub tens: u8,
    pub hundreds: u8,
    pub thousands: u8,
}

impl Digits {
    pub fn is_palindrome(&self) -> bool {
        self.units == self.thousands && self.tens == self.hundreds
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Yes,
    No,
}

impl From<bool> for Verdict {
    fn from(palindrome: bool) -> Self {
        if palindrome {
            Verdict::Yes
        } else {
            Verdict::No
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Yes => write!(f, "yes"),
            Verdict::No => write!(f, "no"),
        }
    }
}
