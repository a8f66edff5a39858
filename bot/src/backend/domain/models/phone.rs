//! Phone number field: exactly ten decimal digits.

use std::fmt;
use std::str::FromStr;

use crate::backend::domain::errors::ValidationError;

pub const PHONE_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if !Self::is_valid(value) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(Self(value.to_string()))
    }

    fn is_valid(value: &str) -> bool {
        value.len() == PHONE_LENGTH && value.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
