//! Birthday field parsed from `DD.MM.YYYY`.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::backend::domain::errors::ValidationError;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        // chrono accepts unpadded fields, so check the shape before parsing
        if !Self::has_expected_shape(value) {
            return Err(ValidationError::InvalidBirthday);
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday)
    }

    fn has_expected_shape(value: &str) -> bool {
        let parts: Vec<&str> = value.split('.').collect();
        let widths = [2, 2, 4];
        parts.len() == widths.len()
            && parts
                .iter()
                .zip(widths)
                .all(|(part, width)| part.len() == width && part.bytes().all(|b| b.is_ascii_digit()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Same month and day moved to `year`.
    /// Returns `None` for 29 February when `year` is not a leap year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        self.0.with_year(year)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
