//! Date arithmetic for the "birthdays next week" query.
//!
//! The window is the calendar week after the current one: Monday through
//! Sunday, both inclusive. Birthdays are compared by month and day only,
//! moved into the current year first.
//!
//! Known limitation: when next week spans December into January, birthdays
//! in January are moved into the current year and therefore never match.

use chrono::{Datelike, Duration, Local, NaiveDate};
use log::warn;

use super::models::Birthday;

/// Inclusive date range covering next calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BirthdayWindow {
    /// Window for the week following `today`'s week.
    pub fn next_week_from(today: NaiveDate) -> Self {
        let days_until_monday = 7 - i64::from(today.weekday().num_days_from_monday());
        let start = today + Duration::days(days_until_monday);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    /// Window for the week following the current local date.
    pub fn next_week() -> Self {
        Self::next_week_from(Local::now().date_naive())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether `birthday`, moved into `today`'s year, falls inside the window.
    pub fn includes_birthday(&self, birthday: &Birthday, today: NaiveDate) -> bool {
        match birthday.in_year(today.year()) {
            Some(date) => self.contains(date),
            None => {
                warn!(
                    "Birthday {} has no counterpart in {}, skipping",
                    birthday,
                    today.year()
                );
                false
            }
        }
    }
}
