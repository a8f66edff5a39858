use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact whose birthday falls within next week's Monday..=Sunday window.
/// Computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    pub name: String,
    pub phones: Vec<String>,
    /// Birthday in DD.MM.YYYY format, with the birth year
    pub birthday: Option<String>,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, phones: {}",
            self.name,
            self.birthday.as_deref().unwrap_or("-"),
            self.phones.join("; ")
        )
    }
}
