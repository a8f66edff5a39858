//! A single contact: one name, any number of phones, an optional birthday.

use std::fmt;

use log::debug;

use super::{Birthday, Name, Phone};
use crate::backend::domain::errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(value)?;
        debug!("Adding phone {} to {}", phone, self.name);
        self.phones.push(phone);
        Ok(())
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Remove the first phone equal to `value`; does nothing when absent.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(index) = self.position_of(value) {
            self.phones.remove(index);
        }
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// A missing `old` leaves the list untouched and is not an error.
    /// `new` is only validated when a replacement happens.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        match self.position_of(old) {
            Some(index) => {
                self.phones[index] = Phone::new(new)?;
                debug!("Replaced phone {} with {} for {}", old, new, self.name);
            }
            None => debug!("Phone {} not found for {}, nothing to edit", old, self.name),
        }
        Ok(())
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(phones: &[&str]) -> Record {
        let mut record = Record::new(Name::new("John").unwrap());
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    fn phone_strings(record: &Record) -> Vec<&str> {
        record.phones().iter().map(Phone::as_str).collect()
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::new(Name::new("John").unwrap());
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_appends_in_order() {
        let mut record = record_with(&["1234567890"]);
        record.add_phone("0987654321").unwrap();
        record.add_phone("1234567890").unwrap();

        assert_eq!(phone_strings(&record), vec!["1234567890", "0987654321", "1234567890"]);
    }

    #[test]
    fn test_add_invalid_phone_leaves_record_unchanged() {
        let mut record = record_with(&["1234567890"]);
        assert_eq!(record.add_phone("abc"), Err(ValidationError::InvalidPhone));
        assert_eq!(phone_strings(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = record_with(&[]);
        record.add_birthday("01.01.1990").unwrap();
        record.add_birthday("02.02.1991").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1991");

        assert_eq!(record.add_birthday("1991-02-02"), Err(ValidationError::InvalidBirthday));
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1991");
    }

    #[test]
    fn test_find_phone() {
        let record = record_with(&["1234567890", "0987654321"]);
        assert_eq!(record.find_phone("0987654321").unwrap().as_str(), "0987654321");
        assert!(record.find_phone("5555555555").is_none());
    }

    #[test]
    fn test_remove_phone_first_match_only() {
        let mut record = record_with(&["1234567890", "0987654321", "1234567890"]);
        record.remove_phone("1234567890");
        assert_eq!(phone_strings(&record), vec!["0987654321", "1234567890"]);

        record.remove_phone("5555555555");
        assert_eq!(phone_strings(&record), vec!["0987654321", "1234567890"]);
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record = record_with(&["1111111111", "2222222222", "3333333333"]);
        record.edit_phone("2222222222", "4444444444").unwrap();
        assert_eq!(phone_strings(&record), vec!["1111111111", "4444444444", "3333333333"]);
    }

    #[test]
    fn test_edit_missing_phone_is_noop() {
        let mut record = record_with(&["1111111111", "2222222222"]);
        assert!(record.edit_phone("9999999999", "4444444444").is_ok());
        assert_eq!(phone_strings(&record), vec!["1111111111", "2222222222"]);
    }

    #[test]
    fn test_edit_phone_rejects_invalid_replacement() {
        let mut record = record_with(&["1111111111"]);
        assert_eq!(
            record.edit_phone("1111111111", "bad"),
            Err(ValidationError::InvalidPhone)
        );
        assert_eq!(phone_strings(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_display() {
        let record = record_with(&["1234567890", "0987654321"]);
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 0987654321"
        );
    }
}
