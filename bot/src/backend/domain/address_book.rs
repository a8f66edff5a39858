//! In-memory contact store keyed by contact name.

use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use log::{debug, info};
use shared::UpcomingBirthday;

use super::birthday_calendar::BirthdayWindow;
use super::models::{Phone, Record};

/// Maps contact names to records, keeping insertion order.
///
/// The map is private so every key always equals its record's name.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) -> &Record {
        let key = record.name().as_str().to_string();
        info!("Storing contact: {}", key);
        let (index, _) = self.records.insert_full(key, record);
        &self.records[index]
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        let record = self.records.get(name);
        if record.is_none() {
            debug!("Contact not found: {}", name);
        }
        record
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Remove the contact if present, keeping the order of the others.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            info!("Deleted contact: {}", name);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts with a birthday in next calendar week, relative to today.
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive())
    }

    /// Contacts with a birthday in the calendar week after `today`'s week.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let window = BirthdayWindow::next_week_from(today);
        debug!("Birthday window: {} ..= {}", window.start, window.end);

        let upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter(|record| {
                record
                    .birthday()
                    .is_some_and(|birthday| window.includes_birthday(birthday, today))
            })
            .map(to_upcoming_birthday)
            .collect();

        info!("Found {} upcoming birthdays", upcoming.len());
        upcoming
    }

    /// Display line for every contact.
    pub fn show_all(&self) -> Vec<String> {
        self.records.values().map(Record::to_string).collect()
    }
}

fn to_upcoming_birthday(record: &Record) -> UpcomingBirthday {
    UpcomingBirthday {
        name: record.name().to_string(),
        phones: record.phones().iter().map(Phone::to_string).collect(),
        birthday: record.birthday().map(ToString::to_string),
    }
}
