//! One function per command. Handlers only talk to the address book and
//! return a reply or a `CommandError`; turning errors into text is the
//! dispatcher's job.

use log::info;

use super::palette::Tone;
use crate::backend::domain::models::{Name, Phone, Record};
use crate::backend::domain::{AddressBook, CommandError};

/// Text to show the user and how to color it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub tone: Tone,
    pub text: String,
}

impl Reply {
    pub fn success(text: impl Into<String>) -> Self {
        Self { tone: Tone::Success, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { tone: Tone::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { tone: Tone::Error, text: text.into() }
    }
}

pub type HandlerResult = Result<Reply, CommandError>;

pub const HELP_TEXT: &str = "\
Commands:
  hello
  add <name> <phone>
  change <name> <old_phone> <new_phone>
  remove-phone <name> <phone>
  phone <name>
  all
  add-birthday <name> <DD.MM.YYYY>
  show-birthday <name>
  birthdays
  delete <name>
  close | exit";

fn arg<'a>(args: &'a [String], index: usize, what: &'static str) -> Result<&'a str, CommandError> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArguments(what))
}

fn existing<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record, CommandError> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::KeyNotFound(name.to_string()))
}

pub fn hello() -> HandlerResult {
    Ok(Reply::info("How can I help you?"))
}

pub fn help() -> HandlerResult {
    Ok(Reply::info(HELP_TEXT))
}

/// `add <name> <phone>`: create the contact or append a phone to it.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> HandlerResult {
    let name = arg(args, 0, "name")?;
    let phone = arg(args, 1, "phone")?;

    // Validate up front so a bad number never leaves an empty contact behind
    Phone::new(phone)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        info!("Added phone to existing contact {}", name);
        return Ok(Reply::success(format!("Contact: {} updated", name)));
    }

    let mut record = Record::new(Name::new(name)?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok(Reply::success(format!("Contact: {} created", name)))
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> HandlerResult {
    let name = arg(args, 0, "name")?;
    let old_phone = arg(args, 1, "old phone")?;
    let new_phone = arg(args, 2, "new phone")?;

    let record = existing(book, name)?;
    let had_old = record.find_phone(old_phone).is_some();
    record.edit_phone(old_phone, new_phone)?;

    if had_old {
        Ok(Reply::success(format!("Contact: {} updated", name)))
    } else {
        Ok(Reply::info(format!("Phone {} not found for {}, nothing changed", old_phone, name)))
    }
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> HandlerResult {
    let name = arg(args, 0, "name")?;
    let phone = arg(args, 1, "phone")?;

    let record = existing(book, name)?;
    if record.find_phone(phone).is_none() {
        return Ok(Reply::info(format!("Phone {} not found for {}, nothing changed", phone, name)));
    }
    record.remove_phone(phone);
    Ok(Reply::success(format!("Contact: {} updated", name)))
}

/// `phone <name>`: a missing contact is a normal outcome, not an error.
pub fn show_phone(args: &[String], book: &AddressBook) -> HandlerResult {
    let name = arg(args, 0, "name")?;
    match book.find(name) {
        Some(record) => Ok(Reply::info(record.to_string())),
        None => Ok(Reply::info("Not found")),
    }
}

pub fn show_all(book: &AddressBook) -> HandlerResult {
    if book.is_empty() {
        return Ok(Reply::info("No contacts yet."));
    }
    Ok(Reply::info(book.show_all().join("\n")))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> HandlerResult {
    let name = arg(args, 0, "name")?;
    let birthday = arg(args, 1, "birthday")?;

    existing(book, name)?.add_birthday(birthday)?;
    Ok(Reply::success(format!("Contact: {} birthday updated", name)))
}

pub fn show_birthday(args: &[String], book: &AddressBook) -> HandlerResult {
    let name = arg(args, 0, "name")?;
    let record = book
        .find(name)
        .ok_or_else(|| CommandError::KeyNotFound(name.to_string()))?;

    match record.birthday() {
        Some(birthday) => Ok(Reply::info(format!("{}: {}", name, birthday))),
        None => Ok(Reply::info(format!("No birthday set for {}", name))),
    }
}

pub fn birthdays(book: &AddressBook) -> HandlerResult {
    let upcoming = book.get_upcoming_birthdays();
    if upcoming.is_empty() {
        return Ok(Reply::info("No birthdays next week."));
    }

    let lines: Vec<String> = upcoming.iter().map(ToString::to_string).collect();
    Ok(Reply::info(lines.join("\n")))
}

pub fn delete_contact(args: &[String], book: &mut AddressBook) -> HandlerResult {
    let name = arg(args, 0, "name")?;
    book.delete(name)
        .ok_or_else(|| CommandError::KeyNotFound(name.to_string()))?;
    Ok(Reply::success(format!("Contact: {} deleted", name)))
}
