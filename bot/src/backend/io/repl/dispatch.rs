//! Central command dispatch and error translation.
//!
//! Every handler failure ends up here and becomes a fixed message, so no
//! command can stop the session.

use log::{debug, warn};

use super::handlers::{self, HandlerResult, Reply};
use super::parser::{parse_input, Command};
use crate::backend::domain::{AddressBook, CommandError};

pub const KEY_NOT_FOUND_MESSAGE: &str = "Key not found.";
pub const MISSING_ARGUMENTS_MESSAGE: &str = "Enter the correct number of arguments.";
pub const INVALID_COMMAND_MESSAGE: &str = "Invalid command.";

/// What the session should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading; print the reply if there is one
    Continue(Option<Reply>),
    Exit,
}

/// Parse and run one input line against the book.
pub fn dispatch(line: &str, book: &mut AddressBook) -> Outcome {
    let parsed = parse_input(line);
    let command = Command::from_token(&parsed.command);
    debug!("Dispatching {:?} with {} args", command, parsed.args.len());

    let args = parsed.args.as_slice();
    let result: HandlerResult = match command {
        Command::Exit => return Outcome::Exit,
        Command::Empty => return Outcome::Continue(None),
        Command::Unknown(token) => {
            debug!("Unknown command: {}", token);
            Ok(Reply::error(INVALID_COMMAND_MESSAGE))
        }
        Command::Hello => handlers::hello(),
        Command::Help => handlers::help(),
        Command::Add => handlers::add_contact(args, book),
        Command::Change => handlers::change_contact(args, book),
        Command::RemovePhone => handlers::remove_phone(args, book),
        Command::Phone => handlers::show_phone(args, book),
        Command::All => handlers::show_all(book),
        Command::AddBirthday => handlers::add_birthday(args, book),
        Command::ShowBirthday => handlers::show_birthday(args, book),
        Command::Birthdays => handlers::birthdays(book),
        Command::Delete => handlers::delete_contact(args, book),
    };

    Outcome::Continue(Some(result.unwrap_or_else(translate_error)))
}

/// Map a handler failure to the message shown to the user.
pub fn translate_error(error: CommandError) -> Reply {
    warn!("Command failed: {}", error);
    match error {
        CommandError::Validation(e) => Reply::error(format!("Error: {}", e)),
        CommandError::KeyNotFound(_) => Reply::error(KEY_NOT_FOUND_MESSAGE),
        CommandError::MissingArguments(_) => Reply::error(MISSING_ARGUMENTS_MESSAGE),
    }
}
