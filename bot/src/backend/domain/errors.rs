//! Error types for the address book domain and the command layer.

/// Raised when a field value fails validation at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Number must contain 10 numbers")]
    InvalidPhone,
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday,
}

/// Failure categories a command handler can report.
///
/// Every variant is recoverable: the dispatcher turns it into a fixed
/// message and the REPL keeps running.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Key not found: {0}")]
    KeyNotFound(String),
    #[error("Missing argument: {0}")]
    MissingArguments(&'static str),
}
