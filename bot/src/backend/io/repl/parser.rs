//! Splits an input line into a command and positional arguments.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Lowercased first token; empty for a blank line
    pub command: String,
    pub args: Vec<String>,
}

pub fn parse_input(line: &str) -> ParsedInput {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().map(str::to_lowercase).unwrap_or_default();
    let args = tokens.map(str::to_string).collect();
    ParsedInput { command, args }
}

/// Every command the bot understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    All,
    Phone,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    RemovePhone,
    Help,
    Exit,
    /// Blank line: nothing to do
    Empty,
    Unknown(String),
}

impl Command {
    /// Map an already lowercased command token.
    pub fn from_token(token: &str) -> Self {
        match token {
            "" => Command::Empty,
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "all" => Command::All,
            "phone" => Command::Phone,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "delete" => Command::Delete,
            "remove-phone" => Command::RemovePhone,
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}
