//! Module `commands`
//!
//! Defines the line commands that stand in for the two forms' submit events,
//! their status, and results.

use crate::forms::SubmittedFields;
use crate::protocol::parser::parse_fields;

/// A command parsed from one input line.
///
/// `REGISTER` and `LOGIN` carry the submitted form fields.
#[derive(Debug, PartialEq)]
pub enum Command {
    Register(SubmittedFields),
    Login(SubmittedFields),
    Help,
    Quit,
    Unknown(String),
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    CloseConnection,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

/// Parses a raw input line into a `Command`.
///
/// The verb is case-insensitive; field names are not.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "REGISTER" | "REG" => Command::Register(parse_fields(arg)),
        "LOGIN" => Command::Login(parse_fields(arg)),
        "HELP" | "?" => Command::Help,
        "QUIT" | "Q" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
