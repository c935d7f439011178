//! Line protocol
//!
//! Parses input lines into form submits and formats what the page shows
//! in response.

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod responses;

pub use commands::{Command, CommandResult, CommandStatus};
pub use handlers::handle_command;
pub use parser::parse_command;
