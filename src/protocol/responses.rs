//! Response formatting
//!
//! Prefixed lines for the error display (error stream) and alerts (output
//! stream).

pub const ERROR_PREFIX: &str = "error";
pub const ALERT_PREFIX: &str = "alert";

pub const HELP_TEXT: &str = "\
commands:
  REGISTER username=<name> email=<addr> password=<pw> passwordCheck=<pw> [terms]
  LOGIN username=<name> password=<pw> [persist]
  HELP
  QUIT
values with spaces go in double quotes: password=\"Strong Pass 123\"";

/// Format a line for the error display
pub fn format_error(message: &str) -> String {
    format!("{}: {}\n", ERROR_PREFIX, message)
}

/// Format an alert line
pub fn format_alert(message: &str) -> String {
    format!("{}: {}\n", ALERT_PREFIX, message)
}
