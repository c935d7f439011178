//! Field parsing
//!
//! Turns the argument part of a submit line into form fields.

use crate::forms::SubmittedFields;

pub use crate::protocol::commands::parse_command;

/// Splits `raw` on whitespace outside double quotes.
///
/// Quotes are removed. Inside quotes `\"` and `\\` stand for a literal quote
/// and backslash; outside quotes a backslash is an ordinary character. An
/// unterminated quote runs to the end of the line.
fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            '\\' if quoted => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        tokens.push(current);
    }
    tokens
}

/// Parses whitespace-separated `name=value` tokens.
///
/// Values containing spaces are double-quoted (`password="Strong Pass 123"`).
/// A token without `=` is a checked checkbox. Only the first `=` splits, so
/// values may contain `=`. Repeated names keep the last value.
pub fn parse_fields(raw: &str) -> SubmittedFields {
    let mut fields = SubmittedFields::new();

    for token in tokenize(raw) {
        match token.split_once('=') {
            Some((name, value)) => fields.insert(name, value),
            None => fields.insert(token.as_str(), ""),
        }
    }

    fields
}
