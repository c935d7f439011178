//! Field validators
//!
//! Each validator normalizes its input, checks the rules in a fixed order and
//! stops at the first broken one. A failure is written to the error sink
//! (message plus focus) before it is returned.

use log::debug;
use serde::Deserialize;
use std::collections::HashSet;

use super::credentials::CredentialStore;
use crate::error::ValidationError;
use crate::ui::ErrorSink;

const FORBIDDEN_PASSWORD_WORD: &str = "password";

/// Tunable limits applied by the validators.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationRules {
    pub min_username_length: usize,
    pub min_password_length: usize,
    pub blocked_email_domain: String,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_username_length: 4,
            min_password_length: 12,
            blocked_email_domain: "example.com".to_string(),
        }
    }
}

/// Reports `err` to the sink and hands it back as the validator's result.
fn reject<T>(sink: &mut dyn ErrorSink, err: ValidationError) -> Result<T, ValidationError> {
    debug!("Validation failed: {:?}", err);
    sink.show_error(&err.message(), err.field());
    Err(err)
}

/// Validates a registration username and returns it trimmed and lowercased.
pub fn validate_username(
    raw: &str,
    rules: &ValidationRules,
    credentials: &dyn CredentialStore,
    sink: &mut dyn ErrorSink,
) -> Result<String, ValidationError> {
    let username = raw.trim().to_lowercase();
    let unique_chars = username.chars().collect::<HashSet<_>>().len();

    if username.chars().count() < rules.min_username_length {
        return reject(
            sink,
            ValidationError::UsernameTooShort {
                min: rules.min_username_length,
            },
        );
    }
    if unique_chars < 2 {
        return reject(sink, ValidationError::UsernameRepetitive);
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return reject(sink, ValidationError::UsernameInvalidCharacters);
    }
    if credentials.contains(&username) {
        return reject(sink, ValidationError::UsernameTaken(username));
    }

    Ok(username)
}

/// Checks the `local@domain.tld` shape: no whitespace, a single `@`, and a
/// dot inside the domain with something on both sides of it.
fn has_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validates an email address and returns it trimmed and lowercased.
pub fn validate_email(
    raw: &str,
    rules: &ValidationRules,
    sink: &mut dyn ErrorSink,
) -> Result<String, ValidationError> {
    let email = raw.trim().to_lowercase();
    let blocked_suffix = format!("@{}", rules.blocked_email_domain.to_lowercase());

    if !has_email_shape(&email) || email.ends_with(&blocked_suffix) {
        return reject(
            sink,
            ValidationError::InvalidEmail {
                blocked_domain: rules.blocked_email_domain.clone(),
            },
        );
    }

    Ok(email)
}

/// Validates password strength and its confirmation.
///
/// `username` is the already validated username, or `None` when that
/// validation failed, in which case the username check is skipped.
pub fn validate_password(
    password: &str,
    confirmation: &str,
    username: Option<&str>,
    rules: &ValidationRules,
    sink: &mut dyn ErrorSink,
) -> Result<String, ValidationError> {
    if password.chars().count() < rules.min_password_length {
        return reject(
            sink,
            ValidationError::PasswordTooShort {
                min: rules.min_password_length,
            },
        );
    }
    if !password.chars().any(|c| c.is_ascii_uppercase())
        || !password.chars().any(|c| c.is_ascii_lowercase())
    {
        return reject(sink, ValidationError::PasswordMissingCase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return reject(sink, ValidationError::PasswordMissingDigit);
    }
    // Underscore counts as special.
    if password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return reject(sink, ValidationError::PasswordMissingSpecial);
    }

    let lowered = password.to_lowercase();
    let contains_username =
        username.is_some_and(|name| lowered.contains(&name.to_lowercase()));
    if lowered.contains(FORBIDDEN_PASSWORD_WORD) || contains_username {
        return reject(sink, ValidationError::PasswordForbiddenContent);
    }
    if password != confirmation {
        return reject(sink, ValidationError::PasswordMismatch);
    }

    Ok(password.to_string())
}

/// Validates that the terms checkbox is checked.
pub fn validate_terms(checked: bool, sink: &mut dyn ErrorSink) -> Result<(), ValidationError> {
    if !checked {
        return reject(sink, ValidationError::TermsNotAccepted);
    }
    Ok(())
}
