//! Error types
//!
//! Defines domain-specific error types for validation, storage, and form handling.

use std::fmt;
use std::io;

use crate::forms::Field;

/// Field validation failures.
///
/// Every variant maps to exactly one user-facing message and one focus target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    UsernameTooShort { min: usize },
    UsernameRepetitive,
    UsernameInvalidCharacters,
    UsernameTaken(String),
    InvalidEmail { blocked_domain: String },
    PasswordTooShort { min: usize },
    PasswordMissingCase,
    PasswordMissingDigit,
    PasswordMissingSpecial,
    PasswordForbiddenContent,
    PasswordMismatch,
    TermsNotAccepted,
    UsernameBlank,
    PasswordBlank,
    InvalidCredentials,
}

impl ValidationError {
    /// Text shown in the error display.
    pub fn message(&self) -> String {
        match self {
            ValidationError::UsernameTooShort { min } => {
                format!("Username must be at least {} characters long.", min)
            }
            ValidationError::UsernameRepetitive => {
                "Username must contain at least two unique characters.".into()
            }
            ValidationError::UsernameInvalidCharacters => {
                "Username cannot contain special characters or whitespace.".into()
            }
            ValidationError::UsernameTaken(_) => "That username is already taken.".into(),
            ValidationError::InvalidEmail { blocked_domain } => format!(
                "Please enter a valid email address and avoid using '{}'.",
                blocked_domain
            ),
            ValidationError::PasswordTooShort { min } => {
                format!("Password must be at least {} characters long.", min)
            }
            ValidationError::PasswordMissingCase => {
                "Password must contain both uppercase and lowercase letters.".into()
            }
            ValidationError::PasswordMissingDigit => {
                "Password must contain at least one number.".into()
            }
            ValidationError::PasswordMissingSpecial => {
                "Password must contain at least one special character.".into()
            }
            ValidationError::PasswordForbiddenContent => {
                "Password cannot contain 'password' or the username.".into()
            }
            ValidationError::PasswordMismatch => "Passwords must match.".into(),
            ValidationError::TermsNotAccepted => "You must agree to the Terms of Use.".into(),
            ValidationError::UsernameBlank => "Username cannot be blank.".into(),
            ValidationError::PasswordBlank => "Password cannot be blank.".into(),
            ValidationError::InvalidCredentials => "Invalid username or password.".into(),
        }
    }

    /// Field that receives focus when this error is displayed.
    ///
    /// Invalid credentials deliberately focus nothing so the display does not
    /// reveal which of the two fields was wrong.
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::UsernameTooShort { .. }
            | ValidationError::UsernameRepetitive
            | ValidationError::UsernameInvalidCharacters
            | ValidationError::UsernameTaken(_)
            | ValidationError::UsernameBlank => Some(Field::Username),
            ValidationError::InvalidEmail { .. } => Some(Field::Email),
            ValidationError::PasswordTooShort { .. }
            | ValidationError::PasswordMissingCase
            | ValidationError::PasswordMissingDigit
            | ValidationError::PasswordMissingSpecial
            | ValidationError::PasswordForbiddenContent
            | ValidationError::PasswordBlank => Some(Field::Password),
            ValidationError::PasswordMismatch => Some(Field::PasswordCheck),
            ValidationError::TermsNotAccepted => Some(Field::Terms),
            ValidationError::InvalidCredentials => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Key-value store errors
#[derive(Debug)]
pub enum StoreError {
    IoError(io::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "IO error: {}", e),
            StoreError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::IoError(error)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Serialization(error)
    }
}

/// Faults that abort a submission or the session, as opposed to validation
/// failures which are reported through the error display.
#[derive(Debug)]
pub enum FormError {
    Store(StoreError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Store(e) => write!(f, "Store error: {}", e),
            FormError::Config(e) => write!(f, "Configuration error: {}", e),
            FormError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FormError {}

impl From<StoreError> for FormError {
    fn from(error: StoreError) -> Self {
        FormError::Store(error)
    }
}

impl From<config::ConfigError> for FormError {
    fn from(error: config::ConfigError) -> Self {
        FormError::Config(error)
    }
}

impl From<io::Error> for FormError {
    fn from(error: io::Error) -> Self {
        FormError::IoError(error)
    }
}
