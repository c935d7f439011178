//! Account validation
//!
//! Field validators and the credential store they check against.

pub mod credentials;
pub mod validator;

pub use credentials::{CredentialStore, PlaintextCredentials, UserRecord};
pub use validator::{
    ValidationRules, validate_email, validate_password, validate_terms, validate_username,
};
