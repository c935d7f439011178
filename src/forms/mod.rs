//! Registration and login forms
//!
//! Field names and the transient state of the two forms.

pub mod fields;
pub mod state;

pub use fields::{Field, SubmittedFields};
pub use state::{LoginForm, RegistrationForm};
