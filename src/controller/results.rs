//! Controller result types
//!
//! Defines result structures returned by form submissions.

use crate::controller::SubmitState;
use crate::error::ValidationError;

/// Result of a registration submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub state: SubmitState,
    /// Stored username, set on success
    pub username: Option<String>,
    /// Every validator failure of this submit, in evaluation order
    pub failures: Vec<ValidationError>,
}

impl RegistrationOutcome {
    pub fn is_success(&self) -> bool {
        self.state == SubmitState::Success
    }
}

/// Result of a login submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub state: SubmitState,
    /// Logged-in username, set on success
    pub username: Option<String>,
    /// Whether the user asked to stay logged in
    pub persist: bool,
    pub failure: Option<ValidationError>,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        self.state == SubmitState::Success
    }
}
