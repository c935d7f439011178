//! Submission state
//!
//! Lifecycle of a single submit event and the policy for which error stays
//! on display.

use serde::Deserialize;
use std::fmt;

/// `Idle → Validating → {Success, Failed}`, once per submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Validating,
    Success,
    Failed,
}

impl fmt::Display for SubmitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmitState::Idle => "idle",
            SubmitState::Validating => "validating",
            SubmitState::Success => "success",
            SubmitState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Which message the error display ends up showing when several registration
/// validators fail in the same submit.
///
/// All validators run either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Each failure overwrites the display, so the last one is visible.
    #[default]
    LastWins,
    /// The first failure stays on display.
    FirstWins,
}
