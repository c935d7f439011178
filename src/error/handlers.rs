//! Error handlers
//!
//! Logs faults and maps them to the line shown to the user.

use crate::error::types::FormError;
use log::error;

/// Log a fault that aborted a submission
pub fn handle_error(err: &FormError) {
    error!("Form handling error: {}", err);
}

/// Text reported to the user for a fault.
///
/// Store faults are not the user's doing, so they get a generic retry hint.
pub fn error_to_display(err: &FormError) -> &'static str {
    match err {
        FormError::Store(_) => "Your data could not be saved. Please try again.",
        FormError::Config(_) => "The form is not configured correctly.",
        FormError::IoError(_) => "Something went wrong. Please try again.",
    }
}
