//! Form submission handling
//!
//! The controller that drives validation for each submit, its state, and the
//! outcomes it reports.

pub mod handler;
pub mod results;
pub mod state;

pub use handler::FormController;
pub use results::{LoginOutcome, RegistrationOutcome};
pub use state::{ErrorPolicy, SubmitState};
