//! User-visible output
//!
//! The error display and alert capabilities passed into validation.

pub mod sink;

pub use sink::{Alerts, ErrorDisplay, ErrorSink, FirstErrorOnly, Notifier};
