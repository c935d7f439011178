//! Error handling
//!
//! Defines error types and handling for form submissions and storage.

pub mod handlers;
pub mod types;

pub use types::*;
