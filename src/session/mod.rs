//! Interactive session
//!
//! The single-threaded input loop that feeds form submits to the controller.

pub mod core;

pub use self::core::{ConfiguredCredentials, Session};
