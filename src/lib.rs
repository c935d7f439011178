//! Registration and login form handling over a flat key-value user store.

pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod forms;
pub mod protocol;
pub mod session;
pub mod storage;
pub mod ui;

pub use config::AppConfig;
pub use controller::FormController;
pub use session::Session;
