//! Credential storage
//!
//! The only code that knows how user records are laid out in the key-value
//! store. Passwords are kept in cleartext; swapping this implementation is
//! all it takes to change that.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::storage::UserStore;

/// Value stored under a username key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub password: String,
}

/// Typed access to registered users.
pub trait CredentialStore {
    /// Whether `username` (already normalized) is taken.
    fn contains(&self, username: &str) -> bool;

    /// The record for `username`. Missing and unreadable records are both `None`.
    fn lookup(&self, username: &str) -> Option<UserRecord>;

    fn insert(&mut self, username: &str, record: &UserRecord) -> Result<(), StoreError>;

    /// Whether `password` is the one stored for `username`.
    fn verify(&self, username: &str, password: &str) -> bool {
        matches!(self.lookup(username), Some(record) if record.password == password)
    }
}

/// Stores records as cleartext JSON under the username key.
#[derive(Debug, Default)]
pub struct PlaintextCredentials<S> {
    store: S,
}

impl<S: UserStore> PlaintextCredentials<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: UserStore> CredentialStore for PlaintextCredentials<S> {
    fn contains(&self, username: &str) -> bool {
        // An empty value counts as absent.
        self.store
            .get_item(username)
            .is_some_and(|value| !value.is_empty())
    }

    fn lookup(&self, username: &str) -> Option<UserRecord> {
        let raw = self.store.get_item(username)?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Unreadable record for user {}: {}", username, e);
                None
            }
        }
    }

    fn insert(&mut self, username: &str, record: &UserRecord) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(record)?;
        self.store.set_item(username, serialized)
    }
}
