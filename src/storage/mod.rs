//! Key-value storage
//!
//! Flat string-keyed stores used as the user database.

pub mod filesystem;
pub mod memory;

pub use filesystem::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// A flat, process-wide string key-value store.
///
/// Reads never fail; writes may, depending on the backend.
pub trait UserStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;

    fn len(&self) -> usize;

    fn contains_key(&self, key: &str) -> bool {
        self.get_item(key).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: UserStore + ?Sized> UserStore for Box<S> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
