//! Auxiliary profile fields.
//!
//! Phone and address are stored as independent plain-string keys, not as
//! part of the session user record - they survive logout and are shared by
//! whoever is logged in. A demo quirk kept as-is.

use std::sync::Arc;

use tracing::warn;

use crate::storage::{KeyValueStore, StorageError, keys};

/// Reader/writer for the plain-string profile keys.
pub struct ProfileService {
    storage: Arc<dyn KeyValueStore>,
}

impl ProfileService {
    /// Create the service over the shared store.
    #[must_use]
    pub const fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// The stored phone number, if any.
    #[must_use]
    pub fn phone(&self) -> Option<String> {
        self.read_plain(keys::USER_PHONE)
    }

    /// Store the phone number.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the write fails.
    pub fn set_phone(&self, phone: &str) -> Result<(), StorageError> {
        self.storage.set(keys::USER_PHONE, phone)
    }

    /// The stored address, if any.
    #[must_use]
    pub fn address(&self) -> Option<String> {
        self.read_plain(keys::USER_ADDRESS)
    }

    /// Store the address.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the write fails.
    pub fn set_address(&self, address: &str) -> Result<(), StorageError> {
        self.storage.set(keys::USER_ADDRESS, address)
    }

    fn read_plain(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "failed to read profile field, treating as absent");
                None
            }
        }
    }
}
