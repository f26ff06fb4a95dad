//! Persistent key-value storage.
//!
//! The durability model mirrors browser `localStorage`: a synchronous,
//! string-keyed, single-writer store of JSON-serialized blobs. Services
//! write a full-collection snapshot on every mutation and hydrate from the
//! store on construction.
//!
//! Reads are deliberately liberal: a missing key, an unreadable value, or a
//! corrupted snapshot all behave as "no data". Corruption is logged, never
//! surfaced to the user.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

/// Storage keys for persisted collections.
pub mod keys {
    /// Key for the cart snapshot (array of cart lines).
    pub const CART: &str = "cart";

    /// Key for the wishlist snapshot (array of products).
    pub const WISHLIST: &str = "wishlist";

    /// Key for the current session user; absent when logged out.
    pub const USER: &str = "user";

    /// Key for the user directory (array of directory users).
    pub const USERS: &str = "users";

    /// Key for the profile phone number (plain string, not JSON).
    pub const USER_PHONE: &str = "user_phone";

    /// Key for the profile address (plain string, not JSON).
    pub const USER_ADDRESS: &str = "user_address";
}

/// Errors that can occur when accessing the key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key contains characters outside `[A-Za-z0-9_-]`.
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    /// A value could not be serialized for writing.
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A synchronous string-keyed key-value store.
///
/// Shared across all services within a single process; access is
/// synchronous and non-concurrent by construction, so implementations only
/// need enough interior locking to satisfy `Send + Sync`.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing medium fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing medium fails or the key is
    /// invalid.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing medium fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// JSON convenience helpers over any [`KeyValueStore`].
pub trait KeyValueStoreExt: KeyValueStore {
    /// Read and deserialize the JSON value under `key`.
    ///
    /// Liberal-read policy: a missing key, a read failure, or a value that
    /// fails to deserialize all yield `None`. Failures are logged at `warn`.
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "failed to read persisted value, treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "discarding corrupted persisted value");
                None
            }
        }
    }

    /// Serialize `value` as JSON and write it under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if serialization or the write fails.
    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

/// Validate a storage key.
///
/// Keys map to file names in [`FileStore`], so the charset is restricted to
/// `[A-Za-z0-9_-]`.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("cart").is_ok());
        assert!(validate_key("user_phone").is_ok());
        assert!(validate_key("a-b-3").is_ok());

        assert!(validate_key("").is_err());
        assert!(validate_key("cart items").is_err());
        assert!(validate_key("../escape").is_err());
    }

    #[test]
    fn test_read_json_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.read_json::<Vec<u32>>(keys::CART), None);
    }

    #[test]
    fn test_read_json_corrupted_value() {
        let store = MemoryStore::new();
        store.set(keys::CART, "{not json").unwrap();
        assert_eq!(store.read_json::<Vec<u32>>(keys::CART), None);
    }

    #[test]
    fn test_write_then_read_json() {
        let store = MemoryStore::new();
        store.write_json(keys::CART, &vec![1u32, 2, 3]).unwrap();
        assert_eq!(
            store.read_json::<Vec<u32>>(keys::CART),
            Some(vec![1, 2, 3])
        );
    }
}
