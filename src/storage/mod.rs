//! Local key-value persistence for user festivals and prompt history.
//!
//! The core never reads ambient storage. Everything that persists goes
//! through a [`KeyValueStore`] handed in by the caller: a [`FileStore`] for the
//! CLI, a [`MemoryStore`] for tests and the browser shell.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::models::Festival;

/// Storage key for user-defined festivals.
pub const USER_FESTIVALS_KEY: &str = "wishcraft_user_festivals_v1";

/// Storage key for saved prompt history.
pub const HISTORY_KEY: &str = "wishcraft_history_v1";

/// Error raised by a store backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    /// File I/O error
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Value could not be serialized
    #[error("Failed to encode stored value: {0}")]
    Json(#[from] serde_json::Error),
    /// Key contains characters that cannot be stored
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}

/// String values addressed by fixed keys, in the spirit of browser local storage.
pub trait KeyValueStore {
    /// Read the raw value for `key`, `None` if never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value for `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value for `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Load a JSON list stored under `key`.
///
/// Missing, unreadable or unparseable data yields an empty list. The failure
/// is logged, never returned.
pub fn load_list<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("could not read '{}': {}", key, e);
            return Vec::new();
        }
    };

    if raw.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("ignoring unparseable data under '{}': {}", key, e);
            Vec::new()
        }
    }
}

/// Store `items` as a JSON list under `key`.
pub fn save_list<T, S>(store: &S, key: &str, items: &[T]) -> Result<(), StorageError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(items)?;
    store.set(key, &raw)
}

/// Load user-defined festivals. Missing or bad data is an empty list.
pub fn load_user_festivals<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Festival> {
    load_list(store, USER_FESTIVALS_KEY)
}

/// Persist the full list of user-defined festivals.
pub fn save_user_festivals<S: KeyValueStore + ?Sized>(
    store: &S,
    festivals: &[Festival],
) -> Result<(), StorageError> {
    save_list(store, USER_FESTIVALS_KEY, festivals)
}

/// Load saved prompts, most recent first. Missing or bad data is an empty list.
pub fn load_history<S: KeyValueStore + ?Sized>(store: &S) -> Vec<String> {
    load_list(store, HISTORY_KEY)
}

/// Persist saved prompts, most recent first.
pub fn save_history<S: KeyValueStore + ?Sized>(
    store: &S,
    entries: &[String],
) -> Result<(), StorageError> {
    save_list(store, HISTORY_KEY, entries)
}
