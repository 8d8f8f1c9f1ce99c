//! Storage providers
//!
//! Key-value persistence for the daily goal and the food log. Values are
//! stored as JSON text.

mod memory;
mod sqlite;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::db::DbError;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Storage error types
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A text key-value store.
///
/// A single call either fully succeeds or fails without a partial write.
pub trait Storage {
    /// Store `value` under `key`, replacing any previous value
    fn save_raw(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Fetch the text stored under `key`
    fn load_raw(&self, key: &str) -> StorageResult<Option<String>>;

    /// Serialize `value` to JSON and store it under `key`
    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value)?;
        self.save_raw(key, &json)
    }

    /// Load and deserialize the value under `key`, or `default` if absent
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> StorageResult<T>
    where
        Self: Sized,
    {
        match self.load_raw(key)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(default),
        }
    }
}
