//! Abstract registry trait.
//!
//! A registry is an external key-value collaborator mapping keys to
//! records. The update operation needs only `get` and `update`; `insert`
//! and `list` belong to the collaborator side of the contract (seeding
//! the registry and reporting over it). Lifecycle ownership - creation,
//! persistence, replication - lies entirely with the implementation.

use thiserror::Error;

use crate::key::RecordKey;
use crate::record::Record;

/// Errors surfaced by a registry collaborator.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The key does not exist in the registry.
    #[error("Record not found: {0}")]
    NotFound(RecordKey),

    /// The registry already holds a record under this key.
    #[error("Duplicate key: {0}")]
    DuplicateKey(RecordKey),

    /// The registry rejected the write-back.
    #[error("Write rejected: {message}")]
    Write {
        /// Implementation-specific reason, e.g. a version conflict.
        message: String,
    },

    /// Backend failure (lock poisoning, I/O, connectivity, ...).
    #[error("Registry backend error: {0}")]
    Backend(String),

    /// Encoding or decoding a record failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// External key-value store abstraction for structured records.
///
/// # Concurrency
/// Implementations must be safe for concurrent use. The update operation
/// does not synchronize concurrent invocations against the same key; any
/// mutual exclusion or optimistic-concurrency check belongs here.
pub trait Registry: Send + Sync {
    /// Fetch the record stored under `key`.
    ///
    /// # Errors
    /// `NotFound` if the key does not exist.
    fn get(&self, key: &RecordKey) -> Result<Record, RegistryError>;

    /// Persist `record` under its key, replacing the stored value.
    ///
    /// # Errors
    /// `NotFound` if the key does not exist; `Write` if the backend
    /// rejects the write.
    fn update(&self, record: Record) -> Result<(), RegistryError>;

    /// Store a new record under its key.
    ///
    /// # Errors
    /// `DuplicateKey` if the key is already present.
    fn insert(&self, record: Record) -> Result<(), RegistryError>;

    /// All records carrying `doc_type`, or every record when `None`.
    /// Results are sorted by key.
    fn list(&self, doc_type: Option<&str>) -> Result<Vec<Record>, RegistryError>;
}
