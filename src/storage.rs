//! Storage abstraction layer for wordbank.
//!
//! Words live behind the [`WordStore`] trait so the service never depends on
//! a concrete backend. The store itself enforces value uniqueness: a save that
//! collides with an existing value fails with
//! [`WordbankError::Conflict`](crate::error::WordbankError::Conflict), even if
//! the caller checked [`WordStore::exists`] first.
//!
//! # Architecture
//!
//! - **WordStore trait**: create-with-fresh-id, find-by-id, exists-by-value
//! - **StorageConfig enum**: Type-safe configuration for supported backends
//! - **StorageFactory**: Helper for constructing concrete stores
//!
//! # Storage Types
//!
//! ## FileWordStore
//! - Append-only JSON-lines log in a directory
//! - Replayed on open, optionally fsynced after every append
//!
//! ## MemoryWordStore
//! - In-memory storage for testing and temporary data
//! - Fast but non-persistent
//!
//! # Example
//!
//! ```
//! use wordbank::storage::{StorageConfig, StorageFactory, WordStore};
//! use wordbank::storage::memory::MemoryStorageConfig;
//!
//! # fn main() -> wordbank::error::Result<()> {
//! let store = StorageFactory::create(StorageConfig::Memory(MemoryStorageConfig::default()))?;
//!
//! let word = store.save("hello")?;
//! assert_eq!(word.id, 1);
//! assert!(store.exists("hello")?);
//! assert!(store.save("hello").is_err());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordbankError};
use crate::word::{Word, WordId};

pub mod file;
pub mod memory;
pub(crate) mod table;

/// Identifier handed to the first saved word.
pub const FIRST_WORD_ID: WordId = 1;

/// A persistent collection of unique words.
///
/// Implementations are append-only: there is no update or delete.
pub trait WordStore: Send + Sync + fmt::Debug {
    /// Check whether `value` is stored, by exact case-sensitive match.
    fn exists(&self, value: &str) -> Result<bool>;

    /// Persist `value` under a fresh identifier.
    ///
    /// Fails with [`WordbankError::Conflict`] when `value` is already stored.
    /// The uniqueness check and the write happen atomically.
    fn save(&self, value: &str) -> Result<Word>;

    /// Look up a word by identifier. A miss is `Ok(None)`.
    fn find_by_id(&self, id: WordId) -> Result<Option<Word>>;

    /// Number of stored words.
    fn count(&self) -> Result<usize>;

    /// Sync all pending writes to storage.
    fn sync(&self) -> Result<()>;
}

/// Configuration for storage backends.
///
/// Each variant carries the settings of one backend, including the directory
/// for the file store. Serialized with a `"type"` tag:
///
/// ```
/// use wordbank::storage::StorageConfig;
///
/// let config: StorageConfig =
///     serde_json::from_str(r#"{"type": "file", "path": "/var/lib/wordbank"}"#).unwrap();
/// assert!(matches!(config, StorageConfig::File(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StorageConfig {
    /// File-based storage configuration (includes path)
    File(file::FileStorageConfig),

    /// Memory-based storage configuration
    Memory(memory::MemoryStorageConfig),
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::Memory(memory::MemoryStorageConfig::default())
    }
}

/// A factory for creating word stores.
pub struct StorageFactory;

impl StorageFactory {
    /// Create a new store with the given configuration.
    ///
    /// A file store opened on a directory that already holds a log picks up
    /// the words in it.
    pub fn create(config: StorageConfig) -> Result<Arc<dyn WordStore>> {
        match config {
            StorageConfig::Memory(mem_config) => {
                let store = memory::MemoryWordStore::new(mem_config);
                Ok(Arc::new(store))
            }
            StorageConfig::File(file_config) => {
                let store = file::FileWordStore::open(file_config)?;
                Ok(Arc::new(store))
            }
        }
    }

    /// Open an existing store.
    ///
    /// Same as `create`; both replay an existing file log.
    pub fn open(config: StorageConfig) -> Result<Arc<dyn WordStore>> {
        Self::create(config)
    }
}

/// Error types specific to storage operations.
#[derive(Debug, Clone)]
pub enum StorageError {
    /// I/O error.
    IoError(String),

    /// A log record could not be decoded.
    CorruptRecord { line: usize, reason: String },

    /// The identifier space is exhausted.
    IdOverflow,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::IoError(msg) => write!(f, "I/O error: {msg}"),
            StorageError::CorruptRecord { line, reason } => {
                write!(f, "Corrupt record at line {line}: {reason}")
            }
            StorageError::IdOverflow => write!(f, "Word identifiers exhausted"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for WordbankError {
    fn from(err: StorageError) -> Self {
        WordbankError::storage(err.to_string())
    }
}
