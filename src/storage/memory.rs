//! In-memory word store for testing and temporary data.

use log::debug;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::WordStore;
use crate::storage::table::WordTable;
use crate::word::{Word, WordId};

/// Configuration for memory storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryStorageConfig {
    /// Number of words to reserve room for up front.
    pub initial_capacity: usize,
}

impl Default for MemoryStorageConfig {
    fn default() -> Self {
        MemoryStorageConfig {
            initial_capacity: 16,
        }
    }
}

/// An in-memory word store.
///
/// A single write lock covers the uniqueness check and the insert, so two
/// concurrent saves of the same value cannot both succeed.
#[derive(Debug)]
pub struct MemoryWordStore {
    table: RwLock<WordTable>,
}

impl MemoryWordStore {
    /// Create a new memory store.
    pub fn new(config: MemoryStorageConfig) -> Self {
        MemoryWordStore {
            table: RwLock::new(WordTable::with_capacity(config.initial_capacity)),
        }
    }

    /// Create a new memory store with default configuration.
    pub fn new_default() -> Self {
        Self::new(MemoryStorageConfig::default())
    }
}

impl Default for MemoryWordStore {
    fn default() -> Self {
        Self::new_default()
    }
}

impl WordStore for MemoryWordStore {
    fn exists(&self, value: &str) -> Result<bool> {
        Ok(self.table.read().contains_value(value))
    }

    fn save(&self, value: &str) -> Result<Word> {
        let mut table = self.table.write();
        let word = table.prepare(value)?;
        table.insert(word.clone())?;

        debug!("Saved word {} in memory", word);
        Ok(word)
    }

    fn find_by_id(&self, id: WordId) -> Result<Option<Word>> {
        Ok(self.table.read().get(id).cloned())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.table.read().len())
    }

    fn sync(&self) -> Result<()> {
        // For memory storage, sync is a no-op
        Ok(())
    }
}
