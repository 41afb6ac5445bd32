//! Top-level configuration.
//!
//! ```
//! use wordbank::config::WordbankConfig;
//! use wordbank::storage::StorageConfig;
//!
//! let config = WordbankConfig::from_json_str(
//!     r#"{"storage": {"type": "file", "path": "/var/lib/wordbank"}, "max_word_length": 50}"#,
//! )
//! .unwrap();
//!
//! assert!(matches!(config.storage, StorageConfig::File(_)));
//! assert_eq!(config.min_word_length, 1);
//! assert_eq!(config.max_word_length, 50);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordbankError};
use crate::storage::StorageConfig;
use crate::word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};

/// Settings for a [`WordService`](crate::service::WordService) and its store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordbankConfig {
    /// Storage backend.
    pub storage: StorageConfig,

    /// Shortest accepted word.
    pub min_word_length: usize,

    /// Longest accepted word.
    pub max_word_length: usize,
}

impl Default for WordbankConfig {
    fn default() -> Self {
        WordbankConfig {
            storage: StorageConfig::default(),
            min_word_length: MIN_WORD_LENGTH,
            max_word_length: MAX_WORD_LENGTH,
        }
    }
}

impl WordbankConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: WordbankConfig = serde_json::from_str(json)
            .map_err(|e| WordbankError::config(format!("Failed to parse configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            WordbankError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Check that the length bounds make sense.
    pub fn validate(&self) -> Result<()> {
        if self.min_word_length == 0 {
            return Err(WordbankError::config("min_word_length must be at least 1"));
        }
        if self.max_word_length < self.min_word_length {
            return Err(WordbankError::config(format!(
                "max_word_length ({}) is smaller than min_word_length ({})",
                self.max_word_length, self.min_word_length
            )));
        }
        Ok(())
    }
}
