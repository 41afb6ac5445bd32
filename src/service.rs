//! Word creation, lookup and comparison.
//!
//! [`WordService`] ties the validator, the store and the analyzer together.
//! It holds no state of its own beyond a handle to the store, so every call is
//! independent and view/score calls are read-only.
//!
//! # Example
//!
//! ```
//! use wordbank::error::ErrorKind;
//! use wordbank::service::WordService;
//! use wordbank::storage::memory::MemoryWordStore;
//! use std::sync::Arc;
//!
//! # fn main() -> wordbank::error::Result<()> {
//! let service = WordService::new(Arc::new(MemoryWordStore::new_default()))?;
//!
//! let racecar = service.create_word("racecar")?;
//! let analysis = service.view_word(racecar.id)?;
//! assert!(analysis.is_palindrome);
//!
//! let err = service.create_word("racecar").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::DuplicateWord);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::{debug, info, warn};

use crate::analysis::text::TextAnalyzer;
use crate::analysis::validator::{ValidationOutcome, WordValidator};
use crate::config::WordbankConfig;
use crate::error::{Result, WordbankError};
use crate::storage::{StorageFactory, WordStore};
use crate::word::{SimilarityResult, Word, WordAnalysis, WordId};

/// Orchestrates validation, storage and analysis of words.
#[derive(Debug, Clone)]
pub struct WordService {
    store: Arc<dyn WordStore>,
    validator: WordValidator,
    analyzer: TextAnalyzer,
}

impl WordService {
    /// Create a service over `store` with the default length bounds.
    pub fn new(store: Arc<dyn WordStore>) -> Result<Self> {
        Ok(Self::with_validator(store, WordValidator::new()?))
    }

    /// Create a service over `store` using the length bounds in `config`.
    ///
    /// The storage section of `config` is ignored; see [`WordService::from_config`].
    pub fn with_config(store: Arc<dyn WordStore>, config: &WordbankConfig) -> Result<Self> {
        config.validate()?;
        let validator = WordValidator::with_bounds(config.min_word_length, config.max_word_length)?;
        Ok(Self::with_validator(store, validator))
    }

    /// Build the store described by `config` and a service over it.
    pub fn from_config(config: &WordbankConfig) -> Result<Self> {
        config.validate()?;
        let store = StorageFactory::create(config.storage.clone())?;
        Self::with_config(store, config)
    }

    fn with_validator(store: Arc<dyn WordStore>, validator: WordValidator) -> Self {
        WordService {
            store,
            validator,
            analyzer: TextAnalyzer::new(),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn WordStore> {
        &self.store
    }

    /// Validate and store a new word.
    ///
    /// Checks run in this order: length bounds, duplicate lookup, format. An
    /// already stored value is therefore reported as
    /// [`WordbankError::DuplicateWord`] before its format is looked at. A save
    /// that loses a race against a concurrent create of the same value is
    /// reported the same way.
    pub fn create_word(&self, raw_value: &str) -> Result<Word> {
        self.reject_if_invalid(raw_value, self.validator.check_length(raw_value))?;

        if self.store.exists(raw_value)? {
            debug!("Rejected duplicate word {raw_value:?}");
            return Err(WordbankError::duplicate_word(raw_value));
        }

        self.reject_if_invalid(raw_value, self.validator.check_format(raw_value))?;

        match self.store.save(raw_value) {
            Ok(word) => {
                info!("Created word {word}");
                Ok(word)
            }
            Err(WordbankError::Conflict(value)) => {
                warn!("Concurrent create of {value:?} lost the uniqueness check");
                Err(WordbankError::DuplicateWord(value))
            }
            Err(e) => Err(e),
        }
    }

    /// Look up a word and compute its statistics.
    pub fn view_word(&self, id: WordId) -> Result<WordAnalysis> {
        let word = self.store.find_by_id(id)?.ok_or_else(|| {
            debug!("No word with id {id}");
            WordbankError::not_found(format!("word {id} does not exist"))
        })?;

        Ok(self.analyzer.analyze(&word.value))
    }

    /// Look up two words and score their similarity.
    ///
    /// If either id is missing the error does not say which one.
    pub fn score_words(&self, first_id: WordId, second_id: WordId) -> Result<SimilarityResult> {
        let first = self.store.find_by_id(first_id)?;
        let second = self.store.find_by_id(second_id)?;

        let (first, second) = match (first, second) {
            (Some(first), Some(second)) => (first, second),
            _ => {
                debug!("Score lookup failed for ids {first_id} and {second_id}");
                return Err(WordbankError::not_found("one or both words do not exist"));
            }
        };

        let score = self.analyzer.similarity(&first.value, &second.value);
        Ok(SimilarityResult {
            first_word: first.value,
            second_word: second.value,
            score,
        })
    }

    fn reject_if_invalid(&self, raw_value: &str, outcome: ValidationOutcome) -> Result<()> {
        if !outcome.is_valid() {
            debug!("Rejected invalid word {raw_value:?}: {outcome}");
        }
        outcome.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::storage::memory::MemoryWordStore;

    fn service() -> WordService {
        WordService::new(Arc::new(MemoryWordStore::new_default())).unwrap()
    }

    /// A store whose `exists` always misses, so the backstop in `save` is hit.
    #[derive(Debug, Default)]
    struct BlindStore {
        inner: MemoryWordStore,
    }

    impl WordStore for BlindStore {
        fn exists(&self, _value: &str) -> Result<bool> {
            Ok(false)
        }

        fn save(&self, value: &str) -> Result<Word> {
            self.inner.save(value)
        }

        fn find_by_id(&self, id: WordId) -> Result<Option<Word>> {
            self.inner.find_by_id(id)
        }

        fn count(&self) -> Result<usize> {
            self.inner.count()
        }

        fn sync(&self) -> Result<()> {
            self.inner.sync()
        }
    }

    #[test]
    fn test_create_word() {
        let service = service();

        let word = service.create_word("hello").unwrap();
        assert_eq!(word, Word::new(1, "hello"));
        assert_eq!(service.store().count().unwrap(), 1);
    }

    #[test]
    fn test_create_duplicate() {
        let service = service();
        service.create_word("hello").unwrap();

        let err = service.create_word("hello").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateWord);
        assert_eq!(service.store().count().unwrap(), 1);
    }

    #[test]
    fn test_create_invalid() {
        let service = service();
        let too_long = "a".repeat(101);

        for value in ["hi there", "abc123", "", "café", "x-ray", too_long.as_str()] {
            let err = service.create_word(value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidWord, "value: {value:?}");
        }
        assert_eq!(service.store().count().unwrap(), 0);
    }

    #[test]
    fn test_duplicate_checked_before_format() {
        // Seed the store directly with a value the validator would reject.
        let store = Arc::new(MemoryWordStore::new_default());
        store.save("abc123").unwrap();
        let service = WordService::new(store).unwrap();

        let err = service.create_word("abc123").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateWord);
    }

    #[test]
    fn test_conflict_maps_to_duplicate() {
        let service = WordService::new(Arc::new(BlindStore::default())).unwrap();
        service.create_word("hello").unwrap();

        let err = service.create_word("hello").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateWord);
        assert_eq!(err.to_string(), "Duplicate word: hello");
    }

    #[test]
    fn test_view_word() {
        let service = service();
        let word = service.create_word("racecar").unwrap();

        let analysis = service.view_word(word.id).unwrap();
        assert_eq!(analysis.value, "racecar");
        assert!(analysis.is_palindrome);
        assert_eq!(analysis.total_characters, 7);
        assert_eq!(analysis.vowel_count, 3);
        assert_eq!(analysis.consonant_count, 4);
        assert_eq!(analysis.letter_frequency.get(&'r'), Some(&2));
    }

    #[test]
    fn test_view_missing_word() {
        let err = service().view_word(42).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_score_words() {
        let service = service();
        let cat = service.create_word("cat").unwrap();
        let cats = service.create_word("cats").unwrap();

        let result = service.score_words(cat.id, cats.id).unwrap();
        assert_eq!(result.first_word, "cat");
        assert_eq!(result.second_word, "cats");
        assert_eq!(result.score, 75);

        let result = service.score_words(cat.id, cat.id).unwrap();
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_score_missing_word_is_undifferentiated() {
        let service = service();
        let cat = service.create_word("cat").unwrap();

        let first_missing = service.score_words(99, cat.id).unwrap_err();
        let second_missing = service.score_words(cat.id, 99).unwrap_err();
        let both_missing = service.score_words(98, 99).unwrap_err();

        assert_eq!(first_missing.kind(), ErrorKind::NotFound);
        assert_eq!(first_missing.to_string(), second_missing.to_string());
        assert_eq!(second_missing.to_string(), both_missing.to_string());
    }

    #[test]
    fn test_with_config_bounds() {
        let config = WordbankConfig {
            max_word_length: 5,
            ..WordbankConfig::default()
        };
        let service =
            WordService::with_config(Arc::new(MemoryWordStore::new_default()), &config).unwrap();

        assert!(service.create_word("short").is_ok());
        let err = service.create_word("toolong").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidWord);
    }

    #[test]
    fn test_from_config_rejects_bad_bounds() {
        let config = WordbankConfig {
            min_word_length: 0,
            ..WordbankConfig::default()
        };
        let err = WordService::from_config(&config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
