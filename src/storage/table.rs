//! Id and value indexes behind every word store.

use ahash::AHashMap;

use crate::error::{Result, WordbankError};
use crate::storage::{FIRST_WORD_ID, StorageError};
use crate::word::{Word, WordId};

/// Words indexed by id and by value.
///
/// Not synchronized; stores keep it behind a lock and hold the write side
/// across [`WordTable::prepare`] and [`WordTable::insert`].
#[derive(Debug)]
pub(crate) struct WordTable {
    by_id: AHashMap<WordId, Word>,
    by_value: AHashMap<String, WordId>,
    next_id: WordId,
}

impl WordTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        WordTable {
            by_id: AHashMap::with_capacity(capacity),
            by_value: AHashMap::with_capacity(capacity),
            next_id: FIRST_WORD_ID,
        }
    }

    pub(crate) fn contains_value(&self, value: &str) -> bool {
        self.by_value.contains_key(value)
    }

    pub(crate) fn get(&self, id: WordId) -> Option<&Word> {
        self.by_id.get(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Build the record the next insert would store, or fail on a taken value.
    pub(crate) fn prepare(&self, value: &str) -> Result<Word> {
        if self.contains_value(value) {
            return Err(WordbankError::conflict(value));
        }
        Ok(Word::new(self.next_id, value))
    }

    /// Insert a record with a caller-chosen id, as when replaying a log.
    pub(crate) fn insert(&mut self, word: Word) -> Result<()> {
        if self.by_id.contains_key(&word.id) {
            return Err(WordbankError::storage(format!(
                "Duplicate word id: {}",
                word.id
            )));
        }
        if self.contains_value(&word.value) {
            return Err(WordbankError::conflict(word.value));
        }

        let next_id = word.id.checked_add(1).ok_or(StorageError::IdOverflow)?;
        self.next_id = self.next_id.max(next_id);
        self.by_value.insert(word.value.clone(), word.id);
        self.by_id.insert(word.id, word);
        Ok(())
    }
}
