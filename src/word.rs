//! Word records and the views derived from them.
//!
//! A [`Word`] is the only persisted entity. [`WordAnalysis`] and
//! [`SimilarityResult`] are computed on demand and never stored.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store when a word is saved.
pub type WordId = u64;

/// Shortest accepted word, in characters.
pub const MIN_WORD_LENGTH: usize = 1;

/// Longest accepted word, in characters.
pub const MAX_WORD_LENGTH: usize = 100;

/// A stored word.
///
/// Both fields are fixed once the store hands the record out; there is no
/// update path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    /// Unique identifier, never reused.
    pub id: WordId,

    /// Unique alphabetic value.
    pub value: String,
}

impl Word {
    /// Create a word record.
    pub fn new<S: Into<String>>(id: WordId, value: S) -> Self {
        Word {
            id,
            value: value.into(),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.value)
    }
}

/// Lexical statistics for a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAnalysis {
    /// The analysed value.
    #[serde(rename = "word")]
    pub value: String,

    pub is_palindrome: bool,

    pub total_characters: usize,

    /// Lowercase `a e i o u` only.
    pub vowel_count: usize,

    /// `total_characters - vowel_count`.
    pub consonant_count: usize,

    /// Occurrences per lowercase character.
    pub letter_frequency: BTreeMap<char, usize>,
}

/// Two words and their length-based similarity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    pub first_word: String,
    pub second_word: String,

    /// Integer in `[0, 100]`.
    pub score: u32,
}
