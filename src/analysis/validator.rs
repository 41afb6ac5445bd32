//! Format and length rules for submitted words.
//!
//! The checks are split in two because word creation interleaves them with
//! the duplicate lookup: length bounds first, then the store, then format.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::{Result, WordbankError};
use crate::word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};

/// Pattern a stored word must match in full.
const ALPHABETIC_PATTERN: &str = r"^[a-zA-Z]+$";

/// Outcome of validating a candidate word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The word passes the checks that were run.
    Valid,

    /// No characters at all.
    Empty,

    /// Fewer characters than the configured minimum.
    TooShort { length: usize, min: usize },

    /// More characters than the configured maximum.
    TooLong { length: usize, max: usize },

    /// Contains a whitespace character.
    ContainsWhitespace,

    /// Contains a character outside `[a-zA-Z]`.
    NotAlphabetic { found: char },
}

impl ValidationOutcome {
    /// Whether the outcome is [`ValidationOutcome::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Convert into a result, rejecting with [`WordbankError::InvalidWord`].
    pub fn into_result(self) -> Result<()> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            rejected => Err(WordbankError::invalid_word(rejected.to_string())),
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationOutcome::Valid => write!(f, "valid"),
            ValidationOutcome::Empty => write!(f, "is empty"),
            ValidationOutcome::TooShort { length, min } => {
                write!(f, "length {length} is below the minimum of {min}")
            }
            ValidationOutcome::TooLong { length, max } => {
                write!(f, "length {length} exceeds the maximum of {max}")
            }
            ValidationOutcome::ContainsWhitespace => write!(f, "contains whitespace"),
            ValidationOutcome::NotAlphabetic { found } => {
                write!(f, "contains non-alphabetic character {found:?}")
            }
        }
    }
}

/// Validates candidate words against length bounds and the alphabetic pattern.
#[derive(Clone, Debug)]
pub struct WordValidator {
    pattern: Arc<Regex>,
    min_length: usize,
    max_length: usize,
}

impl WordValidator {
    /// Create a validator with the default bounds of 1 to 100 characters.
    pub fn new() -> Result<Self> {
        Self::with_bounds(MIN_WORD_LENGTH, MAX_WORD_LENGTH)
    }

    /// Create a validator with custom length bounds.
    pub fn with_bounds(min_length: usize, max_length: usize) -> Result<Self> {
        if min_length == 0 || max_length < min_length {
            return Err(WordbankError::config(format!(
                "Invalid word length bounds: {min_length}..={max_length}"
            )));
        }

        let pattern = Regex::new(ALPHABETIC_PATTERN)
            .map_err(|e| WordbankError::config(format!("Invalid word pattern: {e}")))?;

        Ok(WordValidator {
            pattern: Arc::new(pattern),
            min_length,
            max_length,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Check the length bounds only.
    pub fn check_length(&self, value: &str) -> ValidationOutcome {
        let length = value.chars().count();
        if length < self.min_length {
            ValidationOutcome::TooShort {
                length,
                min: self.min_length,
            }
        } else if length > self.max_length {
            ValidationOutcome::TooLong {
                length,
                max: self.max_length,
            }
        } else {
            ValidationOutcome::Valid
        }
    }

    /// Check the format only: no whitespace, one or more ASCII letters.
    pub fn check_format(&self, value: &str) -> ValidationOutcome {
        if value.is_empty() {
            return ValidationOutcome::Empty;
        }
        if value.chars().any(char::is_whitespace) {
            return ValidationOutcome::ContainsWhitespace;
        }

        if self.pattern.is_match(value) {
            return ValidationOutcome::Valid;
        }

        let found = value
            .chars()
            .find(|c| !c.is_ascii_alphabetic())
            .unwrap_or_default();
        ValidationOutcome::NotAlphabetic { found }
    }

    /// Run both checks, length first.
    pub fn validate(&self, value: &str) -> ValidationOutcome {
        match self.check_length(value) {
            ValidationOutcome::Valid => self.check_format(value),
            rejected => rejected,
        }
    }
}
