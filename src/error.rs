//! Error types for the wordbank library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`WordbankError`] enum. The business outcomes a caller is expected to
//! handle (`InvalidWord`, `DuplicateWord`, `NotFound`) are ordinary variants
//! next to the infrastructure failures, and [`WordbankError::kind`] gives the
//! request layer a fieldless tag to map onto its own status codes.
//!
//! # Examples
//!
//! ```
//! use wordbank::error::{ErrorKind, WordbankError, Result};
//!
//! fn lookup() -> Result<()> {
//!     Err(WordbankError::not_found("word 42 does not exist"))
//! }
//!
//! match lookup() {
//!     Err(e) => assert_eq!(e.kind(), ErrorKind::NotFound),
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wordbank operations.
#[derive(Error, Debug)]
pub enum WordbankError {
    /// The submitted value breaks the format or length rules.
    #[error("Invalid word: {0}")]
    InvalidWord(String),

    /// The submitted value is already stored.
    #[error("Duplicate word: {0}")]
    DuplicateWord(String),

    /// A referenced identifier does not resolve to a stored word.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The store refused a save because the value is already present.
    ///
    /// Only raised by the storage layer; the service reports it as
    /// [`WordbankError::DuplicateWord`].
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with WordbankError.
pub type Result<T> = std::result::Result<T, WordbankError>;

/// Fieldless classification of a [`WordbankError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidWord,
    DuplicateWord,
    NotFound,
    Conflict,
    Storage,
    Config,
    Io,
}

impl WordbankError {
    /// Create a new invalid word error.
    pub fn invalid_word<S: Into<String>>(msg: S) -> Self {
        WordbankError::InvalidWord(msg.into())
    }

    /// Create a new duplicate word error.
    pub fn duplicate_word<S: Into<String>>(value: S) -> Self {
        WordbankError::DuplicateWord(value.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        WordbankError::NotFound(msg.into())
    }

    /// Create a new conflict error.
    pub fn conflict<S: Into<String>>(value: S) -> Self {
        WordbankError::Conflict(value.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        WordbankError::Storage(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WordbankError::Config(msg.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WordbankError::InvalidWord(_) => ErrorKind::InvalidWord,
            WordbankError::DuplicateWord(_) => ErrorKind::DuplicateWord,
            WordbankError::NotFound(_) => ErrorKind::NotFound,
            WordbankError::Conflict(_) => ErrorKind::Conflict,
            WordbankError::Storage(_) | WordbankError::Json(_) => ErrorKind::Storage,
            WordbankError::Config(_) => ErrorKind::Config,
            WordbankError::Io(_) => ErrorKind::Io,
        }
    }

    /// Whether the caller can recover by resubmitting different input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidWord | ErrorKind::DuplicateWord | ErrorKind::NotFound
        )
    }
}
