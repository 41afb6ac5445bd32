//! # Wordbank
//!
//! A small word store with per-word lexical statistics and length-based
//! similarity scoring.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Strict validation of submitted words
//! - Pluggable storage backends with enforced value uniqueness
//! - Palindrome, vowel and letter-frequency statistics
//! - Length-based similarity scoring

pub mod analysis;
pub mod config;
pub mod error;
pub mod service;
pub mod storage;
pub mod word;

pub mod prelude {
    pub use crate::analysis::{TextAnalyzer, ValidationOutcome, WordValidator};
    pub use crate::config::WordbankConfig;
    pub use crate::error::{ErrorKind, Result, WordbankError};
    pub use crate::service::WordService;
    pub use crate::storage::{StorageConfig, StorageFactory, WordStore};
    pub use crate::word::{SimilarityResult, Word, WordAnalysis, WordId};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
