//! Text analysis for stored words.
//!
//! [`text`] holds the per-word statistics and the similarity score,
//! [`validator`] the rules a word must satisfy before it is stored.

pub mod text;
pub mod validator;

pub use text::{TextAnalyzer, count_vowels, is_palindrome, letter_frequency, similarity_score};
pub use validator::{ValidationOutcome, WordValidator};
