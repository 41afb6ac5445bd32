//! Per-word lexical statistics.
//!
//! Every function here is a single pass over the characters of one or two
//! words. Characters are Unicode scalar values; for stored words, which are
//! ASCII, that is the same as the byte length.
//!
//! # Examples
//!
//! ```
//! use wordbank::analysis::text::{TextAnalyzer, similarity_score};
//!
//! let analysis = TextAnalyzer::new().analyze("racecar");
//! assert!(analysis.is_palindrome);
//! assert_eq!(analysis.vowel_count, 3);
//!
//! assert_eq!(similarity_score("cat", "cats"), 75);
//! ```

use std::collections::BTreeMap;

use crate::word::WordAnalysis;

/// Characters counted as vowels. Uppercase vowels are deliberately absent.
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Check whether `word` reads the same in both directions.
///
/// The comparison is case-sensitive: `"Anna"` is not a palindrome. Empty and
/// single-character words are.
pub fn is_palindrome(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();

    (0..len / 2).all(|i| chars[i] == chars[len - 1 - i])
}

/// Count the lowercase vowels `a e i o u` in `word`.
///
/// Uppercase vowels are not counted, so `"AEIOU"` has zero vowels and five
/// consonants.
pub fn count_vowels(word: &str) -> usize {
    word.chars().filter(|c| VOWELS.contains(c)).count()
}

/// Count occurrences of each character after folding to lowercase.
pub fn letter_frequency(word: &str) -> BTreeMap<char, usize> {
    let mut frequency = BTreeMap::new();
    for c in word.chars().flat_map(char::to_lowercase) {
        *frequency.entry(c).or_insert(0) += 1;
    }
    frequency
}

/// Length-based similarity between two words, in `[0, 100]`.
///
/// Defined as `floor((1 - |len1 - len2| / max(len1, len2)) * 100)`, which is
/// `min * 100 / max` in integer arithmetic. Content is ignored: any two words
/// of equal length score 100, and so do two empty words.
pub fn similarity_score(word1: &str, word2: &str) -> u32 {
    let len1 = word1.chars().count();
    let len2 = word2.chars().count();

    let longest = len1.max(len2);
    if longest == 0 {
        return 100;
    }

    let shortest = len1.min(len2);
    (shortest * 100 / longest) as u32
}

/// Builds a [`WordAnalysis`] from the individual statistics.
#[derive(Clone, Debug, Default)]
pub struct TextAnalyzer;

impl TextAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        TextAnalyzer
    }

    /// Compute every statistic for `word`.
    pub fn analyze(&self, word: &str) -> WordAnalysis {
        let total_characters = word.chars().count();
        let vowel_count = count_vowels(word);

        WordAnalysis {
            value: word.to_string(),
            is_palindrome: is_palindrome(word),
            total_characters,
            vowel_count,
            consonant_count: total_characters - vowel_count,
            letter_frequency: letter_frequency(word),
        }
    }

    /// Similarity between two words; see [`similarity_score`].
    pub fn similarity(&self, word1: &str, word2: &str) -> u32 {
        similarity_score(word1, word2)
    }
}
