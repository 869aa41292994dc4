//! Tunable matching constants.
//!
//! The matcher's shape (normalize, tokenize, score, select) is fixed; the
//! numbers and the stop-word list live here so they can be changed from
//! config without touching the algorithm.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::MatchError;

/// Common English function words plus a few verbs that carry no topic.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "should",
    "could", "can", "may", "might", "must", "shall", "i", "you", "he",
    "she", "it", "we", "they", "what", "which", "who", "when", "where",
    "why", "how", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "about", "into", "through", "during", "before", "after",
    "above", "below", "between", "under", "over", "out", "up", "down",
    "and", "or", "but", "if", "then", "else", "this", "that", "these",
    "those", "my", "your", "his", "her", "its", "our", "their", "me",
    "him", "us", "them", "get", "use", "using", "used", "work",
];

pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;
pub const DEFAULT_SCORE_THRESHOLD: u32 = 1;
pub const DEFAULT_EXACT_MATCH_WEIGHT: u32 = 2;
pub const DEFAULT_MAX_SCORE_PER_TOKEN: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPolicy {
    /// Tokens must be strictly longer than this (in bytes of normalized text).
    pub min_token_len: usize,
    /// Lowest best score that still counts as a match.
    pub score_threshold: u32,
    /// Points added per query token that equals a normalized keyword.
    pub exact_match_weight: u32,
    /// Confidence denominator: `token_count * max_score_per_token`.
    pub max_score_per_token: u32,
    pub stop_words: HashSet<String>,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            exact_match_weight: DEFAULT_EXACT_MATCH_WEIGHT,
            max_score_per_token: DEFAULT_MAX_SCORE_PER_TOKEN,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl MatchPolicy {
    /// Add stop words on top of the current set. Words are lower-cased.
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for w in words {
            let w = w.as_ref().trim().to_lowercase();
            if !w.is_empty() {
                self.stop_words.insert(w);
            }
        }
        self
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.max_score_per_token == 0 {
            return Err(MatchError::InvalidPolicy(
                "max_score_per_token must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
