//! Question tokenization.

use crate::normalize::normalize;
use crate::policy::MatchPolicy;

/// A normalized, significant query term.
pub type Token = String;

/// Split `text` into significant terms.
///
/// Order and duplicates are preserved. An empty result is a normal outcome
/// (empty input, or nothing but stop words and short words).
pub fn tokenize(text: &str, policy: &MatchPolicy) -> Vec<Token> {
    normalize(text)
        .split(' ')
        .filter(|t| t.len() > policy.min_token_len && !policy.is_stop_word(t))
        .map(|t| t.to_string())
        .collect()
}
