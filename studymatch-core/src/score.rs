//! Keyword scoring of a token sequence against one module.
//!
//! Scoring:
//! - +1 for every (token, keyword) pair where either contains the other
//! - +`exact_match_weight` for every token equal to some normalized keyword
//!
//! A token can earn both, so a short precise question may score above
//! `max_score_per_token` per token. The selector clamps confidence for that.

use std::collections::HashSet;

use crate::normalize::normalize;
use crate::policy::MatchPolicy;
use crate::tokenize::Token;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u32,
    /// Original keyword strings in first-match order, without duplicates.
    pub matched_keywords: Vec<String>,
}

pub fn score(tokens: &[Token], keywords: &[String], policy: &MatchPolicy) -> ScoreResult {
    if tokens.is_empty() || keywords.is_empty() {
        return ScoreResult::default();
    }

    // index-aligned with `keywords`
    let normalized: Vec<String> = keywords.iter().map(|k| normalize(k)).collect();

    let mut result = ScoreResult::default();
    for token in tokens {
        for (original, kw) in keywords.iter().zip(&normalized) {
            if kw.contains(token.as_str()) || token.contains(kw.as_str()) {
                result.score = result.score.saturating_add(1);
                if !result.matched_keywords.contains(original) {
                    result.matched_keywords.push(original.clone());
                }
            }
        }
    }

    let exact_set: HashSet<&str> = normalized.iter().map(String::as_str).collect();
    let exact = tokens.iter().filter(|t| exact_set.contains(t.as_str())).count() as u32;
    // weight is user-configurable
    result.score = result
        .score
        .saturating_add(exact.saturating_mul(policy.exact_match_weight));

    result
}
