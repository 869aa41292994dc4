//! Best-match selection across the knowledge base.

use crate::error::MatchError;
use crate::knowledge::{KnowledgeBase, Module};
use crate::policy::MatchPolicy;
use crate::score::score;
use crate::tokenize::tokenize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub module: &'a Module,
    /// Heuristic 0..=100, not a probability.
    pub confidence: u8,
    pub matched_keywords: Vec<String>,
    pub score: u32,
    pub token_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoMatchReason {
    /// The question had no significant terms left after tokenizing.
    NoSignificantTerms,
    /// Terms were scored but no module reached the threshold.
    BelowThreshold,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<'a> {
    Matched(MatchResult<'a>),
    NoMatch(NoMatchReason),
}

impl<'a> MatchOutcome<'a> {
    pub fn matched(&self) -> Option<&MatchResult<'a>> {
        match self {
            MatchOutcome::Matched(m) => Some(m),
            MatchOutcome::NoMatch(_) => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }
}

/// Stateless matcher configured by a [`MatchPolicy`].
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    policy: MatchPolicy,
}

impl Matcher {
    pub fn new(policy: MatchPolicy) -> Result<Self, MatchError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Pick the single best module for `question`.
    ///
    /// `None` for the knowledge base means it has not finished loading and
    /// yields [`MatchError::NotReady`]. Ties go to the earlier module.
    pub fn select_best_match<'a>(
        &self,
        question: &str,
        knowledge: Option<&'a KnowledgeBase>,
    ) -> Result<MatchOutcome<'a>, MatchError> {
        let knowledge = knowledge.ok_or(MatchError::NotReady)?;

        let tokens = tokenize(question, &self.policy);
        if tokens.is_empty() {
            return Ok(MatchOutcome::NoMatch(NoMatchReason::NoSignificantTerms));
        }

        let mut best: Option<(&'a Module, u32, Vec<String>)> = None;
        let mut highest = 0u32;

        for module in knowledge.iter() {
            let r = score(&tokens, &module.keywords, &self.policy);
            // strictly greater: equal scores keep the incumbent
            if r.score > highest {
                highest = r.score;
                best = Some((module, r.score, r.matched_keywords));
            }
        }

        let Some((module, best_score, matched_keywords)) = best else {
            return Ok(MatchOutcome::NoMatch(NoMatchReason::BelowThreshold));
        };
        if best_score < self.policy.score_threshold {
            return Ok(MatchOutcome::NoMatch(NoMatchReason::BelowThreshold));
        }

        Ok(MatchOutcome::Matched(MatchResult {
            module,
            confidence: confidence(best_score, tokens.len(), self.policy.max_score_per_token),
            matched_keywords,
            score: best_score,
            token_count: tokens.len(),
        }))
    }
}

/// `min(round(score / (tokens * per_token) * 100), 100)`, rounding half up.
///
/// The clamp is reachable: exact-match bonuses stack on substring hits.
pub fn confidence(score: u32, token_count: usize, max_score_per_token: u32) -> u8 {
    let max_possible = token_count as f64 * max_score_per_token as f64;
    if max_possible <= 0.0 {
        return 0;
    }
    let pct = (score as f64 / max_possible * 100.0).round();
    pct.min(100.0) as u8
}

/// [`Matcher::select_best_match`] with the default policy.
pub fn select_best_match<'a>(
    question: &str,
    knowledge: Option<&'a KnowledgeBase>,
) -> Result<MatchOutcome<'a>, MatchError> {
    Matcher::default().select_best_match(question, knowledge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrays_kb() -> KnowledgeBase {
        KnowledgeBase::new(vec![
            Module::new("Arrays")
                .with_keywords(["array", "index", "push", "pop"])
                .with_explanation("Arrays hold ordered values.")
                .with_example("const xs = [1, 2]; xs.push(3);"),
        ])
    }

    #[test]
    fn test_select_push_to_array() {
        let kb = arrays_kb();
        let out = select_best_match("How do I push to an array?", Some(&kb)).unwrap();
        let m = out.matched().expect("should match Arrays");
        assert_eq!(m.module.title, "Arrays");
        assert_eq!(m.matched_keywords, vec!["push", "array"]);
        // score 6 over 2 tokens * 3
        assert_eq!(m.score, 6);
        assert_eq!(m.confidence, 100);
    }

    #[test]
    fn test_select_not_ready() {
        assert_eq!(
            select_best_match("How do I push to an array?", None),
            Err(MatchError::NotReady)
        );
    }

    #[test]
    fn test_select_stop_words_only() {
        let kb = arrays_kb();
        assert_eq!(
            select_best_match("the is a an", Some(&kb)).unwrap(),
            MatchOutcome::NoMatch(NoMatchReason::NoSignificantTerms)
        );
    }

    #[test]
    fn test_select_no_overlap() {
        let kb = arrays_kb();
        assert_eq!(
            select_best_match("zzz qqq www", Some(&kb)).unwrap(),
            MatchOutcome::NoMatch(NoMatchReason::BelowThreshold)
        );
    }

    #[test]
    fn test_select_empty_knowledge_base() {
        let kb = KnowledgeBase::default();
        assert_eq!(
            select_best_match("array push", Some(&kb)).unwrap(),
            MatchOutcome::NoMatch(NoMatchReason::BelowThreshold)
        );
    }

    #[test]
    fn test_select_tie_goes_to_earlier_module() {
        let kb = KnowledgeBase::new(vec![
            Module::new("First").with_keywords(["loop"]),
            Module::new("Second").with_keywords(["loop"]),
        ]);
        let out = select_best_match("loop", Some(&kb)).unwrap();
        assert_eq!(out.matched().unwrap().module.title, "First");
    }

    #[test]
    fn test_select_higher_later_module_wins() {
        let kb = KnowledgeBase::new(vec![
            Module::new("Functions").with_keywords(["function"]),
            Module::new("Async").with_keywords(["promise", "async", "await"]),
        ]);
        let out = select_best_match("async function returning a promise", Some(&kb)).unwrap();
        let m = out.matched().unwrap();
        assert_eq!(m.module.title, "Async");
        assert_eq!(m.matched_keywords, vec!["async", "promise"]);
    }

    #[test]
    fn test_select_threshold_from_policy() {
        let kb = arrays_kb();
        let strict = Matcher::new(MatchPolicy {
            score_threshold: 10,
            ..MatchPolicy::default()
        })
        .unwrap();
        assert_eq!(
            strict.select_best_match("push array", Some(&kb)).unwrap(),
            MatchOutcome::NoMatch(NoMatchReason::BelowThreshold)
        );
    }

    #[test]
    fn test_select_with_huge_exact_weight_clamps_confidence() {
        let kb = arrays_kb();
        let m = Matcher::new(MatchPolicy {
            exact_match_weight: u32::MAX,
            ..MatchPolicy::default()
        })
        .unwrap();
        let out = m.select_best_match("array array", Some(&kb)).unwrap();
        let r = out.matched().unwrap();
        assert_eq!(r.score, u32::MAX);
        assert_eq!(r.confidence, 100);
    }

    #[test]
    fn test_confidence_rounding_and_clamp() {
        // 1 / 6 * 100 = 16.67
        assert_eq!(confidence(1, 2, 3), 17);
        // 3 / 24 * 100 = 12.5 rounds up
        assert_eq!(confidence(3, 8, 3), 13);
        // 6 / 3 * 100 = 200 -> clamped
        assert_eq!(confidence(6, 1, 3), 100);
        assert_eq!(confidence(0, 4, 3), 0);
        assert_eq!(confidence(5, 0, 3), 0);
    }
}
