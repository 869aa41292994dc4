//! Caller-owned state: the loaded course data and the question log.
//!
//! The matcher stays stateless; everything that lives across questions is
//! held here and passed in explicitly.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use studymatch_core::{
    HistoryEntry, KnowledgeBase, MatchError, MatchOutcome, Matcher, NoMatchReason,
    QuestionHistory,
};
use tracing::{debug, info};

use crate::state;

/// What to show the user for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Blank input; nothing was matched or recorded.
    EmptyQuestion,
    /// Course data is not available; nothing was recorded.
    NotReady,
    NoMatch(NoMatchReason),
    Answer(Answer),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub title: String,
    pub explanation: String,
    pub example: String,
    pub confidence: u8,
    pub matched_keywords: Vec<String>,
}

impl Reply {
    fn from_outcome(outcome: &MatchOutcome<'_>) -> Self {
        match outcome {
            MatchOutcome::Matched(m) => Reply::Answer(Answer {
                title: m.module.title.clone(),
                explanation: m.module.explanation.clone(),
                example: m.module.example.clone(),
                confidence: m.confidence,
                matched_keywords: m.matched_keywords.clone(),
            }),
            MatchOutcome::NoMatch(reason) => Reply::NoMatch(*reason),
        }
    }
}

pub struct Session {
    knowledge: Option<KnowledgeBase>,
    history: QuestionHistory,
    matcher: Matcher,
    history_file: Option<PathBuf>,
}

impl Session {
    pub fn new(knowledge: Option<KnowledgeBase>, history: QuestionHistory, matcher: Matcher) -> Self {
        Self {
            knowledge,
            history,
            matcher,
            history_file: None,
        }
    }

    /// Persist the history to `path` after every change.
    pub fn with_history_file(mut self, path: PathBuf) -> Self {
        self.history_file = Some(path);
        self
    }

    pub fn knowledge(&self) -> Option<&KnowledgeBase> {
        self.knowledge.as_ref()
    }

    pub fn history(&self) -> &QuestionHistory {
        &self.history
    }

    pub fn ask(&mut self, question: &str, now: DateTime<Utc>) -> Result<Reply> {
        let question = question.trim();
        if question.is_empty() {
            return Ok(Reply::EmptyQuestion);
        }

        let (reply, entry) = match self
            .matcher
            .select_best_match(question, self.knowledge.as_ref())
        {
            Ok(outcome) => {
                match &outcome {
                    MatchOutcome::Matched(m) => debug!(
                        module = %m.module.title,
                        score = m.score,
                        tokens = m.token_count,
                        confidence = m.confidence,
                        "matched question"
                    ),
                    MatchOutcome::NoMatch(reason) => debug!(?reason, "no module matched"),
                }
                (
                    Reply::from_outcome(&outcome),
                    HistoryEntry::from_outcome(question, &outcome, now),
                )
            }
            Err(MatchError::NotReady) => {
                info!("question asked before course data was available");
                return Ok(Reply::NotReady);
            }
            Err(e) => return Err(e.into()),
        };

        self.history.push(entry);
        self.persist()?;
        Ok(reply)
    }

    /// Ask the question stored at `index` (0 = newest) again.
    pub fn rerun(&mut self, index: usize, now: DateTime<Utc>) -> Result<Reply> {
        let question = self
            .history
            .get(index)
            .map(|e| e.question.clone())
            .with_context(|| format!("no history entry #{}", index + 1))?;
        self.ask(&question, now)
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear();
        if let Some(p) = &self.history_file {
            state::remove_history(p)?;
        }
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        if let Some(p) = &self.history_file {
            state::write_history(p, &self.history)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use studymatch_core::{MatchPolicy, Module, NO_MATCH_TITLE};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap()
    }

    fn arrays_session() -> Session {
        let kb = KnowledgeBase::new(vec![Module::new("Arrays")
            .with_keywords(["array", "index", "push", "pop"])
            .with_explanation("Ordered lists.")
            .with_example("xs.push(1)")]);
        Session::new(Some(kb), QuestionHistory::default(), Matcher::default())
    }

    #[test]
    fn test_ask_records_match() {
        let mut s = arrays_session();
        let reply = s.ask("  How do I push to an array?  ", now()).unwrap();
        let Reply::Answer(a) = reply else {
            panic!("expected answer, got {reply:?}");
        };
        assert_eq!(a.title, "Arrays");
        assert_eq!(a.matched_keywords, vec!["push", "array"]);

        let e = &s.history().entries()[0];
        assert_eq!(e.question, "How do I push to an array?");
        assert_eq!(e.module_title, "Arrays");
        assert_eq!(e.confidence, a.confidence);
    }

    #[test]
    fn test_no_match_is_recorded_with_sentinel() {
        let mut s = arrays_session();
        let reply = s.ask("zzz qqq www", now()).unwrap();
        assert_eq!(reply, Reply::NoMatch(NoMatchReason::BelowThreshold));
        let e = &s.history().entries()[0];
        assert_eq!(e.module_title, NO_MATCH_TITLE);
        assert_eq!(e.confidence, 0);
    }

    #[test]
    fn test_not_ready_and_blank_are_not_recorded() {
        let mut s = Session::new(None, QuestionHistory::default(), Matcher::default());
        assert_eq!(s.ask("array push", now()).unwrap(), Reply::NotReady);
        assert_eq!(s.ask("   ", now()).unwrap(), Reply::EmptyQuestion);
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_history_is_bounded_and_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut s = arrays_session().with_history_file(path.clone());

        for i in 0..11 {
            s.ask(&format!("array {i}"), now() + Duration::seconds(i)).unwrap();
        }
        assert_eq!(s.history().len(), 10);
        assert_eq!(s.history().entries()[0].question, "array 10");

        let on_disk = state::read_history(&path, 10).unwrap();
        assert_eq!(&on_disk, s.history());

        s.clear_history().unwrap();
        assert!(s.history().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_rerun_asks_again() {
        let mut s = arrays_session();
        s.ask("pop from array", now()).unwrap();
        s.ask("zzz", now()).unwrap();
        let reply = s.rerun(1, now() + Duration::minutes(1)).unwrap();
        assert!(matches!(reply, Reply::Answer(_)));
        assert_eq!(s.history().len(), 3);
        assert_eq!(s.history().entries()[0].question, "pop from array");
        assert!(s.rerun(7, now()).is_err());
    }

    #[test]
    fn test_session_uses_configured_policy() {
        let kb = KnowledgeBase::new(vec![Module::new("Arrays").with_keywords(["array"])]);
        let matcher = Matcher::new(MatchPolicy::default().with_extra_stop_words(["array"])).unwrap();
        let mut s = Session::new(Some(kb), QuestionHistory::default(), matcher);
        assert_eq!(
            s.ask("array", now()).unwrap(),
            Reply::NoMatch(NoMatchReason::NoSignificantTerms)
        );
    }
}
