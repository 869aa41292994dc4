//! studymatch-core: the question-to-module matching engine
//!
//! Pipeline: normalize -> tokenize -> score (per module) -> select.
//! Everything here is pure and synchronous; the knowledge base is borrowed
//! read-only and every query allocates its own scratch data.

pub mod error;
pub mod history;
pub mod knowledge;
pub mod normalize;
pub mod policy;
pub mod score;
pub mod select;
pub mod tokenize;

pub use error::MatchError;
pub use history::{HistoryEntry, QuestionHistory, DEFAULT_HISTORY_LIMIT, NO_MATCH_TITLE};
pub use knowledge::{KnowledgeBase, Module};
pub use normalize::normalize;
pub use policy::{MatchPolicy, DEFAULT_STOP_WORDS};
pub use score::{score, ScoreResult};
pub use select::{confidence, select_best_match, MatchOutcome, MatchResult, Matcher, NoMatchReason};
pub use tokenize::{tokenize, Token};
