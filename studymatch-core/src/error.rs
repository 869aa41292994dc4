//! Matcher errors.
//!
//! "No relevant module" is not an error; see [`crate::select::MatchOutcome`].

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The knowledge base has not been loaded yet. Callers should ask the
    /// user to retry and must not log this as a failed match.
    #[error("Course data is still loading. Please try again in a moment.")]
    NotReady,

    #[error("invalid match policy: {0}")]
    InvalidPolicy(String),
}
