//! Where course data comes from.

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use studymatch_core::KnowledgeBase;

use crate::loader::{bundled_course_data, fetch_course_data, load_course_file};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CourseSource {
    #[default]
    Bundled,
    File(PathBuf),
    Url(String),
}

impl FromStr for CourseSource {
    type Err = std::convert::Infallible;

    /// `"bundled"` (or empty), an `http(s)://` URL, otherwise a file path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("bundled") {
            return Ok(CourseSource::Bundled);
        }
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(CourseSource::Url(s.to_string()));
        }
        Ok(CourseSource::File(PathBuf::from(s)))
    }
}

impl fmt::Display for CourseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseSource::Bundled => write!(f, "bundled"),
            CourseSource::File(p) => write!(f, "{}", p.display()),
            CourseSource::Url(u) => write!(f, "{u}"),
        }
    }
}

impl CourseSource {
    pub async fn load(&self) -> Result<KnowledgeBase> {
        match self {
            CourseSource::Bundled => bundled_course_data(),
            CourseSource::File(p) => load_course_file(p),
            CourseSource::Url(u) => fetch_course_data(u).await,
        }
    }
}
