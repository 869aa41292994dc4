//! Load course documents into a [`KnowledgeBase`].
//!
//! Document shape:
//! { "modules": [ { "title", "keywords": [..], "explanation", "example" }, .. ] }

use anyhow::{bail, Context, Result};
use std::path::Path;
use studymatch_core::KnowledgeBase;
use tracing::{info, warn};

const BUNDLED_COURSE_DATA: &str = include_str!("../data/course_data.json");

/// Parse a course document. Modules without keywords are kept (they can
/// never win a match) but reported.
pub fn parse_course_data(json: &str) -> Result<KnowledgeBase> {
    let kb: KnowledgeBase = serde_json::from_str(json).context("parse course data")?;
    report_unmatchable(&kb);
    Ok(kb)
}

pub fn load_course_file(path: impl AsRef<Path>) -> Result<KnowledgeBase> {
    let path = path.as_ref();
    let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let kb = parse_course_data(&s).with_context(|| format!("parsing {}", path.display()))?;
    info!(path = %path.display(), modules = kb.len(), "course data loaded");
    Ok(kb)
}

pub async fn fetch_course_data(url: &str) -> Result<KnowledgeBase> {
    let resp = reqwest::get(url)
        .await
        .with_context(|| format!("GET {url}"))?;

    let status = resp.status();
    if !status.is_success() {
        bail!("GET {url} failed: HTTP {status}");
    }

    let body = resp.text().await.with_context(|| format!("read body of {url}"))?;
    let kb = parse_course_data(&body).with_context(|| format!("parsing response from {url}"))?;
    info!(url, modules = kb.len(), "course data fetched");
    Ok(kb)
}

/// The course document shipped with the binary.
pub fn bundled_course_data() -> Result<KnowledgeBase> {
    parse_course_data(BUNDLED_COURSE_DATA).context("bundled course data")
}

fn report_unmatchable(kb: &KnowledgeBase) {
    for (i, m) in kb.iter().enumerate() {
        if m.title.trim().is_empty() {
            warn!(index = i, "course module has an empty title");
        }
        if !m.is_matchable() {
            warn!(index = i, title = %m.title, "course module has no keywords and will never match");
        }
    }
}
