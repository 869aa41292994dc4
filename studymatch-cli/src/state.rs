use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use studymatch_core::{HistoryEntry, QuestionHistory};
use tracing::warn;

/// `$STUDYMATCH_HOME`, else `~/.studymatch`.
pub fn studymatch_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("STUDYMATCH_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".studymatch"))
}

pub fn ensure_studymatch_home() -> Result<PathBuf> {
    let dir = studymatch_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn history_path() -> Result<PathBuf> {
    Ok(ensure_studymatch_home()?.join("history.json"))
}

/// Load the persisted log. A missing file is an empty history; an
/// unreadable one is logged and replaced by an empty history.
pub fn read_history(path: &Path, limit: usize) -> Result<QuestionHistory> {
    if !path.exists() {
        return Ok(QuestionHistory::with_limit(limit));
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    match serde_json::from_str::<Vec<HistoryEntry>>(&s) {
        Ok(entries) => Ok(QuestionHistory::from_entries(entries, limit)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "discarding unreadable question history");
            Ok(QuestionHistory::with_limit(limit))
        }
    }
}

pub fn write_history(path: &Path, history: &QuestionHistory) -> Result<()> {
    let json = serde_json::to_string_pretty(history.entries())?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn remove_history(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("remove {}", path.display()))?;
    }
    Ok(())
}
