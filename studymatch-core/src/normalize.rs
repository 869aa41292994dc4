//! Text canonicalization shared by questions and module keywords.

use regex::Regex;
use std::sync::LazyLock;

// Word characters are ASCII letters, digits and underscore.
static NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_\s-]").expect("static regex"));
static SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Lower-case, turn punctuation into spaces, collapse whitespace, trim.
///
/// Hyphens survive so terms like `async-await` stay a single token.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned = NOISE_RE.replace_all(&lowered, " ");
    let collapsed = SPACE_RE.replace_all(&cleaned, " ");
    collapsed.trim().to_string()
}
