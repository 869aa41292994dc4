//! Plain-text rendering for answers, history and module listings.

use chrono::Local;
use studymatch_core::{KnowledgeBase, QuestionHistory};

use crate::session::{Answer, Reply};

pub const EMPTY_QUESTION_MSG: &str = "Please enter a question before asking.";
pub const GENERAL_MATCH_TAG: &str = "General match";

pub fn render_reply(reply: &Reply, knowledge: Option<&KnowledgeBase>) -> String {
    match reply {
        Reply::EmptyQuestion => EMPTY_QUESTION_MSG.to_string(),
        Reply::NotReady => studymatch_core::MatchError::NotReady.to_string(),
        Reply::NoMatch(_) => no_match_message(knowledge),
        Reply::Answer(a) => render_answer(a),
    }
}

pub fn render_answer(a: &Answer) -> String {
    let mut s = String::new();
    s.push_str(&format!("# {}  ({}%)\n\n", a.title, a.confidence));
    s.push_str(&format!("{}\n\n", a.explanation.trim()));
    if !a.example.trim().is_empty() {
        s.push_str("Example:\n\n");
        for line in a.example.lines() {
            s.push_str(&format!("    {line}\n"));
        }
        s.push('\n');
    }

    let tags: Vec<String> = if a.matched_keywords.is_empty() {
        vec![format!("[{GENERAL_MATCH_TAG}]")]
    } else {
        a.matched_keywords.iter().map(|k| format!("[{k}]")).collect()
    };
    s.push_str(&format!("Matched: {}", tags.join(" ")));
    s
}

/// Guidance listing the loaded topics.
pub fn no_match_message(knowledge: Option<&KnowledgeBase>) -> String {
    let topics: Vec<&str> = knowledge
        .map(|kb| kb.iter().map(|m| m.title.as_str()).collect())
        .unwrap_or_default();
    if topics.is_empty() {
        return "No relevant content found. Please refine your question.".to_string();
    }
    format!(
        "No relevant content found. Please refine your question or try asking about: {}.",
        topics.join(", ")
    )
}

pub fn render_history(history: &QuestionHistory) -> String {
    if history.is_empty() {
        return "No questions asked yet".to_string();
    }

    let mut s = String::new();
    for (i, e) in history.entries().iter().enumerate() {
        let when = e
            .recorded_at()
            .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| e.timestamp.clone());
        s.push_str(&format!("{:>2}. {}\n", i + 1, e.question));
        s.push_str(&format!("    {} | {}% match | {}\n", e.module_title, e.confidence, when));
    }
    s
}

pub fn render_modules(kb: &KnowledgeBase) -> String {
    let mut s = String::new();
    for m in kb.iter() {
        s.push_str(&format!("- {} ({})\n", m.title, m.keywords.join(", ")));
    }
    s.push_str(&format!("{} modules", kb.len()));
    s
}
