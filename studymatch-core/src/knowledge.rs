//! Course modules and the knowledge base they form.

use serde::{Deserialize, Serialize};

/// A unit of course content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    /// Original keyword strings; normalized only when scoring.
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub example: String,
}

impl Module {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            keywords: Vec::new(),
            explanation: String::new(),
            example: String::new(),
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    /// A module without keywords scores 0 against every question.
    pub fn is_matchable(&self) -> bool {
        !self.keywords.is_empty()
    }
}

/// Ordered, read-only collection of modules. Order decides ties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub modules: Vec<Module>,
}

impl KnowledgeBase {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.title == title)
    }
}
