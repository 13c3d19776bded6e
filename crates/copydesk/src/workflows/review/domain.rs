use serde::{Deserialize, Serialize};

pub(crate) fn default_language() -> String {
    "english".to_string()
}

/// Article received for review. Immutable once constructed; both review
/// operations read it and neither mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSubmission {
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl ArticleSubmission {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: content.into(),
            language: default_language(),
        }
    }

    pub fn titled(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: content.into(),
            language: default_language(),
        }
    }
}

/// Raw metric values surfaced alongside the score for observability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    pub word_count: usize,
    pub window_entropy: f64,
    pub entity_density: f64,
    pub type_token_ratio: f64,
    pub subjectivity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_ease: Option<f64>,
}

/// One fired rubric rule. Severity is implied by the penalty; ordering
/// follows rule evaluation order, not severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub message: String,
    pub penalty: i32,
}

/// Terminal result of the scoring operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub passed: bool,
    pub score: i32,
    pub feedback: Vec<FeedbackItem>,
    pub metrics: MetricSet,
}
