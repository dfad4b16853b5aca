use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::question::{Question, QuestionDraft};

/// An immutable quiz definition owned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Case-insensitive substring match against title or description.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            created_by: self.created_by.clone(),
            question_count: self.questions.len(),
            estimated_minutes: crate::engine::estimated_minutes(self),
        }
    }
}

/// A quiz as submitted for creation, before the catalog assigns an id and
/// a creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub created_by: String,
    pub questions: Vec<QuestionDraft>,
}

/// Listing card data for a quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub question_count: usize,
    pub estimated_minutes: f64,
}
