use serde::{Deserialize, Serialize};

/// A single multiple-choice question inside a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option_index: usize,
}

impl Question {
    /// Whether `option_index` is the correct choice for this question.
    pub fn is_correct(&self, option_index: usize) -> bool {
        self.correct_option_index == option_index
    }
}

/// A question as submitted for creation; the id is assigned by the catalog
/// unless one is already present (imported catalogs keep their ids).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option_index: usize,
}

impl QuestionDraft {
    pub fn new<S: Into<String>>(text: S, options: Vec<S>, correct_option_index: usize) -> Self {
        Self {
            id: None,
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_option_index,
        }
    }
}
