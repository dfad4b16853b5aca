use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptState {
    /// Answers may still be submitted.
    InProgress,
    /// Scored; no further answers are accepted.
    Finished,
}

/// One participant's run through a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub quiz_id: String,
    /// Question position to chosen option index. Entries are only ever
    /// added or overwritten.
    pub answers: BTreeMap<usize, usize>,
    /// Zero until the attempt is finished.
    pub score: usize,
    pub started_at: DateTime<Utc>,
    /// Equal to `started_at` until the attempt is finished.
    pub completed_at: DateTime<Utc>,
    pub state: AttemptState,
}

impl Attempt {
    pub fn is_finished(&self) -> bool {
        self.state == AttemptState::Finished
    }

    /// The option recorded for a question position, if any.
    pub fn answer(&self, question_index: usize) -> Option<usize> {
        self.answers.get(&question_index).copied()
    }
}
