//! Protocol messages for hosted quiz sessions.
//!
//! All messages are serialized as JSON over WebSocket.

use serde::{Deserialize, Serialize};

use crate::engine::Review;
use crate::models::{Question, QuizSummary};

/// Messages sent from client to server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// Search the catalog; an empty query lists everything.
    ListQuizzes {
        #[serde(default)]
        query: String,
    },

    /// Begin a fresh attempt, discarding any previous one.
    StartAttempt { quiz_id: String },

    /// Record or replace the answer for one question.
    SubmitAnswer {
        question_index: usize,
        option_index: usize,
    },

    /// Score the current attempt.
    FinishAttempt,

    /// Ask how far the current attempt has got.
    Progress,
}

/// Messages sent from server to client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Connection accepted; the token identifies this session in logs.
    Welcome { session_id: String },

    /// Catalog search results.
    Quizzes { quizzes: Vec<QuizSummary> },

    /// A new attempt is ready to be answered.
    AttemptStarted {
        quiz_id: String,
        title: String,
        questions: Vec<QuestionView>,
        estimated_minutes: f64,
    },

    /// An answer was stored.
    AnswerRecorded {
        answered: usize,
        progress_percent: f64,
    },

    /// Current progress of the attempt.
    Progress {
        answered: usize,
        total: usize,
        progress_percent: f64,
    },

    /// The attempt has been scored.
    AttemptFinished { review: Review },

    /// The request could not be served.
    Error { kind: String, message: String },
}

/// A question as shown to a participant, without the correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub index: usize,
    pub text: String,
    pub options: Vec<String>,
}

impl QuestionView {
    pub fn new(index: usize, question: &Question) -> Self {
        Self {
            index,
            text: question.text.clone(),
            options: question.options.clone(),
        }
    }
}

impl From<&crate::error::QuizError> for ServerMessage {
    fn from(err: &crate::error::QuizError) -> Self {
        ServerMessage::Error {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

/// Default server port.
pub const DEFAULT_PORT: u16 = 8713;
