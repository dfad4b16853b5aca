//! Error types shared by the catalog, the attempt engine and the hosting layers.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, creating or taking quizzes.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Finalize was requested without a live attempt or without its quiz.
    #[error("no active quiz attempt")]
    InvalidState,

    /// A catalog lookup found nothing for the given quiz id.
    #[error("quiz not found: {0}")]
    NotFound(String),

    /// User supplied data was rejected; maps field keys to messages.
    #[error("validation failed: {}", format_fields(.0))]
    Validation(BTreeMap<String, String>),

    /// A catalog file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A catalog file or protocol message was not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Terminal or socket IO failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The WebSocket transport failed.
    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
}

impl QuizError {
    /// Build a validation error for a single field.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(field.into(), message.into());
        QuizError::Validation(fields)
    }

    /// Short machine-readable name of the error kind, used on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            QuizError::InvalidState => "invalid_state",
            QuizError::NotFound(_) => "not_found",
            QuizError::Validation(_) => "validation",
            QuizError::Load { .. } => "load",
            QuizError::Parse(_) => "parse",
            QuizError::Io(_) => "io",
            QuizError::WebSocket(_) => "websocket",
        }
    }

    /// Per-field messages when this is a validation error.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            QuizError::Validation(fields) => Some(fields),
            _ => None,
        }
    }
}

fn format_fields(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}
