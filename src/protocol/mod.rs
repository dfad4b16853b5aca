//! Wire protocol for hosted sessions.

mod messages;

pub use messages::{ClientMessage, DEFAULT_PORT, QuestionView, ServerMessage};
