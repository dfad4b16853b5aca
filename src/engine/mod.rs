//! Attempt lifecycle and scoring.
//!
//! The free functions here are pure transitions over attempt values; the
//! [`Session`] handle wraps them for callers that keep one live attempt
//! per participant.

mod attempt;
mod review;
mod scoring;
mod session;

pub use attempt::{finish_attempt, start_attempt, submit_answer};
pub use review::{Grade, QuestionReview, Review, review};
pub use scoring::{answered_count, estimated_minutes, progress_percent, score};
pub use session::Session;
