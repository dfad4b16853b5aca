mod attempt;
mod question;
mod quiz;
mod user;

pub use attempt::{Attempt, AttemptState};
pub use question::{Question, QuestionDraft};
pub use quiz::{Quiz, QuizDraft, QuizSummary};
pub use user::User;
