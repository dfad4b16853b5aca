use chrono::Utc;

use crate::catalog::QuizCatalog;
use crate::error::QuizError;
use crate::models::{Attempt, Quiz};

use super::attempt::{finish_attempt, start_attempt, submit_answer};
use super::review::{Review, review};
use super::scoring::{answered_count, progress_percent};

/// The quiz and attempt one participant is currently working on.
///
/// Each participant gets their own `Session`; nothing in it is shared.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current_quiz: Option<Quiz>,
    current_attempt: Option<Attempt>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_quiz(&self) -> Option<&Quiz> {
        self.current_quiz.as_ref()
    }

    pub fn current_attempt(&self) -> Option<&Attempt> {
        self.current_attempt.as_ref()
    }

    /// Make `quiz_id` the current quiz, or clear it when the catalog has no
    /// such quiz.
    pub fn load_quiz<C: QuizCatalog + ?Sized>(&mut self, catalog: &C, quiz_id: &str) {
        self.current_quiz = catalog.get_by_id(quiz_id).cloned();
        if self.current_quiz.is_none() {
            tracing::warn!(quiz_id, "quiz not in catalog");
        }
    }

    /// Load the quiz and replace any previous attempt with a fresh one.
    pub fn start_attempt<C: QuizCatalog + ?Sized>(&mut self, catalog: &C, quiz_id: &str) {
        self.load_quiz(catalog, quiz_id);
        if let Some(previous) = &self.current_attempt {
            tracing::debug!(quiz_id = %previous.quiz_id, "discarding previous attempt");
        }
        self.current_attempt = Some(start_attempt(quiz_id, Utc::now()));
        tracing::info!(quiz_id, "attempt started");
    }

    pub fn submit_answer(&mut self, question_index: usize, option_index: usize) {
        self.current_attempt =
            submit_answer(self.current_attempt.take(), question_index, option_index);
    }

    /// Score the current attempt. On error the attempt is left as it was.
    pub fn finish_attempt(&mut self) -> Result<Attempt, QuizError> {
        let finished = finish_attempt(
            self.current_quiz.as_ref(),
            self.current_attempt.as_ref(),
            Utc::now(),
        )?;
        self.current_attempt = Some(finished.clone());
        Ok(finished)
    }

    pub fn answered_count(&self) -> usize {
        self.current_attempt.as_ref().map_or(0, answered_count)
    }

    /// Percentage of the current quiz answered, 0 when nothing is loaded.
    pub fn progress_percent(&self) -> f64 {
        match (&self.current_attempt, &self.current_quiz) {
            (Some(attempt), Some(quiz)) => progress_percent(attempt, quiz),
            _ => 0.0,
        }
    }

    /// Review of the current attempt once it has been finished.
    pub fn review(&self) -> Option<Review> {
        let quiz = self.current_quiz.as_ref()?;
        let attempt = self.current_attempt.as_ref().filter(|a| a.is_finished())?;
        Some(review(quiz, attempt))
    }
}
