use serde::{Deserialize, Serialize};

use crate::models::{Attempt, Quiz};

/// Feedback band for a finished attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Excellent,
    Great,
    Good,
    Fair,
    NeedsWork,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Grade::Excellent,
            75..=89 => Grade::Great,
            60..=74 => Grade::Good,
            40..=59 => Grade::Fair,
            _ => Grade::NeedsWork,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent! You've mastered this quiz!",
            Grade::Great => "Great job! You're doing very well!",
            Grade::Good => "Good work! You've passed with a solid score.",
            Grade::Fair => "Not bad, but there's room for improvement.",
            Grade::NeedsWork => "You might want to study more and try again.",
        }
    }
}

/// Outcome of a single question in a finished attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionReview {
    pub index: usize,
    pub text: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
    pub correct: usize,
    pub is_correct: bool,
}

/// Result page data for a finished attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub quiz_id: String,
    pub title: String,
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub grade: Grade,
    pub questions: Vec<QuestionReview>,
}

/// Build the per-question review of `attempt` against `quiz`.
///
/// Uses the attempt's stored score, so it is only meaningful once the
/// attempt has been finished.
pub fn review(quiz: &Quiz, attempt: &Attempt) -> Review {
    let total = quiz.questions.len();
    let percentage = percentage(attempt.score, total);

    let questions = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let selected = attempt.answer(index);
            QuestionReview {
                index,
                text: question.text.clone(),
                options: question.options.clone(),
                selected,
                correct: question.correct_option_index,
                is_correct: selected.is_some_and(|option| question.is_correct(option)),
            }
        })
        .collect();

    Review {
        quiz_id: quiz.id.clone(),
        title: quiz.title.clone(),
        score: attempt.score,
        total,
        percentage,
        grade: Grade::from_percentage(percentage),
        questions,
    }
}

fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score as f64 / total as f64 * 100.0).round() as u32
}
