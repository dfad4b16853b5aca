use std::collections::BTreeMap;

use crate::models::{Attempt, Quiz};

const MIN_ESTIMATED_MINUTES: f64 = 5.0;
const MINUTES_PER_QUESTION: f64 = 1.5;

/// Count the recorded answers that match the correct option.
///
/// Unanswered positions contribute nothing. An answer recorded past the end
/// of the quiz is a caller bug; it is logged and counted as wrong.
pub fn score(quiz: &Quiz, answers: &BTreeMap<usize, usize>) -> usize {
    answers
        .iter()
        .filter(|(position, option)| match quiz.questions.get(**position) {
            Some(question) => question.is_correct(**option),
            None => {
                tracing::warn!(
                    quiz_id = %quiz.id,
                    position = **position,
                    questions = quiz.questions.len(),
                    "answer recorded for a question the quiz does not have"
                );
                false
            }
        })
        .count()
}

/// Number of distinct question positions that have an answer.
pub fn answered_count(attempt: &Attempt) -> usize {
    attempt.answers.len()
}

/// Share of the quiz answered so far, 0 to 100. Zero for an empty quiz.
pub fn progress_percent(attempt: &Attempt, quiz: &Quiz) -> f64 {
    let total = quiz.questions.len();
    if total == 0 {
        return 0.0;
    }
    100.0 * answered_count(attempt) as f64 / total as f64
}

/// Advisory time estimate shown on listing and intro screens.
pub fn estimated_minutes(quiz: &Quiz) -> f64 {
    (MINUTES_PER_QUESTION * quiz.questions.len() as f64).max(MIN_ESTIMATED_MINUTES)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::engine::start_attempt;
    use crate::models::Question;

    fn quiz_with(correct: &[usize]) -> Quiz {
        Quiz {
            id: "quiz".to_string(),
            title: "Sample".to_string(),
            description: "Sample quiz".to_string(),
            created_by: "user1".to_string(),
            created_at: Utc::now(),
            questions: correct
                .iter()
                .enumerate()
                .map(|(i, &correct_option_index)| Question {
                    id: format!("q{}", i),
                    text: format!("Question {}", i),
                    options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    correct_option_index,
                })
                .collect(),
        }
    }

    #[test]
    fn test_score_counts_exact_matches() {
        let quiz = quiz_with(&[0, 1, 3]);
        let answers = BTreeMap::from([(0, 0), (1, 2), (2, 3)]);

        assert_eq!(score(&quiz, &answers), 2);
    }

    #[test]
    fn test_unanswered_questions_score_zero() {
        let quiz = quiz_with(&[0, 1, 3]);

        assert_eq!(score(&quiz, &BTreeMap::from([(0, 0)])), 1);
        assert_eq!(score(&quiz, &BTreeMap::new()), 0);
    }

    #[test]
    fn test_answer_past_the_end_counts_as_wrong() {
        let quiz = quiz_with(&[0]);
        let answers = BTreeMap::from([(0, 0), (5, 0)]);

        assert_eq!(score(&quiz, &answers), 1);
    }

    #[test]
    fn test_progress_percent() {
        let quiz = quiz_with(&[0, 1, 3, 2]);
        let mut attempt = start_attempt(&quiz.id, Utc::now());
        assert_eq!(progress_percent(&attempt, &quiz), 0.0);

        attempt.answers.insert(0, 1);
        attempt.answers.insert(3, 1);
        assert_eq!(answered_count(&attempt), 2);
        assert_eq!(progress_percent(&attempt, &quiz), 50.0);
    }

    #[test]
    fn test_progress_percent_on_empty_quiz_is_zero() {
        let quiz = quiz_with(&[]);
        let mut attempt = start_attempt(&quiz.id, Utc::now());
        attempt.answers.insert(0, 0);

        assert_eq!(progress_percent(&attempt, &quiz), 0.0);
    }

    #[test]
    fn test_estimated_minutes_has_a_floor() {
        assert_eq!(estimated_minutes(&quiz_with(&[0, 0, 0])), 5.0);
        assert_eq!(estimated_minutes(&quiz_with(&[0; 4])), 6.0);
        assert_eq!(estimated_minutes(&quiz_with(&[0; 5])), 7.5);
        assert_eq!(estimated_minutes(&quiz_with(&[])), 5.0);
    }
}
