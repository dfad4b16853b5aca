use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::error::QuizError;
use crate::models::{Attempt, AttemptState, Quiz};

use super::scoring::score;

/// Create a fresh attempt for `quiz_id`.
///
/// The quiz is not looked up here; callers resolve it through the catalog.
/// `completed_at` starts out equal to `now` and is replaced on finish.
pub fn start_attempt(quiz_id: &str, now: DateTime<Utc>) -> Attempt {
    Attempt {
        quiz_id: quiz_id.to_string(),
        answers: BTreeMap::new(),
        score: 0,
        started_at: now,
        completed_at: now,
        state: AttemptState::InProgress,
    }
}

/// Record `option_index` for `question_index`, replacing any earlier answer.
///
/// Positions are written as given: bounds are the caller's responsibility.
/// Without a live attempt, or once the attempt is finished, nothing happens.
pub fn submit_answer(
    attempt: Option<Attempt>,
    question_index: usize,
    option_index: usize,
) -> Option<Attempt> {
    let mut attempt = attempt?;

    if attempt.is_finished() {
        tracing::warn!(
            quiz_id = %attempt.quiz_id,
            question_index,
            "ignoring answer for a finished attempt"
        );
        return Some(attempt);
    }

    let previous = attempt.answers.insert(question_index, option_index);
    tracing::debug!(
        quiz_id = %attempt.quiz_id,
        question_index,
        option_index,
        replaced = ?previous,
        "answer recorded"
    );
    Some(attempt)
}

/// Score the attempt against its quiz and mark it finished.
///
/// Returns a snapshot of the finished attempt; the input is left untouched so
/// a failed call keeps the attempt in progress. Finishing an already finished
/// attempt recomputes the same score and keeps the first completion time.
pub fn finish_attempt(
    quiz: Option<&Quiz>,
    attempt: Option<&Attempt>,
    now: DateTime<Utc>,
) -> Result<Attempt, QuizError> {
    let (Some(quiz), Some(attempt)) = (quiz, attempt) else {
        return Err(QuizError::InvalidState);
    };

    let mut finished = attempt.clone();
    finished.score = score(quiz, &attempt.answers);
    if !attempt.is_finished() {
        finished.completed_at = now;
        finished.state = AttemptState::Finished;
    }

    tracing::info!(
        quiz_id = %quiz.id,
        score = finished.score,
        total = quiz.questions.len(),
        "attempt finished"
    );
    Ok(finished)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::models::Question;

    fn astronomy() -> Quiz {
        let question = |id: &str, correct_option_index| Question {
            id: id.to_string(),
            text: format!("Question {}", id),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_option_index,
        };
        Quiz {
            id: "astronomy".to_string(),
            title: "Science Quiz: Astronomy".to_string(),
            description: "Explore the wonders of our solar system and beyond.".to_string(),
            created_by: "user2".to_string(),
            created_at: Utc::now(),
            questions: vec![question("q1", 1), question("q2", 1), question("q3", 2)],
        }
    }

    #[test]
    fn test_start_attempt_is_empty_and_in_progress() {
        let now = Utc::now();
        let attempt = start_attempt("astronomy", now);

        assert_eq!(attempt.quiz_id, "astronomy");
        assert!(attempt.answers.is_empty());
        assert_eq!(attempt.score, 0);
        assert_eq!(attempt.completed_at, now);
        assert_eq!(attempt.state, AttemptState::InProgress);
    }

    #[test]
    fn test_submit_overwrites_previous_answer() {
        let attempt = Some(start_attempt("astronomy", Utc::now()));
        let attempt = submit_answer(attempt, 0, 1);
        let attempt = submit_answer(attempt, 0, 2).unwrap();

        assert_eq!(attempt.answer(0), Some(2));
        assert_eq!(attempt.answers.len(), 1);
    }

    #[test]
    fn test_submit_without_attempt_is_a_no_op() {
        assert_eq!(submit_answer(None, 0, 1), None);
    }

    #[test]
    fn test_submit_does_not_check_bounds() {
        let attempt = submit_answer(Some(start_attempt("astronomy", Utc::now())), 42, 9).unwrap();

        assert_eq!(attempt.answer(42), Some(9));
    }

    #[test]
    fn test_finish_scores_and_freezes() {
        let quiz = astronomy();
        let started = Utc::now();
        let mut attempt = Some(start_attempt(&quiz.id, started));
        for (q, o) in [(0, 1), (1, 1), (2, 0)] {
            attempt = submit_answer(attempt, q, o);
        }

        let finished_at = started + Duration::seconds(30);
        let finished = finish_attempt(Some(&quiz), attempt.as_ref(), finished_at).unwrap();

        assert_eq!(finished.score, 2);
        assert_eq!(finished.state, AttemptState::Finished);
        assert_eq!(finished.completed_at, finished_at);
        assert!(finished.completed_at >= finished.started_at);
    }

    #[test]
    fn test_finish_requires_quiz_and_attempt() {
        let quiz = astronomy();
        let attempt = start_attempt(&quiz.id, Utc::now());

        assert!(matches!(
            finish_attempt(None, Some(&attempt), Utc::now()),
            Err(QuizError::InvalidState)
        ));
        assert!(matches!(
            finish_attempt(Some(&quiz), None, Utc::now()),
            Err(QuizError::InvalidState)
        ));
        assert!(matches!(
            finish_attempt(None, None, Utc::now()),
            Err(QuizError::InvalidState)
        ));
    }

    #[test]
    fn test_refinish_keeps_score_and_completion_time() {
        let quiz = astronomy();
        let now = Utc::now();
        let attempt = submit_answer(Some(start_attempt(&quiz.id, now)), 0, 1);

        let first = finish_attempt(Some(&quiz), attempt.as_ref(), now).unwrap();
        let second =
            finish_attempt(Some(&quiz), Some(&first), now + Duration::minutes(5)).unwrap();

        assert_eq!(first.score, 1);
        assert_eq!(second, first);
    }

    #[test]
    fn test_submit_after_finish_is_ignored() {
        let quiz = astronomy();
        let attempt = submit_answer(Some(start_attempt(&quiz.id, Utc::now())), 0, 1);
        let finished = finish_attempt(Some(&quiz), attempt.as_ref(), Utc::now()).unwrap();

        let after = submit_answer(Some(finished.clone()), 0, 3).unwrap();
        assert_eq!(after, finished);
    }
}
