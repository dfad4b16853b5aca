//! Request handling for one hosted session.
//!
//! The handler is synchronous and does no IO, so the server loop only has to
//! move JSON in and out of the socket.

use crate::catalog::{Catalog, QuizCatalog};
use crate::engine::{Session, estimated_minutes};
use crate::error::QuizError;
use crate::protocol::{ClientMessage, QuestionView, ServerMessage};

/// Apply one client message to `session` and produce the reply.
pub fn handle_message(
    catalog: &Catalog,
    session: &mut Session,
    msg: ClientMessage,
) -> ServerMessage {
    match msg {
        ClientMessage::ListQuizzes { query } => ServerMessage::Quizzes {
            quizzes: catalog.summaries(&query),
        },
        ClientMessage::StartAttempt { quiz_id } => handle_start(catalog, session, &quiz_id),
        ClientMessage::SubmitAnswer {
            question_index,
            option_index,
        } => handle_answer(session, question_index, option_index),
        ClientMessage::FinishAttempt => handle_finish(session),
        ClientMessage::Progress => handle_progress(session),
    }
}

fn handle_start(catalog: &Catalog, session: &mut Session, quiz_id: &str) -> ServerMessage {
    // The engine accepts unknown ids; a remote client gets told instead.
    let Some(quiz) = catalog.get_by_id(quiz_id) else {
        return ServerMessage::from(&QuizError::NotFound(quiz_id.to_string()));
    };

    session.start_attempt(catalog, quiz_id);

    ServerMessage::AttemptStarted {
        quiz_id: quiz.id.clone(),
        title: quiz.title.clone(),
        questions: quiz
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionView::new(index, question))
            .collect(),
        estimated_minutes: estimated_minutes(quiz),
    }
}

fn handle_answer(session: &mut Session, question_index: usize, option_index: usize) -> ServerMessage {
    let (Some(quiz), Some(attempt)) = (session.current_quiz(), session.current_attempt()) else {
        return ServerMessage::from(&QuizError::InvalidState);
    };

    if attempt.is_finished() {
        return ServerMessage::Error {
            kind: "invalid_state".to_string(),
            message: "attempt is already finished".to_string(),
        };
    }

    // Bounds are checked here so the engine only ever sees valid positions.
    let Some(question) = quiz.questions.get(question_index) else {
        return ServerMessage::from(&QuizError::invalid(
            "question_index",
            format!(
                "question {} is out of range (quiz has {})",
                question_index,
                quiz.questions.len()
            ),
        ));
    };
    if option_index >= question.options.len() {
        return ServerMessage::from(&QuizError::invalid(
            "option_index",
            format!(
                "option {} is out of range (question has {})",
                option_index,
                question.options.len()
            ),
        ));
    }

    session.submit_answer(question_index, option_index);

    ServerMessage::AnswerRecorded {
        answered: session.answered_count(),
        progress_percent: session.progress_percent(),
    }
}

fn handle_finish(session: &mut Session) -> ServerMessage {
    if let Err(err) = session.finish_attempt() {
        return ServerMessage::from(&err);
    }
    match session.review() {
        Some(review) => ServerMessage::AttemptFinished { review },
        None => ServerMessage::from(&QuizError::InvalidState),
    }
}

fn handle_progress(session: &Session) -> ServerMessage {
    let Some(quiz) = session.current_quiz() else {
        return ServerMessage::from(&QuizError::InvalidState);
    };
    if session.current_attempt().is_none() {
        return ServerMessage::from(&QuizError::InvalidState);
    }

    ServerMessage::Progress {
        answered: session.answered_count(),
        total: quiz.question_count(),
        progress_percent: session.progress_percent(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(catalog: &Catalog, session: &mut Session, title_query: &str) -> String {
        let id = catalog.search(title_query)[0].id.clone();
        let reply = handle_message(
            catalog,
            session,
            ClientMessage::StartAttempt {
                quiz_id: id.clone(),
            },
        );
        assert!(matches!(reply, ServerMessage::AttemptStarted { .. }));
        id
    }

    fn answer(catalog: &Catalog, session: &mut Session, q: usize, o: usize) -> ServerMessage {
        handle_message(
            catalog,
            session,
            ClientMessage::SubmitAnswer {
                question_index: q,
                option_index: o,
            },
        )
    }

    fn error_kind(msg: &ServerMessage) -> &str {
        match msg {
            ServerMessage::Error { kind, .. } => kind,
            other => panic!("expected an error, got {:?}", other),
        }
    }

    #[test]
    fn test_list_quizzes() {
        let catalog = Catalog::seeded();
        let mut session = Session::new();

        let reply = handle_message(
            &catalog,
            &mut session,
            ClientMessage::ListQuizzes {
                query: "History".to_string(),
            },
        );

        let ServerMessage::Quizzes { quizzes } = reply else {
            panic!("expected quiz list");
        };
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].title, "History: Ancient Civilizations");

        let reply = handle_message(
            &catalog,
            &mut session,
            ClientMessage::ListQuizzes {
                query: "  history ".to_string(),
            },
        );
        assert!(matches!(reply, ServerMessage::Quizzes { quizzes } if quizzes.is_empty()));
    }

    #[test]
    fn test_unknown_quiz_is_not_found() {
        let catalog = Catalog::seeded();
        let mut session = Session::new();

        let reply = handle_message(
            &catalog,
            &mut session,
            ClientMessage::StartAttempt {
                quiz_id: "missing".to_string(),
            },
        );

        assert_eq!(error_kind(&reply), "not_found");
        assert!(session.current_attempt().is_none());
    }

    #[test]
    fn test_full_attempt() {
        let catalog = Catalog::seeded();
        let mut session = Session::new();
        start(&catalog, &mut session, "astronomy");

        for (q, o) in [(0, 1), (1, 1), (2, 0)] {
            assert!(matches!(
                answer(&catalog, &mut session, q, o),
                ServerMessage::AnswerRecorded { .. }
            ));
        }

        let reply = handle_message(&catalog, &mut session, ClientMessage::Progress);
        assert_eq!(
            reply,
            ServerMessage::Progress {
                answered: 3,
                total: 3,
                progress_percent: 100.0
            }
        );

        let reply = handle_message(&catalog, &mut session, ClientMessage::FinishAttempt);
        let ServerMessage::AttemptFinished { review } = reply else {
            panic!("expected results");
        };
        assert_eq!(review.score, 2);
        assert_eq!(review.total, 3);

        let late = answer(&catalog, &mut session, 2, 2);
        assert_eq!(error_kind(&late), "invalid_state");
    }

    #[test]
    fn test_out_of_range_answers_are_rejected() {
        let catalog = Catalog::seeded();
        let mut session = Session::new();
        start(&catalog, &mut session, "web");

        assert_eq!(error_kind(&answer(&catalog, &mut session, 3, 0)), "validation");
        assert_eq!(error_kind(&answer(&catalog, &mut session, 0, 4)), "validation");
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn test_requests_without_attempt() {
        let catalog = Catalog::seeded();
        let mut session = Session::new();

        assert_eq!(error_kind(&answer(&catalog, &mut session, 0, 0)), "invalid_state");
        let finish = handle_message(&catalog, &mut session, ClientMessage::FinishAttempt);
        assert_eq!(error_kind(&finish), "invalid_state");
        let progress = handle_message(&catalog, &mut session, ClientMessage::Progress);
        assert_eq!(error_kind(&progress), "invalid_state");
    }
}
