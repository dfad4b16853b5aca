//! # quiz-hub
//!
//! Browse a catalog of quizzes, take one question by question and get a
//! score.
//!
//! The [`engine`] module holds the attempt lifecycle and scoring; the
//! [`catalog`] supplies quiz definitions. Both are usable on their own:
//!
//! ```rust
//! use quiz_hub::catalog::{Catalog, QuizCatalog};
//! use quiz_hub::engine::Session;
//!
//! let catalog = Catalog::seeded();
//! let quiz_id = catalog.search("astronomy")[0].id.clone();
//!
//! let mut session = Session::new();
//! session.start_attempt(&catalog, &quiz_id);
//! session.submit_answer(0, 1);
//! session.submit_answer(1, 1);
//! session.submit_answer(2, 0);
//!
//! let attempt = session.finish_attempt().unwrap();
//! assert_eq!(attempt.score, 2);
//! ```
//!
//! [`QuizHub`] wraps them in an interactive terminal player, and
//! [`server::run`] hosts independent sessions over WebSocket.

mod app;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod identity;
pub mod models;
pub mod protocol;
pub mod server;
pub mod terminal;
mod ui;

use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Screen};
pub use catalog::{Catalog, QuizCatalog, load_catalog};
pub use engine::Session;
pub use error::QuizError;
pub use models::{Attempt, AttemptState, Question, Quiz};

/// The interactive terminal quiz player.
pub struct QuizHub {
    app: App,
}

impl QuizHub {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            app: App::new(catalog),
        }
    }

    /// Load the catalog from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_hub::QuizHub;
    ///
    /// let hub = QuizHub::from_json("quizzes.json").expect("Failed to load catalog");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        Ok(Self::new(load_catalog(path)?))
    }

    /// Run the player in the terminal until the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the player should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen {
        Screen::Listing => handle_listing_input(app, key),
        Screen::Intro => handle_intro_input(app, key),
        Screen::Quiz => handle_quiz_input(app, key),
        Screen::Result => handle_result_input(app, key),
    }
}

fn handle_listing_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Esc => return true,
        KeyCode::Enter => app.open_selected_quiz(),
        KeyCode::Down => app.select_next_quiz(),
        KeyCode::Up => app.select_previous_quiz(),
        KeyCode::Tab => app.cycle_category(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(c) => app.push_search_char(c),
        _ => {}
    }
    false
}

fn handle_intro_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => app.begin_quiz(),
        KeyCode::Esc => app.explore_more(),
        _ => {}
    }
    false
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Enter | KeyCode::Char(' ') => app.choose_option(),
        KeyCode::Right | KeyCode::Char('n') => app.next_question(),
        KeyCode::Left | KeyCode::Char('p') => app.previous_question(),
        KeyCode::Esc => return true,
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.try_again(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.explore_more(),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_flow_through_a_quiz() {
        let mut hub = QuizHub::new(Catalog::seeded());
        let app = hub.app_mut();

        for c in "astro".chars() {
            assert!(!handle_input(app, KeyCode::Char(c)));
        }
        handle_input(app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Intro);
        handle_input(app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Quiz);

        // correct answers are B, B, C
        for moves in [1, 1, 0] {
            for _ in 0..moves {
                handle_input(app, KeyCode::Char('j'));
            }
            handle_input(app, KeyCode::Enter);
            handle_input(app, KeyCode::Char('n'));
        }

        assert_eq!(app.screen, Screen::Result);
        assert_eq!(app.review().unwrap().score, 2);
        assert!(handle_input(app, KeyCode::Char('q')));
    }

    #[test]
    fn test_escape_from_intro_returns_to_listing() {
        let mut hub = QuizHub::new(Catalog::seeded());
        let app = hub.app_mut();

        handle_input(app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Intro);
        assert!(!handle_input(app, KeyCode::Esc));
        assert_eq!(app.screen, Screen::Listing);
    }
}
