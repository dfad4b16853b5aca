use crate::catalog::{Catalog, Category, QuizCatalog};
use crate::engine::{Review, Session, estimated_minutes};
use crate::models::{Question, Quiz};

/// Which screen the terminal UI is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Searchable list of quizzes.
    Listing,
    /// Quiz details before the first question.
    Intro,
    /// Answering questions.
    Quiz,
    /// Score and answer review.
    Result,
}

/// Presentation state for the terminal UI. All attempt state lives in the
/// [`Session`]; this only tracks what is on screen.
pub struct App {
    pub screen: Screen,
    catalog: Catalog,
    session: Session,
    search: String,
    category: Category,
    selected_quiz: usize,
    current_question: usize,
    cursor: usize,
    result_scroll: usize,
    status: Option<String>,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            screen: Screen::Listing,
            catalog,
            session: Session::new(),
            search: String::new(),
            category: Category::All,
            selected_quiz: 0,
            current_question: 0,
            cursor: 0,
            result_scroll: 0,
            status: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn visible_quizzes(&self) -> Vec<&Quiz> {
        self.catalog.filter(&self.search, self.category)
    }

    pub fn selected_quiz_index(&self) -> usize {
        self.selected_quiz
    }

    pub fn current_quiz(&self) -> Option<&Quiz> {
        self.session.current_quiz()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_quiz()?.questions.get(self.current_question)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question + 1
    }

    pub fn total_questions(&self) -> usize {
        self.current_quiz().map_or(0, Quiz::question_count)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_question + 1 >= self.total_questions()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The answer recorded for the question on screen.
    pub fn recorded_answer(&self) -> Option<usize> {
        self.session.current_attempt()?.answer(self.current_question)
    }

    pub fn estimated_minutes(&self) -> f64 {
        self.current_quiz().map_or(0.0, estimated_minutes)
    }

    pub fn progress_percent(&self) -> f64 {
        self.session.progress_percent()
    }

    pub fn review(&self) -> Option<Review> {
        self.session.review()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
        self.selected_quiz = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
        self.selected_quiz = 0;
    }

    pub fn cycle_category(&mut self) {
        self.category = self.category.next();
        self.selected_quiz = 0;
    }

    pub fn select_next_quiz(&mut self) {
        let count = self.visible_quizzes().len();
        if count > 0 {
            self.selected_quiz = (self.selected_quiz + 1) % count;
        }
    }

    pub fn select_previous_quiz(&mut self) {
        let count = self.visible_quizzes().len();
        if count > 0 {
            self.selected_quiz = (self.selected_quiz + count - 1) % count;
        }
    }

    /// Open the highlighted quiz. Like the quiz page, this starts a fresh
    /// attempt straight away.
    pub fn open_selected_quiz(&mut self) {
        let Some(quiz_id) = self
            .visible_quizzes()
            .get(self.selected_quiz)
            .map(|quiz| quiz.id.clone())
        else {
            return;
        };
        self.open_quiz(&quiz_id);
    }

    fn open_quiz(&mut self, quiz_id: &str) {
        if self.catalog.get_by_id(quiz_id).is_none() {
            self.status = Some(format!("Quiz {} no longer exists", quiz_id));
            return;
        }
        self.session.start_attempt(&self.catalog, quiz_id);
        self.current_question = 0;
        self.cursor = 0;
        self.result_scroll = 0;
        self.status = None;
        self.screen = Screen::Intro;
    }

    pub fn begin_quiz(&mut self) {
        if self.total_questions() == 0 {
            self.status = Some("This quiz has no questions".to_string());
            return;
        }
        self.screen = Screen::Quiz;
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    pub fn cursor_down(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn cursor_up(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Record the option under the cursor. Positions always come from the
    /// quiz on screen, so the engine never sees an out-of-range write.
    pub fn choose_option(&mut self) {
        if self.cursor < self.option_count() {
            self.session.submit_answer(self.current_question, self.cursor);
        }
    }

    /// Advance to the next question, or finish on the last one. Does nothing
    /// until the current question has an answer.
    pub fn next_question(&mut self) {
        if self.recorded_answer().is_none() {
            self.status = Some("Choose an answer first".to_string());
            return;
        }
        self.status = None;

        if self.is_last_question() {
            self.finish();
        } else {
            self.current_question += 1;
            self.cursor = self.recorded_answer().unwrap_or(0);
        }
    }

    pub fn previous_question(&mut self) {
        if self.current_question > 0 {
            self.current_question -= 1;
            self.cursor = self.recorded_answer().unwrap_or(0);
            self.status = None;
        }
    }

    fn finish(&mut self) {
        match self.session.finish_attempt() {
            Ok(_) => {
                self.result_scroll = 0;
                self.screen = Screen::Result;
            }
            Err(err) => {
                tracing::warn!("could not finish attempt: {}", err);
                self.status = Some(err.to_string());
            }
        }
    }

    /// Start over on the same quiz.
    pub fn try_again(&mut self) {
        let Some(quiz_id) = self.current_quiz().map(|quiz| quiz.id.clone()) else {
            self.explore_more();
            return;
        };
        self.open_quiz(&quiz_id);
    }

    pub fn explore_more(&mut self) {
        self.screen = Screen::Listing;
        self.status = None;
    }

    pub fn scroll_results_down(&mut self) {
        self.result_scroll = self.result_scroll.saturating_add(1);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_on(query: &str) -> App {
        let mut app = App::new(Catalog::seeded());
        for c in query.chars() {
            app.push_search_char(c);
        }
        app.open_selected_quiz();
        app
    }

    fn answer(app: &mut App, option: usize) {
        while app.cursor() != option {
            app.cursor_down();
        }
        app.choose_option();
    }

    #[test]
    fn test_search_narrows_listing() {
        let mut app = App::new(Catalog::seeded());
        assert_eq!(app.visible_quizzes().len(), 4);

        for c in "ZZZ".chars() {
            app.push_search_char(c);
        }
        assert!(app.visible_quizzes().is_empty());
        app.open_selected_quiz();
        assert_eq!(app.screen, Screen::Listing);
    }

    #[test]
    fn test_opening_a_quiz_starts_an_attempt() {
        let app = app_on("astronomy");

        assert_eq!(app.screen, Screen::Intro);
        assert_eq!(app.total_questions(), 3);
        assert_eq!(app.estimated_minutes(), 5.0);
        assert!(app.session().current_attempt().is_some());
    }

    #[test]
    fn test_next_requires_an_answer() {
        let mut app = app_on("astronomy");
        app.begin_quiz();

        app.next_question();
        assert_eq!(app.current_question_number(), 1);
        assert!(app.status().is_some());

        answer(&mut app, 1);
        app.next_question();
        assert_eq!(app.current_question_number(), 2);
        assert_eq!(app.progress_percent().round(), 33.0);
    }

    #[test]
    fn test_previous_restores_cursor_to_recorded_answer() {
        let mut app = app_on("astronomy");
        app.begin_quiz();
        answer(&mut app, 3);
        app.next_question();

        app.previous_question();
        assert_eq!(app.cursor(), 3);
        assert_eq!(app.recorded_answer(), Some(3));
    }

    #[test]
    fn test_finishing_on_last_question_shows_results() {
        let mut app = app_on("astronomy");
        app.begin_quiz();
        for option in [1, 1, 0] {
            answer(&mut app, option);
            app.next_question();
        }

        assert_eq!(app.screen, Screen::Result);
        let review = app.review().unwrap();
        assert_eq!(review.score, 2);

        app.try_again();
        assert_eq!(app.screen, Screen::Intro);
        assert!(app.session().current_attempt().unwrap().answers.is_empty());
    }

    #[test]
    fn test_category_cycle_resets_selection() {
        let mut app = App::new(Catalog::seeded());
        app.select_next_quiz();
        assert_eq!(app.selected_quiz_index(), 1);

        app.cycle_category();
        assert_eq!(app.category(), Category::Web);
        assert_eq!(app.selected_quiz_index(), 0);
        assert_eq!(app.visible_quizzes().len(), 1);
    }
}
