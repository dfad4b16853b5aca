//! The quiz catalog: lookup, search, creation and loading.

mod loader;
mod seed;

use std::collections::BTreeMap;

use chrono::Utc;
use uuid::Uuid;

use crate::error::QuizError;
use crate::models::{Question, Quiz, QuizDraft, QuizSummary};

pub use loader::{CatalogEntry, load_catalog, load_catalog_from_str, save_catalog};

/// Read access the attempt engine needs from a quiz store.
pub trait QuizCatalog {
    /// Resolve a quiz by id.
    fn get_by_id(&self, id: &str) -> Option<&Quiz>;

    /// Case-insensitive substring search over title and description.
    /// An empty query returns every quiz. Results keep catalog order.
    fn search(&self, query: &str) -> Vec<&Quiz>;
}

/// Listing page category filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Web,
    Science,
    History,
    Math,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Web,
        Category::Science,
        Category::History,
        Category::Math,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All Quizzes",
            Category::Web => "Web Development",
            Category::Science => "Science",
            Category::History => "History",
            Category::Math => "Mathematics",
        }
    }

    /// Substring the filter matches on, `None` for [`Category::All`].
    fn keyword(self) -> Option<&'static str> {
        match self {
            Category::All => None,
            Category::Web => Some("web"),
            Category::Science => Some("science"),
            Category::History => Some("history"),
            Category::Math => Some("math"),
        }
    }

    pub fn next(self) -> Self {
        let position = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }
}

/// In-memory, insertion-ordered quiz store.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    quizzes: Vec<Quiz>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four sample quizzes the application ships with.
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        for entry in seed::seed_entries() {
            if let Err(err) = catalog.import(entry) {
                tracing::error!("skipping seed quiz: {}", err);
            }
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    /// Validate a draft, assign ids and a creation time, and append it.
    pub fn create_quiz(&mut self, draft: QuizDraft) -> Result<&Quiz, QuizError> {
        self.import(CatalogEntry {
            id: None,
            created_at: None,
            draft,
        })
    }

    /// Add a quiz read from a catalog file, keeping any id or creation time
    /// it already carries.
    pub fn import(&mut self, entry: CatalogEntry) -> Result<&Quiz, QuizError> {
        let CatalogEntry {
            id,
            created_at,
            draft,
        } = entry;
        validate_draft(&draft)?;

        let id = id.unwrap_or_else(new_id);
        if self.get_by_id(&id).is_some() {
            return Err(QuizError::invalid("id", format!("duplicate quiz id {}", id)));
        }

        let questions = draft
            .questions
            .into_iter()
            .map(|q| Question {
                id: q.id.unwrap_or_else(new_id),
                text: q.text,
                options: q.options,
                correct_option_index: q.correct_option_index,
            })
            .collect();

        let created_by = if draft.created_by.trim().is_empty() {
            "Anonymous".to_string()
        } else {
            draft.created_by
        };

        let quiz = Quiz {
            id,
            title: draft.title,
            description: draft.description,
            created_by,
            created_at: created_at.unwrap_or_else(Utc::now),
            questions,
        };
        tracing::info!(quiz_id = %quiz.id, title = %quiz.title, "quiz added to catalog");

        self.quizzes.push(quiz);
        let index = self.quizzes.len() - 1;
        Ok(&self.quizzes[index])
    }

    /// Search, then narrow by category the way the listing page does.
    pub fn filter(&self, query: &str, category: Category) -> Vec<&Quiz> {
        let mut results = self.search(listing_query(query));
        if let Some(keyword) = category.keyword() {
            results.retain(|quiz| quiz.matches_lowercase(keyword));
        }
        results
    }

    pub fn summaries(&self, query: &str) -> Vec<QuizSummary> {
        self.search(listing_query(query))
            .into_iter()
            .map(Quiz::summary)
            .collect()
    }
}

/// A blank search box lists everything; anything else is searched as typed,
/// surrounding spaces included.
fn listing_query(query: &str) -> &str {
    if query.trim().is_empty() { "" } else { query }
}

impl QuizCatalog for Catalog {
    fn get_by_id(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| quiz.id == id)
    }

    fn search(&self, query: &str) -> Vec<&Quiz> {
        if query.is_empty() {
            return self.quizzes.iter().collect();
        }

        let needle = query.to_lowercase();
        self.quizzes
            .iter()
            .filter(|quiz| quiz.matches_lowercase(&needle))
            .collect()
    }
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Collect every problem with a draft at once, keyed by form field.
fn validate_draft(draft: &QuizDraft) -> Result<(), QuizError> {
    let mut errors = BTreeMap::new();

    if draft.title.trim().is_empty() {
        errors.insert("title".to_string(), "Quiz title is required".to_string());
    }
    if draft.description.trim().is_empty() {
        errors.insert(
            "description".to_string(),
            "Quiz description is required".to_string(),
        );
    }
    if draft.questions.is_empty() {
        errors.insert(
            "questions".to_string(),
            "A quiz needs at least one question".to_string(),
        );
    }

    for (q_index, question) in draft.questions.iter().enumerate() {
        if question.text.trim().is_empty() {
            errors.insert(
                format!("question_{}", q_index),
                "Question text is required".to_string(),
            );
        }
        for (o_index, option) in question.options.iter().enumerate() {
            if option.trim().is_empty() {
                errors.insert(
                    format!("question_{}_option_{}", q_index, o_index),
                    format!("Option {} is required", o_index + 1),
                );
            }
        }
        if question.correct_option_index >= question.options.len() {
            errors.insert(
                format!("question_{}_correct", q_index),
                "Correct option must be one of the options".to_string(),
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(QuizError::Validation(errors))
    }
}
