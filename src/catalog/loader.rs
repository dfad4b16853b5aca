use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::models::QuizDraft;

use super::Catalog;

/// One quiz in a catalog file. `id` and `createdAt` are optional; quizzes
/// without them are treated like freshly created ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub draft: QuizDraft,
}

/// Load a catalog from a JSON file holding an array of quizzes.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, QuizError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| QuizError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = load_catalog_from_str(&json_content)?;
    tracing::info!(path = %path.display(), quizzes = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Write every quiz in the catalog to `path` as a JSON array.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<(), QuizError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(catalog.quizzes())?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), quizzes = catalog.len(), "catalog saved");
    Ok(())
}

pub fn load_catalog_from_str(json: &str) -> Result<Catalog, QuizError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;

    if entries.is_empty() {
        return Err(QuizError::invalid(
            "catalog",
            "catalog must contain at least one quiz",
        ));
    }

    let mut catalog = Catalog::new();
    for entry in entries {
        catalog.import(entry)?;
    }
    Ok(catalog)
}
