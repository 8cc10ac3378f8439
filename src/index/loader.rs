//! Reads generated `*-search-index.js` files into an [`IndexStore`].

use super::store::IndexStore;
use crate::error::IndexError;
use crate::types::{Candidate, Category};
use futures::future::join_all;
use serde_json::Value;
use std::path::Path;

/// Outcome of loading a directory of index files.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Categories that loaded, with their record counts.
    pub loaded: Vec<(Category, usize)>,
    /// Categories that failed; these are stored as empty.
    pub errors: Vec<IndexError>,
}

impl LoadReport {
    pub fn total_records(&self) -> usize {
        self.loaded.iter().map(|(_, count)| count).sum()
    }
}

/// Extracts the JSON array from an index script.
///
/// Accepts `typeSearchIndex = [...];updateSearchResults();` as written by the
/// documentation generator, or a bare JSON array.
fn strip_script(category: Category, contents: &str) -> Result<&str, IndexError> {
    let trimmed = contents.trim_start_matches('\u{feff}').trim();
    if trimmed.starts_with('[') {
        return Ok(trimmed);
    }

    let format_error = |reason: &str| IndexError::Format {
        category,
        reason: reason.to_string(),
    };

    let rest = trimmed
        .strip_prefix(category.variable_name().as_str())
        .and_then(|rest| rest.trim_start().strip_prefix('='))
        .ok_or_else(|| {
            format_error(&format!(
                "expected `{} = [...]`",
                category.variable_name()
            ))
        })?
        .trim_start();

    if !rest.starts_with('[') {
        return Err(format_error("assignment is not an array"));
    }
    let end = rest
        .rfind(']')
        .ok_or_else(|| format_error("unterminated array"))?;
    Ok(&rest[..=end])
}

/// Converts one record, or explains why it was skipped.
fn parse_record(category: Category, value: Value) -> Result<Candidate, String> {
    let candidate: Candidate = serde_json::from_value(value).map_err(|e| e.to_string())?;
    match category.missing_field(&candidate) {
        Some(field) => Err(format!("missing field `{}`", field)),
        None => Ok(candidate),
    }
}

/// Parses the contents of one category's index file.
///
/// Malformed records are logged and skipped; only an unreadable payload fails.
pub fn parse_index(category: Category, contents: &str) -> Result<Vec<Candidate>, IndexError> {
    let payload = strip_script(category, contents)?;
    let values: Vec<Value> = serde_json::from_str(payload)
        .map_err(|source| IndexError::Parse { category, source })?;

    let total = values.len();
    let candidates: Vec<Candidate> = values
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| match parse_record(category, value) {
            Ok(candidate) => Some(candidate),
            Err(reason) => {
                tracing::warn!(
                    "Skipping malformed {} record #{}: {}",
                    category,
                    position,
                    reason
                );
                None
            }
        })
        .collect();

    if candidates.len() < total {
        tracing::info!(
            "Loaded {}/{} {} records",
            candidates.len(),
            total,
            category
        );
    }
    Ok(candidates)
}

/// Reads and parses one category's index file from `dir`.
pub async fn load_category(dir: &Path, category: Category) -> Result<Vec<Candidate>, IndexError> {
    let path = dir.join(category.file_name());
    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| IndexError::Io {
            category,
            path: path.clone(),
            source,
        })?;
    parse_index(category, &contents)
}

/// Loads all five categories from `dir` concurrently, inserting each into `store`
/// as soon as it is parsed.
///
/// A category that fails to load is inserted empty so that the index still
/// becomes ready and pending searches are re-run.
pub async fn load_dir(dir: &Path, store: &IndexStore) -> LoadReport {
    let start = std::time::Instant::now();
    tracing::info!("Loading search index from {}", dir.display());

    let loads = Category::ALL.map(|category| async move {
        let result = load_category(dir, category).await;
        match result {
            Ok(candidates) => {
                let count = candidates.len();
                store.insert(category, candidates);
                Ok((category, count))
            }
            Err(e) => {
                tracing::warn!("{}", e);
                store.insert(category, Vec::new());
                Err(e)
            }
        }
    });

    let mut report = LoadReport::default();
    for result in join_all(loads).await {
        match result {
            Ok(loaded) => report.loaded.push(loaded),
            Err(e) => report.errors.push(e),
        }
    }

    tracing::info!(
        "Search index loaded: {} records, {} failed categories in {:?}",
        report.total_records(),
        report.errors.len(),
        start.elapsed()
    );
    report
}
