//! Category-grouped result menu.

use super::highlight::{Highlighter, item_html, label_text};
use super::url::navigation_url;
use crate::index::SearchIndex;
use crate::search::SearchResults;
use crate::types::Category;
use serde::Serialize;

/// Shown when a search produced nothing.
pub const NO_RESULTS: &str = "No results found";

/// Shown ahead of partial results while the index is still loading.
pub const LOADING: &str = "Loading search index...";

/// A selectable result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub category: Category,
    /// Plain display name.
    pub name: String,
    /// Label text before highlighting, e.g. `java.util.List`.
    pub label: String,
    /// Accessible label, `"<category> : <name>"`.
    pub aria_label: String,
    /// Highlighted HTML.
    pub html: String,
    pub url: String,
}

/// One row of the rendered menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    Header { category: Category },
    Item(MenuItem),
    Placeholder { text: &'static str },
}

/// Renders search results into menu rows.
///
/// A header row precedes each run of results from one category. The loading
/// placeholder comes first while the index is incomplete, and an empty result
/// set renders as the single "no results" row.
pub fn render_menu(
    results: &SearchResults<'_>,
    index: &SearchIndex,
    base_path: &str,
) -> Vec<MenuEntry> {
    let highlighter = Highlighter::new(results.patterns());
    let packages = index.packages();
    let mut entries = Vec::with_capacity(results.len() + Category::ALL.len() + 1);

    if results.is_loading() {
        entries.push(MenuEntry::Placeholder { text: LOADING });
    }

    let mut current_category = None;
    for hit in results.hits() {
        if current_category != Some(hit.category) {
            entries.push(MenuEntry::Header {
                category: hit.category,
            });
            current_category = Some(hit.category);
        }
        entries.push(MenuEntry::Item(MenuItem {
            category: hit.category,
            name: hit.candidate.name.clone(),
            label: label_text(hit.category, hit.candidate).into_owned(),
            aria_label: format!("{} : {}", hit.category, hit.candidate.name),
            html: item_html(hit.category, hit.candidate, &highlighter),
            url: navigation_url(base_path, hit.category, hit.candidate, packages),
        }));
    }

    if entries.is_empty() {
        entries.push(MenuEntry::Placeholder { text: NO_RESULTS });
    }
    entries
}
