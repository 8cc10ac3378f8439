//! Search command handler: loads an index directory and prints ranked results.

use crate::error::Result;
use crate::format::{MenuEntry, render_menu};
use crate::index::{IndexStore, SearchIndex, load_dir};
use crate::search::{SearchOptions, search};
use anyhow::{Context, bail};
use std::{fmt::Write as _, path::PathBuf, sync::Arc};
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Search query term
    pub query: String,
    /// Directory holding the index files
    pub index_dir: PathBuf,
    /// Prefix for result URLs
    pub base_path: String,
    /// Maximum number of results to print
    pub limit: usize,
    /// Emit JSON instead of text
    pub json: bool,
    pub options: SearchOptions,
}

/// Menu rows for one query against one snapshot, plus whether the index was complete.
fn run_query(
    index: &SearchIndex,
    request: &SearchRequest,
) -> Result<Option<(Vec<MenuEntry>, bool)>> {
    let Some(mut results) = search(&request.query, index, &request.options)? else {
        return Ok(None);
    };
    results.truncate(request.limit);
    let loading = results.is_loading();
    Ok(Some((
        render_menu(&results, index, &request.base_path),
        loading,
    )))
}

/// Execute a search against the index files in `request.index_dir`.
///
/// The first search runs as soon as loading starts. If the index is not yet
/// complete, the search is repeated once the store reports it ready.
pub async fn handle_search(request: SearchRequest) -> Result<String> {
    let store = Arc::new(IndexStore::new());
    let loader = tokio::spawn({
        let store = Arc::clone(&store);
        let dir = request.index_dir.clone();
        async move { load_dir(&dir, &store).await }
    });

    let Some((mut entries, loading)) = run_query(&store.snapshot(), &request)? else {
        tracing::debug!("Blank query, nothing to search");
        loader.abort();
        return Ok(String::new());
    };

    let (ready_tx, ready_rx) = oneshot::channel();
    if loading {
        tracing::debug!("Search index incomplete, re-running search once it is loaded");
        store.on_index_ready(move || {
            let _ = ready_tx.send(());
        });
    }

    let report = loader.await.context("Index loader task failed")?;
    if report.loaded.is_empty() {
        let reasons: Vec<String> = report.errors.iter().map(ToString::to_string).collect();
        bail!(
            "No search index could be loaded from {}:\n{}",
            request.index_dir.display(),
            reasons.join("\n")
        );
    }

    if loading {
        ready_rx
            .await
            .context("Search index never became ready")?;
        if let Some((refreshed, _)) = run_query(&store.snapshot(), &request)? {
            entries = refreshed;
        }
    }

    if request.json {
        return serde_json::to_string_pretty(&entries).context("Failed to serialize results");
    }
    Ok(format_entries(&entries, &request.query)?)
}

/// Format menu rows into a readable string output.
fn format_entries(
    entries: &[MenuEntry],
    query: &str,
) -> std::result::Result<String, std::fmt::Error> {
    let mut output = String::new();

    for entry in entries {
        match entry {
            MenuEntry::Header { category } => {
                if !output.is_empty() {
                    writeln!(output)?;
                }
                writeln!(output, "{}:", category)?;
            }
            MenuEntry::Item(item) => {
                writeln!(output, "  {}  ->  {}", item.label, item.url)?;
            }
            MenuEntry::Placeholder { text } => {
                writeln!(output, "{} for '{}'.", text, query)?;
                if entries.len() == 1 {
                    writeln!(output, "\nSearch tips:")?;
                    writeln!(
                        output,
                        "• Abbreviate camel-case names: 'AIOOBE' finds ArrayIndexOutOfBoundsException"
                    )?;
                    writeln!(
                        output,
                        "• Qualify with a package to match full names: 'util.List'"
                    )?;
                    writeln!(output, "• Start with a method name and '(' to match signatures")?;
                }
            }
        }
    }

    Ok(output)
}
