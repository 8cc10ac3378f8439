//! Runs a query across all category indexes.
//!
//! Each category is searched independently: a primary pass with the case-aware
//! pattern, then, if that finds too little, a case-insensitive pass with the
//! lowercase pattern. Category blocks are concatenated in [`Category::ALL`] order.

use super::pattern::{Matchers, QueryPatterns};
use super::scoring::{NameMatch, rank_match};
use crate::error::SearchError;
use crate::index::SearchIndex;
use crate::types::{Candidate, Category};
use ahash::AHashSet;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Scores at or above this are not results.
pub const RANKING_THRESHOLD: f64 = 2.0;

/// Per-category cap on primary and fallback results.
pub const MAX_RESULTS: usize = 500;

/// The fallback pass runs when the primary pass finds at most this many.
pub const MIN_RESULTS: usize = 3;

/// Tunables for [`search`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub ranking_threshold: f64,
    pub max_results: usize,
    pub min_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            ranking_threshold: RANKING_THRESHOLD,
            max_results: MAX_RESULTS,
            min_results: MIN_RESULTS,
        }
    }
}

/// Which matcher produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pass {
    Primary,
    Fallback,
}

/// A ranked candidate.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub category: Category,
    pub candidate: &'a Candidate,
    pub rank: f64,
    pub pass: Pass,
    /// Position of the candidate within its category index.
    pub position: usize,
}

/// Results of one query, along with the patterns used to produce them.
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    patterns: QueryPatterns,
    hits: Vec<SearchHit<'a>>,
    loading: bool,
}

impl<'a> SearchResults<'a> {
    pub fn patterns(&self) -> &QueryPatterns {
        &self.patterns
    }

    pub fn hits(&self) -> &[SearchHit<'a>] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// True when some category was not yet loaded; re-run once the index is ready.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Keeps only the first `limit` hits.
    pub fn truncate(&mut self, limit: usize) {
        self.hits.truncate(limit);
    }
}

/// The text a candidate is matched against.
///
/// Qualified names are only used when the query itself is qualified, so that a
/// plain `List` matches the type name rather than its package.
pub fn search_name<'c>(category: Category, candidate: &'c Candidate, query: &str) -> Cow<'c, str> {
    match category {
        Category::Module | Category::SearchTag => Cow::Borrowed(&candidate.name),
        Category::Package => match &candidate.module {
            Some(module) if query.contains('/') => {
                Cow::Owned(format!("{}/{}", module, candidate.name))
            }
            _ => Cow::Borrowed(&candidate.name),
        },
        Category::Type => match &candidate.package {
            Some(package) if query.contains('.') => {
                Cow::Owned(format!("{}.{}", package, candidate.name))
            }
            _ => Cow::Borrowed(&candidate.name),
        },
        Category::Member => match (&candidate.package, &candidate.class) {
            (Some(package), Some(class)) if query.contains('.') => {
                Cow::Owned(format!("{}.{}.{}", package, class, candidate.name))
            }
            _ => Cow::Borrowed(&candidate.name),
        },
    }
}

/// Ranks every candidate of one category with `matcher`, keeping those below the threshold.
///
/// Candidates the matcher does not find are never hits, whatever the threshold.
fn search_with_matcher<'a>(
    candidates: &'a [Candidate],
    category: Category,
    query: &str,
    matcher: &Regex,
    pass: Pass,
    options: &SearchOptions,
) -> Vec<SearchHit<'a>> {
    let mut hits = Vec::new();
    for (position, candidate) in candidates.iter().enumerate() {
        let name = search_name(category, candidate, query);
        let Some(name_match) = NameMatch::find(matcher, &name) else {
            continue;
        };
        let rank = rank_match(Some(&name_match), category);
        if rank < options.ranking_threshold {
            hits.push(SearchHit {
                category,
                candidate,
                rank,
                pass,
                position,
            });
            if hits.len() >= options.max_results {
                break;
            }
        }
    }
    // stable: ties keep index order
    hits.sort_by(|a, b| a.rank.total_cmp(&b.rank));
    hits
}

fn search_category<'a>(
    candidates: &'a [Candidate],
    category: Category,
    patterns: &QueryPatterns,
    matchers: &Matchers,
    options: &SearchOptions,
) -> Vec<SearchHit<'a>> {
    let query = patterns.query();
    let mut hits = search_with_matcher(
        candidates,
        category,
        query,
        &matchers.primary,
        Pass::Primary,
        options,
    );

    if hits.len() <= options.min_results && patterns.is_case_sensitive() {
        let seen: AHashSet<usize> = hits.iter().map(|hit| hit.position).collect();
        let fallback = search_with_matcher(
            candidates,
            category,
            query,
            &matchers.fallback,
            Pass::Fallback,
            options,
        );
        hits.extend(
            fallback
                .into_iter()
                .filter(|hit| !seen.contains(&hit.position)),
        );
    }

    hits
}

/// Searches all loaded categories for `query`.
///
/// Returns `Ok(None)` when the query is blank, meaning there is nothing to search
/// and any open result list should be closed.
pub fn search<'a>(
    query: &str,
    index: &'a SearchIndex,
    options: &SearchOptions,
) -> Result<Option<SearchResults<'a>>, SearchError> {
    let patterns = QueryPatterns::new(query);
    if patterns.is_empty() {
        return Ok(None);
    }
    let matchers = patterns.matchers()?;

    let mut hits = Vec::new();
    for category in Category::ALL {
        if let Some(candidates) = index.get(category) {
            hits.extend(search_category(
                candidates, category, &patterns, &matchers, options,
            ));
        }
    }

    let loading = !index.is_loaded();
    tracing::debug!(
        "Search for '{}' ({}): {} hits{}",
        query,
        patterns.primary(),
        hits.len(),
        if loading { ", index still loading" } else { "" }
    );

    Ok(Some(SearchResults {
        patterns,
        hits,
        loading,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::scoring::NO_MATCH;
    use assert2::check;
    use rstest::rstest;

    fn names<'a>(results: &'a SearchResults<'_>) -> Vec<&'a str> {
        results
            .hits()
            .iter()
            .map(|hit| hit.candidate.name.as_str())
            .collect()
    }

    #[rstest]
    #[case(Category::Type, "List", "List")]
    #[case(Category::Type, "util.List", "java.util.List")]
    #[case(Category::Member, "size", "size()")]
    #[case(Category::Member, "List.size", "java.util.List.size()")]
    #[case(Category::Package, "util", "java.util")]
    #[case(Category::Package, "base/util", "java.base/java.util")]
    fn test_search_name(#[case] category: Category, #[case] query: &str, #[case] expected: &str) {
        let candidate = match category {
            Category::Type => Candidate::new("List").with_package("java.util"),
            Category::Member => Candidate::new("size()")
                .with_package("java.util")
                .with_class("List"),
            _ => Candidate::new("java.util").with_module("java.base"),
        };
        check!(search_name(category, &candidate, query) == expected);
    }

    #[test]
    fn test_blank_query_is_not_searched() {
        let index = SearchIndex::new().fully_loaded();
        check!(search("  ", &index, &SearchOptions::default()).unwrap().is_none());
    }

    #[test]
    fn test_results_sorted_within_category() {
        let index = SearchIndex::new()
            .with(
                Category::Type,
                vec![
                    Candidate::new("ArrayList").with_package("java.util"),
                    Candidate::new("List").with_package("java.util"),
                    Candidate::new("LinkedList").with_package("java.util"),
                ],
            )
            .fully_loaded();
        let results = search("List", &index, &SearchOptions::default())
            .unwrap()
            .unwrap();
        check!(names(&results)[0] == "List");
        check!(results.len() == 3);
    }

    #[test]
    fn test_max_results_cap() {
        let candidates = (0..20)
            .map(|i| Candidate::new(format!("item{}", i)))
            .collect();
        let index = SearchIndex::new()
            .with(Category::SearchTag, candidates)
            .fully_loaded();
        let options = SearchOptions {
            max_results: 5,
            ..SearchOptions::default()
        };
        let results = search("item", &index, &options).unwrap().unwrap();
        check!(results.len() == 5);
    }

    #[test]
    fn test_threshold_excludes_weak_matches() {
        let index = SearchIndex::new()
            .with(Category::Module, vec![Candidate::new("remap")])
            .fully_loaded();
        // mid-word match scores 2.005
        let results = search("map", &index, &SearchOptions::default())
            .unwrap()
            .unwrap();
        check!(results.is_empty());
    }

    #[test]
    fn test_unmatched_candidates_excluded_under_any_threshold() {
        let index = SearchIndex::new()
            .with(
                Category::Module,
                vec![Candidate::new("java.base"), Candidate::new("zzz")],
            )
            .fully_loaded();
        let options = SearchOptions {
            ranking_threshold: 100_000.0,
            ..SearchOptions::default()
        };
        let results = search("java", &index, &options).unwrap().unwrap();
        check!(names(&results) == vec!["java.base"]);
        check!(results.hits().iter().all(|hit| hit.rank < NO_MATCH));
    }

    /// Three case-sensitive hits still allow the fallback; four do not.
    #[rstest]
    #[case(3, true)]
    #[case(4, false)]
    fn test_fallback_min_results_boundary(
        #[case] primary: usize,
        #[case] expect_fallback: bool,
    ) {
        let mut candidates: Vec<Candidate> = (0..primary)
            .map(|i| Candidate::new(format!("Map{}", i)))
            .collect();
        candidates.push(Candidate::new("mapping"));
        let index = SearchIndex::new()
            .with(Category::Module, candidates)
            .fully_loaded();

        let results = search("Map", &index, &SearchOptions::default())
            .unwrap()
            .unwrap();
        let fallback: Vec<_> = results
            .hits()
            .iter()
            .filter(|hit| hit.pass == Pass::Fallback)
            .map(|hit| hit.candidate.name.as_str())
            .collect();

        check!(results.patterns().is_case_sensitive());
        if expect_fallback {
            check!(fallback == vec!["mapping"]);
        } else {
            check!(fallback.is_empty());
            check!(results.len() == primary);
        }
    }

    #[test]
    fn test_loading_flag() {
        let index = SearchIndex::new().with(Category::Module, vec![Candidate::new("java.base")]);
        let results = search("java", &index, &SearchOptions::default())
            .unwrap()
            .unwrap();
        check!(results.is_loading());
        check!(results.len() == 1);
    }
}
