//! Camel-case aware autocomplete search over documentation indexes.
//!
//! This module provides pattern construction from user queries, match ranking,
//! and the per-category search that combines them.

// Module declarations
pub mod pattern;
pub mod query;
pub mod scoring;

// Public re-exports (used via lib.rs)
pub use pattern::{Matchers, QueryPatterns, build_pattern};
pub use query::{
    MAX_RESULTS, MIN_RESULTS, Pass, RANKING_THRESHOLD, SearchHit, SearchOptions, SearchResults,
    search, search_name,
};
pub use scoring::{NO_MATCH, NameMatch, rank_match};
