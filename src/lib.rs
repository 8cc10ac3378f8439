pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod search;
pub mod tools;
pub mod tracing;
pub mod types;

pub use config::Config;
pub use error::{ConfigError, IndexError, SearchError};
pub use format::{MenuEntry, MenuItem, render_menu};
pub use index::{IndexStore, LoadReport, SearchIndex, load_dir};
pub use search::{
    QueryPatterns, SearchHit, SearchOptions, SearchResults, build_pattern, rank_match, search,
};
pub use types::{Candidate, Category, UNNAMED};
