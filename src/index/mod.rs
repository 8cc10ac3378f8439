//! Category indexes: the in-memory store and the loader that fills it.

pub mod loader;
pub mod store;

pub use loader::{LoadReport, load_category, load_dir, parse_index};
pub use store::{IndexStore, SearchIndex};
