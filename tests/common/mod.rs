//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `java_index`: a small, fully loaded index modeled on the JDK documentation
//! - `index_dir`: a temporary directory with that index written as
//!   `*-search-index.js` files, the way the documentation generator emits them

use javadoc_search::{Candidate, Category, SearchIndex, UNNAMED};
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Records for each category of the sample index.
pub fn java_records(category: Category) -> Vec<Candidate> {
    match category {
        Category::Module => vec![
            Candidate::new("java.base"),
            Candidate::new("java.sql"),
        ],
        Category::Package => vec![
            Candidate::new("java.lang").with_module("java.base"),
            Candidate::new("java.util").with_module("java.base"),
            Candidate::new("java.util.concurrent").with_module("java.base"),
            Candidate::new("java.sql").with_module("java.sql"),
        ],
        Category::Type => vec![
            Candidate::new("ArrayIndexOutOfBoundsException").with_package("java.lang"),
            Candidate::new("ArrayList").with_package("java.util"),
            Candidate::new("HashMap").with_package("java.util"),
            Candidate::new("List").with_package("java.util"),
            Candidate::new("Object").with_package("java.lang"),
            Candidate::new("String").with_package("java.lang"),
            Candidate::new("StringBuilder").with_package("java.lang"),
            Candidate::new("ConcurrentHashMap").with_package("java.util.concurrent"),
            Candidate::new("Date").with_package("java.sql"),
            Candidate::new("Example").with_package(UNNAMED),
        ],
        Category::Member => vec![
            Candidate::new("hashCode()")
                .with_package("java.lang")
                .with_class("Object"),
            Candidate::new("equals(Object)")
                .with_package("java.lang")
                .with_class("Object")
                .with_url("equals(java.lang.Object)"),
            Candidate::new("length()")
                .with_package("java.lang")
                .with_class("String"),
            Candidate::new("size()")
                .with_package("java.util")
                .with_class("List"),
            Candidate::new("CASE_INSENSITIVE_ORDER")
                .with_package("java.lang")
                .with_class("String"),
        ],
        Category::SearchTag => vec![
            Candidate::new("regular expressions")
                .with_holder("java.util.regex.Pattern")
                .with_description("Regular expression syntax")
                .with_url("java.base/java/util/regex/Pattern.html#sum"),
        ],
    }
}

/// A fully loaded sample index.
#[allow(dead_code)] // Fixtures used across different integration test crates
#[fixture]
pub fn java_index() -> SearchIndex {
    Category::ALL
        .into_iter()
        .fold(SearchIndex::new(), |index, category| {
            index.with(category, java_records(category))
        })
}

#[allow(dead_code)]
/// Writes one category's records as a generated index script.
pub fn index_script(category: Category, records: &[Candidate]) -> String {
    let json = serde_json::to_string(records).expect("Failed to serialize records");
    format!("{} = {};updateSearchResults();", category.variable_name(), json)
}

/// A temporary directory holding index files.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct IndexDir {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl IndexDir {
    /// Creates an empty index directory.
    pub fn empty() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Creates a directory containing every category of the sample index.
    pub fn with_java_index() -> Self {
        let dir = Self::empty();
        for category in Category::ALL {
            dir.write_category(category, &java_records(category));
        }
        dir
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes `records` as the category's index script.
    pub fn write_category(&self, category: Category, records: &[Candidate]) {
        self.write_raw(category, &index_script(category, records));
    }

    /// Writes arbitrary contents to the category's index file.
    ///
    /// # Panics
    /// Panics if writing fails.
    pub fn write_raw(&self, category: Category, contents: &str) {
        let path = self.root.join(category.file_name());
        std::fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("Failed to write '{}': {}", path.display(), e));
    }

    /// Removes the category's index file.
    pub fn remove(&self, category: Category) {
        let _ = std::fs::remove_file(self.root.join(category.file_name()));
    }
}

#[allow(dead_code)]
#[fixture]
pub fn index_dir() -> IndexDir {
    IndexDir::with_java_index()
}
