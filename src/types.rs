//! Core data types: index categories and the records they hold.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Package name used by the index for the unnamed package.
pub const UNNAMED: &str = "<Unnamed>";

/// One of the five documentation indexes.
///
/// The order of [`Category::ALL`] is the order in which results are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Module,
    Package,
    Type,
    Member,
    SearchTag,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Module,
        Self::Package,
        Self::Type,
        Self::Member,
        Self::SearchTag,
    ];

    /// Heading shown above this category's results.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Module => "Modules",
            Self::Package => "Packages",
            Self::Type => "Classes and Interfaces",
            Self::Member => "Members",
            Self::SearchTag => "Search Tags",
        }
    }

    /// Stem shared by the index file name and the variable it assigns.
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Package => "package",
            Self::Type => "type",
            Self::Member => "member",
            Self::SearchTag => "tag",
        }
    }

    /// `module-search-index.js`, `tag-search-index.js`, ...
    pub fn file_name(self) -> String {
        format!("{}-search-index.js", self.file_stem())
    }

    /// `moduleSearchIndex`, `tagSearchIndex`, ...
    pub fn variable_name(self) -> String {
        format!("{}SearchIndex", self.file_stem())
    }

    pub(crate) const fn ordinal(self) -> usize {
        match self {
            Self::Module => 0,
            Self::Package => 1,
            Self::Type => 2,
            Self::Member => 3,
            Self::SearchTag => 4,
        }
    }

    /// Delimiter separating qualifiers from the primary name.
    pub(crate) const fn qualifier_delimiter(self) -> char {
        match self {
            Self::Package => '/',
            _ => '.',
        }
    }

    /// Which fields a record of this category must carry.
    pub(crate) fn missing_field(self, candidate: &Candidate) -> Option<&'static str> {
        match self {
            Self::Module | Self::Package => None,
            Self::Type => candidate.package.is_none().then_some("p"),
            Self::Member => {
                if candidate.package.is_none() {
                    Some("p")
                } else if candidate.class.is_none() {
                    Some("c")
                } else {
                    None
                }
            }
            Self::SearchTag => candidate.url.is_none().then_some("u"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single searchable record, serialized with the index's short field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Display name
    #[serde(rename = "l")]
    pub name: String,
    /// Enclosing package
    #[serde(rename = "p", default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Enclosing class (members only)
    #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Owning module
    #[serde(rename = "m", default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Explicit URL or member anchor
    #[serde(rename = "u", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Search tag description
    #[serde(rename = "d", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Search tag holder
    #[serde(rename = "h", default, skip_serializing_if = "Option::is_none")]
    pub holder: Option<String>,
}

impl Candidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_holder(mut self, holder: impl Into<String>) -> Self {
        self.holder = Some(holder.into());
        self
    }

    /// The package, unless absent or the unnamed package.
    pub fn named_package(&self) -> Option<&str> {
        self.package.as_deref().filter(|p| *p != UNNAMED)
    }
}
