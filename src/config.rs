//! Configuration file handling.

use crate::error::ConfigError;
use crate::search::SearchOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings read from `config.toml`; command-line flags take precedence.
///
/// ```toml
/// index_dir = "~/docs/api"
/// base_path = "https://docs.example.com/api/"
///
/// [search]
/// max_results = 100
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the `*-search-index.js` files
    pub index_dir: Option<PathBuf>,
    /// Prefix joined to every result URL
    pub base_path: String,
    pub search: SearchOptions,
}

impl Config {
    /// `<config dir>/javadoc-search/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("javadoc-search").join("config.toml"))
    }

    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents, path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads an explicitly requested file, or the default file if it exists.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Index directory with `~` expanded.
    pub fn index_dir(&self) -> Option<PathBuf> {
        self.index_dir.as_deref().map(expand_home)
    }
}

/// Resolves a leading `~` component against the home directory.
///
/// `~user` forms and paths without a leading `~` are returned as given, as is
/// everything when no home directory is known.
fn expand_home(path: &Path) -> PathBuf {
    let (Ok(rest), Some(home)) = (path.strip_prefix("~"), dirs::home_dir()) else {
        return path.to_path_buf();
    };
    if rest.as_os_str().is_empty() {
        home
    } else {
        home.join(rest)
    }
}
