//! In-memory category indexes and their loading state.

use crate::types::{Candidate, Category};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Callback run once every category index has been loaded.
type ReadyCallback = Box<dyn FnOnce() + Send + 'static>;

/// The five category indexes as seen by one search.
///
/// A category that has not been loaded yet is `None` and contributes no results.
/// Cloning is cheap: each category is a shared slice.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    categories: [Option<Arc<[Candidate]>>; 5],
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`SearchIndex::set`].
    pub fn with(mut self, category: Category, candidates: Vec<Candidate>) -> Self {
        self.set(category, candidates);
        self
    }

    /// Same index with every category present, loaded or not.
    pub fn fully_loaded(mut self) -> Self {
        for slot in &mut self.categories {
            slot.get_or_insert_with(|| Arc::from(Vec::new()));
        }
        self
    }

    pub fn set(&mut self, category: Category, candidates: Vec<Candidate>) {
        self.categories[category.ordinal()] = Some(Arc::from(candidates));
    }

    pub fn get(&self, category: Category) -> Option<&[Candidate]> {
        self.categories[category.ordinal()].as_deref()
    }

    pub fn is_category_loaded(&self, category: Category) -> bool {
        self.categories[category.ordinal()].is_some()
    }

    /// True once all five categories are present.
    pub fn is_loaded(&self) -> bool {
        self.categories.iter().all(Option::is_some)
    }

    /// Packages, used to resolve module prefixes of types and members.
    pub fn packages(&self) -> &[Candidate] {
        self.get(Category::Package).unwrap_or_default()
    }

    /// Total number of records across loaded categories.
    pub fn len(&self) -> usize {
        self.categories.iter().flatten().map(|c| c.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared, incrementally filled index.
///
/// Loaders call [`IndexStore::insert`] as each category arrives; searches take a
/// [`SearchIndex`] snapshot. When the last category is inserted, every callback
/// registered through [`IndexStore::on_index_ready`] runs exactly once.
pub struct IndexStore {
    index: RwLock<SearchIndex>,
    waiters: Mutex<Vec<ReadyCallback>>,
}

impl std::fmt::Debug for IndexStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexStore")
            .field("loaded", &self.is_loaded())
            .field("waiters", &self.lock_waiters().len())
            .finish()
    }
}

impl Default for IndexStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexStore {
    pub fn new() -> Self {
        Self {
            index: RwLock::new(SearchIndex::new()),
            waiters: Mutex::new(Vec::new()),
        }
    }

    /// A store whose categories are all already present.
    pub fn from_index(index: SearchIndex) -> Self {
        let store = Self::new();
        *store.write_index() = index;
        store
    }

    fn read_index(&self) -> std::sync::RwLockReadGuard<'_, SearchIndex> {
        self.index.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_index(&self) -> std::sync::RwLockWriteGuard<'_, SearchIndex> {
        self.index.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_waiters(&self) -> std::sync::MutexGuard<'_, Vec<ReadyCallback>> {
        self.waiters.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current state of all categories.
    pub fn snapshot(&self) -> SearchIndex {
        self.read_index().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.read_index().is_loaded()
    }

    /// Stores a category's records, firing ready callbacks if this completes the index.
    pub fn insert(&self, category: Category, candidates: Vec<Candidate>) {
        tracing::debug!("Loaded {} index ({} entries)", category, candidates.len());

        let loaded = {
            let mut index = self.write_index();
            index.set(category, candidates);
            index.is_loaded()
        };
        if !loaded {
            return;
        }

        let callbacks = std::mem::take(&mut *self.lock_waiters());
        if !callbacks.is_empty() {
            tracing::debug!("Search index ready, running {} callbacks", callbacks.len());
        }
        for callback in callbacks {
            callback();
        }
    }

    /// Runs `callback` once the index is fully loaded (immediately if it already is).
    pub fn on_index_ready<F>(&self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut waiters = self.lock_waiters();
        if self.is_loaded() {
            drop(waiters);
            callback();
        } else {
            waiters.push(Box::new(callback));
        }
    }
}
