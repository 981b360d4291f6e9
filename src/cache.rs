//! In-memory sample cache: language -> category -> sample pool.
//!
//! Entries are added on first access and never evicted or refreshed.

use std::collections::HashMap;
use std::sync::Arc;

/// Ordered, non-empty list of samples for one (language, category).
pub type SamplePool = Arc<[String]>;

#[derive(Debug, Default)]
pub struct SampleCache {
    pools: HashMap<String, HashMap<String, SamplePool>>,
}

impl SampleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a pool is cached for the exact (language, category) pair.
    pub fn has(&self, language: &str, category: &str) -> bool {
        self.pools
            .get(language)
            .map(|categories| categories.contains_key(category))
            .unwrap_or(false)
    }

    pub fn get(&self, language: &str, category: &str) -> Option<SamplePool> {
        self.pools.get(language)?.get(category).cloned()
    }

    /// Store a pool unless one is already present, returning the cached pool.
    ///
    /// The first pool stored for a key wins, so concurrent populations of the
    /// same entry converge on one value.
    pub fn put(&mut self, language: &str, category: &str, samples: Vec<String>) -> SamplePool {
        self.pools
            .entry(language.to_string())
            .or_default()
            .entry(category.to_string())
            .or_insert_with(|| samples.into())
            .clone()
    }

    /// Number of cached (language, category) entries.
    pub fn len(&self) -> usize {
        self.pools.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
