//! Style cache: at-most-one registration per canonical key.
//!
//! Process-lifetime map from [`StyleKey`] to [`StyleHandle`]. Entries are
//! never evicted — tokens are immutable for the life of the process, so a
//! registered style can never become stale. A failed build stores nothing,
//! so a corrected retry with the same key re-invokes the build closure.

use std::collections::HashMap;

use tracing::debug;

use crate::style::backend::{StyleHandle, StyleRegistrationError};
use crate::style::key::StyleKey;

/// Cache counters for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// The process-lifetime style cache.
#[derive(Debug, Default)]
pub struct StyleCache {
    entries: HashMap<StyleKey, StyleHandle>,
    hits: u64,
    misses: u64,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the handle for `key`, building and storing it on first use.
    ///
    /// On a hit the build closure is not invoked. On a miss it runs exactly
    /// once; if it fails, the error propagates and the cache is unchanged.
    pub fn resolve<F>(&mut self, key: StyleKey, build: F) -> Result<StyleHandle, StyleRegistrationError>
    where
        F: FnOnce(&StyleKey) -> Result<StyleHandle, StyleRegistrationError>,
    {
        if let Some(&handle) = self.entries.get(&key) {
            self.hits += 1;
            debug!(key = key.as_str(), "style cache hit");
            return Ok(handle);
        }

        let handle = build(&key)?;
        self.misses += 1;
        debug!(key = key.as_str(), "style cache miss, registered");
        self.entries.insert(key, handle);
        Ok(handle)
    }

    pub fn contains(&self, key: &StyleKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
