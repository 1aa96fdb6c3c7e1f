//! Per-instance cache of converted field values.
//!
//! Converting a raw value allocates (nested maps become new struct handles,
//! sequences become new immutable slices), so each struct remembers what it
//! handed out under the field's canonical key. Handing out the cached value
//! again keeps nested structs identity-stable across lookups.
//!
//! There is no eviction: entries live until [`ValueCache::invalidate`] is
//! called for a written key or the whole cache is [cleared](ValueCache::clear).

use std::collections::HashMap;

use crate::Field;

/// Mapping from canonical key to the converted value previously returned for it.
#[derive(Debug, Default)]
pub struct ValueCache {
    entries: HashMap<String, Field>,
}

impl ValueCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `canonical`, computing and storing it on a miss.
    ///
    /// A computation that yields `None` (the key is absent) is not cached.
    pub fn get_or_compute<F>(&mut self, canonical: &str, compute: F) -> Option<Field>
    where
        F: FnOnce() -> Option<Field>,
    {
        if let Some(hit) = self.entries.get(canonical) {
            tracing::trace!(key = canonical, "field cache hit");
            return Some(hit.clone());
        }

        let computed = compute()?;
        tracing::trace!(key = canonical, kind = computed.type_name(), "field cache fill");
        self.entries.insert(canonical.to_string(), computed.clone());
        Some(computed)
    }

    /// Returns the cached value without computing anything
    pub fn get(&self, canonical: &str) -> Option<&Field> {
        self.entries.get(canonical)
    }

    /// Drops the entry for `canonical`, returning whether one was present
    pub fn invalidate(&mut self, canonical: &str) -> bool {
        let removed = self.entries.remove(canonical).is_some();
        if removed {
            tracing::trace!(key = canonical, "field cache invalidated");
        }
        removed
    }

    /// Drops every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
