//! Short-lived cache of list responses, keyed by resource + full query.
//!
//! Entries are stored as JSON so one cache can hold every list type. Any
//! mutation of a resource drops all of that resource's entries.

use contracts::shared::list_query::{ListQuery, ListResponse};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

use crate::shared::config::config;

/// How long a list stays fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Lists that change often (items, requests, users).
    Volatile,
    /// Near-static dropdown sources (kategori, supplier).
    Reference,
}

impl CachePolicy {
    pub fn ttl_ms(&self) -> f64 {
        let cache = &config().cache;
        let secs = match self {
            CachePolicy::Volatile => cache.volatile_ttl_secs,
            CachePolicy::Reference => cache.reference_ttl_secs,
        };
        f64::from(secs) * 1000.0
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    resource: String,
    value: Value,
    expires_at_ms: f64,
}

/// Entries plus an invalidation epoch per resource. A write carries the
/// epoch read when its request started and is ignored once the resource
/// has been invalidated since.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: HashMap<String, CacheEntry>,
    epochs: HashMap<String, u64>,
    counter: u64,
    cleared_at: u64,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str, now_ms: f64) -> Option<&Value> {
        self.entries
            .get(key)
            .filter(|e| now_ms < e.expires_at_ms)
            .map(|e| &e.value)
    }

    pub fn epoch(&self, resource: &str) -> u64 {
        self.epochs
            .get(resource)
            .copied()
            .unwrap_or(0)
            .max(self.cleared_at)
    }

    /// Stores `value` unless `resource` was invalidated after `epoch`.
    pub fn put(
        &mut self,
        resource: &str,
        epoch: u64,
        key: String,
        value: Value,
        ttl_ms: f64,
        now_ms: f64,
    ) -> bool {
        if epoch < self.epoch(resource) {
            return false;
        }
        self.entries.insert(
            key,
            CacheEntry {
                resource: resource.to_string(),
                value,
                expires_at_ms: now_ms + ttl_ms,
            },
        );
        true
    }

    /// Drops every entry of `resource`; returns how many were removed.
    pub fn invalidate(&mut self, resource: &str) -> usize {
        self.counter += 1;
        self.epochs.insert(resource.to_string(), self.counter);
        let before = self.entries.len();
        self.entries.retain(|_, e| e.resource != resource);
        before - self.entries.len()
    }

    pub fn purge_expired(&mut self, now_ms: f64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| now_ms < e.expires_at_ms);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.counter += 1;
        self.cleared_at = self.counter;
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// App-wide handle to the cache, provided via context.
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: StoredValue<QueryCache>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            cache: StoredValue::new(QueryCache::new()),
        }
    }

    pub fn get_list<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &ListQuery,
    ) -> Option<ListResponse<T>> {
        let key = query.cache_key(resource);
        let now = now_ms();
        let hit = self
            .cache
            .with_value(|c| c.get(&key, now).cloned())
            .and_then(|v| serde_json::from_value(v).ok());
        if hit.is_some() {
            log::debug!("cache hit: {}", key);
        }
        hit
    }

    /// Current invalidation epoch of `resource`; read it before fetching.
    pub fn epoch(&self, resource: &str) -> u64 {
        self.cache
            .try_with_value(|c| c.epoch(resource))
            .unwrap_or(0)
    }

    /// Caches a serialized list response if `resource` has not been
    /// invalidated since `epoch`.
    pub fn put_value(
        &self,
        resource: &str,
        epoch: u64,
        query: &ListQuery,
        value: Value,
        policy: CachePolicy,
    ) {
        let key = query.cache_key(resource);
        let now = now_ms();
        let stored = self.cache.try_update_value(|c| {
            c.purge_expired(now);
            c.put(resource, epoch, key, value, policy.ttl_ms(), now)
        });
        if stored != Some(true) {
            log::debug!("skipped caching stale {} list", resource);
        }
    }

    pub fn invalidate(&self, resource: &str) {
        let removed = self.cache.try_update_value(|c| c.invalidate(resource));
        log::debug!("cache invalidated: {} ({:?} entries)", resource, removed);
    }

    /// Drops everything, e.g. when the session ends.
    pub fn clear(&self) {
        self.cache.try_update_value(|c| c.clear());
        log::debug!("cache cleared");
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entries_expire_after_ttl() {
        let mut cache = QueryCache::new();
        cache.put("barang", 0, "barang?page=1".into(), json!([1]), 30_000.0, 1_000.0);
        assert!(cache.get("barang?page=1", 30_999.0).is_some());
        assert!(cache.get("barang?page=1", 31_000.0).is_none());
        assert_eq!(cache.purge_expired(31_000.0), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalidate_drops_only_that_resource() {
        let mut cache = QueryCache::new();
        cache.put("barang", 0, "barang?page=1".into(), json!([]), 30_000.0, 0.0);
        cache.put("barang", 0, "barang?page=2".into(), json!([]), 30_000.0, 0.0);
        cache.put("kategori", 0, "kategori?page=1".into(), json!([]), 300_000.0, 0.0);
        assert_eq!(cache.invalidate("barang"), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("kategori?page=1", 1.0).is_some());
    }

    #[test]
    fn test_put_after_invalidate_with_old_epoch_is_ignored() {
        let mut cache = QueryCache::new();
        let started = cache.epoch("barang");
        cache.put("barang", started, "barang?page=1".into(), json!([1]), 30_000.0, 0.0);

        cache.invalidate("barang");
        let fresh = cache.epoch("barang");
        assert!(cache.put("barang", fresh, "barang?page=1".into(), json!([1, 2]), 30_000.0, 0.0));

        // response of the request that started before the mutation
        assert!(!cache.put("barang", started, "barang?page=1".into(), json!([1]), 30_000.0, 0.0));
        assert_eq!(cache.get("barang?page=1", 1.0), Some(&json!([1, 2])));
    }

    #[test]
    fn test_invalidate_keeps_other_resources_epoch() {
        let mut cache = QueryCache::new();
        let kategori = cache.epoch("kategori");
        cache.invalidate("barang");
        assert!(cache.put("kategori", kategori, "kategori?page=1".into(), json!([]), 300_000.0, 0.0));
    }

    #[test]
    fn test_clear_outdates_every_epoch() {
        let mut cache = QueryCache::new();
        let barang = cache.epoch("barang");
        cache.invalidate("kategori");
        let kategori = cache.epoch("kategori");
        cache.clear();
        assert!(!cache.put("barang", barang, "barang?page=1".into(), json!([]), 30_000.0, 0.0));
        assert!(!cache.put("kategori", kategori, "kategori?page=1".into(), json!([]), 300_000.0, 0.0));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_reference_lists_live_longer() {
        assert_eq!(CachePolicy::Volatile.ttl_ms(), 30_000.0);
        assert_eq!(CachePolicy::Reference.ttl_ms(), 300_000.0);
    }
}
