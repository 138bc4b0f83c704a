//! In-memory response cache keyed by request fingerprint

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::time::Instant;

use super::RequestOptions;

/// Builds the cache key for a request: the URL followed by the serialized options
pub fn fingerprint(url: &str, options: &RequestOptions) -> String {
    // Options hold only strings and ordered maps, so serialization cannot fail.
    let serialized = serde_json::to_string(options).unwrap_or_default();
    format!("{}{}", url, serialized)
}

/// A stored response
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Fingerprint the entry is stored under
    pub key: String,
    /// Parsed response body
    pub data: Value,
    /// When the entry was stored, on the runtime clock
    pub stored_at: Instant,
    /// Wall-clock time of the store, for display
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    fn new(key: String, data: Value) -> Self {
        Self {
            key,
            data,
            stored_at: Instant::now(),
            fetched_at: Utc::now(),
        }
    }

    /// An entry is fresh while its age is strictly below the window
    pub fn is_fresh(&self, now: Instant, window: Duration) -> bool {
        now.saturating_duration_since(self.stored_at) < window
    }
}

/// Fingerprint-to-response map with lazy, read-time expiry
///
/// The lock is only taken for synchronous map operations and never held
/// across an `.await`.
#[derive(Debug)]
pub struct RequestCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    freshness_window: Duration,
}

impl RequestCache {
    pub fn new(freshness_window: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            freshness_window,
        }
    }

    pub fn freshness_window(&self) -> Duration {
        self.freshness_window
    }

    /// Returns the stored data if an entry exists and is still fresh
    ///
    /// Stale entries are left in place; the next successful fetch replaces them.
    pub fn get_fresh(&self, key: &str) -> Option<Value> {
        let entries = self.lock();
        let entry = entries.get(key)?;
        if entry.is_fresh(Instant::now(), self.freshness_window) {
            Some(entry.data.clone())
        } else {
            None
        }
    }

    /// Returns a copy of the entry regardless of freshness
    pub fn entry(&self, key: &str) -> Option<CacheEntry> {
        self.lock().get(key).cloned()
    }

    /// Stores data under the key, replacing any previous entry
    pub fn insert(&self, key: String, data: Value) {
        let entry = CacheEntry::new(key.clone(), data);
        self.lock().insert(key, entry);
    }

    /// Removes every entry
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
