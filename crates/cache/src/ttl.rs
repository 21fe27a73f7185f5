use crate::clock::Clock;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

/// Cache entry with its expiry instant.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    /// An entry is stale from its expiry instant onwards.
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// A keyed cache whose entries expire a fixed time after insertion.
pub struct TtlCache<K, V> {
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub total_entries: usize,
    pub expired_entries: usize,
    pub active_entries: usize,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Debug,
    V: Clone,
{
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns a clone of the value if present and still fresh.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let entries = self.entries.read().ok()?;
        match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                tracing::debug!(?key, "cache hit");
                Some(entry.value.clone())
            }
            Some(_) => {
                tracing::debug!(?key, "cache entry expired");
                None
            }
            None => None,
        }
    }

    /// Inserts with the cache's TTL, replacing any previous entry.
    ///
    /// An expiry past the representable range saturates to the latest instant.
    pub fn insert(&self, key: K, value: V) {
        let expires_at = self
            .clock
            .now()
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let entry = CacheEntry { value, expires_at };
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key, entry);
        }
    }

    /// Drops every entry whose TTL has elapsed.
    pub fn clear_expired(&self) {
        let now = self.clock.now();
        if let Ok(mut entries) = self.entries.write() {
            let before = entries.len();
            entries.retain(|_, entry| !entry.is_expired(now));
            let evicted = before - entries.len();
            if evicted > 0 {
                tracing::debug!(evicted, "evicted expired cache entries");
            }
        }
    }

    pub fn stats(&self) -> CacheStats {
        let now = self.clock.now();
        let (total, expired) = self
            .entries
            .read()
            .map(|entries| {
                let expired = entries.values().filter(|e| e.is_expired(now)).count();
                (entries.len(), expired)
            })
            .unwrap_or((0, 0));

        CacheStats {
            total_entries: total,
            expired_entries: expired,
            active_entries: total - expired,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
