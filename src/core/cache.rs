//! In-memory response cache keyed by endpoint key
//!
//! Entries expire lazily: a read that finds an entry at or past its
//! time-to-live treats it as a miss and drops it. `purge_expired` is an
//! optional eager sweep. Without a capacity the map is unbounded; with one,
//! the least recently used entry is evicted first.

use lru::LruCache;
use serde_json::Value;
use std::{
    num::NonZeroUsize,
    time::{Duration, Instant},
};

struct CacheEntry {
    payload: Value,
    inserted_at: Instant,
}

/// Payload cache with a fixed time-to-live for every entry.
pub struct ResponseCache {
    entries: LruCache<String, CacheEntry>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(ttl: Duration, capacity: Option<NonZeroUsize>) -> Self {
        let entries = match capacity {
            Some(capacity) => LruCache::new(capacity),
            None => LruCache::unbounded(),
        };
        Self { entries, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh payload stored under `key`, if any.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        self.get_at(key, Instant::now())
    }

    pub(crate) fn get_at(&mut self, key: &str, now: Instant) -> Option<Value> {
        let ttl = self.ttl;
        match self.entries.get(key) {
            None => return None,
            Some(entry) if is_fresh(entry, ttl, now) => return Some(entry.payload.clone()),
            Some(_) => {}
        }
        self.entries.pop(key);
        None
    }

    /// Store `payload` under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, payload: Value) {
        self.insert_at(key, payload, Instant::now());
    }

    pub(crate) fn insert_at(&mut self, key: impl Into<String>, payload: Value, now: Instant) {
        self.entries.put(
            key.into(),
            CacheEntry {
                payload,
                inserted_at: now,
            },
        );
    }

    /// Remove every expired entry and return how many were dropped.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    pub(crate) fn purge_expired_at(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| !is_fresh(entry, ttl, now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.entries.pop(key.as_str());
        }
        expired.len()
    }

    /// Number of physically stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn is_fresh(entry: &CacheEntry, ttl: Duration, now: Instant) -> bool {
    now.saturating_duration_since(entry.inserted_at) < ttl
}
