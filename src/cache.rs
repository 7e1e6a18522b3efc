//! Per-room cache of rendered descriptions, keyed by time period

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::time_period::TimePeriod;

/// Default age after which an entry is regenerated
pub const DEFAULT_TTL_SECONDS: i64 = 900;

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub text: String,
    pub generated_at: DateTime<Utc>,
}

/// Rendered text per time period. Entries are replaced whole and never edited.
#[derive(Debug, Clone)]
pub struct DescriptionCache {
    entries: HashMap<TimePeriod, CacheEntry>,
    ttl: Duration,
}

impl DescriptionCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    #[must_use]
    pub fn entry(&self, period: TimePeriod) -> Option<&CacheEntry> {
        self.entries.get(&period)
    }

    /// Missing entries count as stale
    #[must_use]
    pub fn is_stale(&self, period: TimePeriod, now: DateTime<Utc>) -> bool {
        self.entries
            .get(&period)
            .is_none_or(|entry| now - entry.generated_at > self.ttl)
    }

    /// Cached text if present and fresh
    #[must_use]
    pub fn get_fresh(&self, period: TimePeriod, now: DateTime<Utc>) -> Option<&str> {
        if self.is_stale(period, now) {
            return None;
        }
        self.entries.get(&period).map(|entry| entry.text.as_str())
    }

    pub fn store(&mut self, period: TimePeriod, text: String, now: DateTime<Utc>) {
        self.entries.insert(
            period,
            CacheEntry {
                text,
                generated_at: now,
            },
        );
    }

    /// Return the fresh entry for `period`, calling `render` only when the
    /// entry is missing or stale
    pub fn get_or_render<F>(&mut self, period: TimePeriod, now: DateTime<Utc>, render: F) -> String
    where
        F: FnOnce() -> String,
    {
        if let Some(text) = self.get_fresh(period, now) {
            debug!("Description cache hit for {}", period);
            return text.to_string();
        }

        debug!("Description cache miss for {}, rendering", period);
        let text = render();
        self.store(period, text.clone(), now);
        text
    }

    /// Drop every period's entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Move an entry's timestamp into the past, e.g. to force expiry in tests
    pub fn backdate(&mut self, period: TimePeriod, by: Duration) {
        if let Some(entry) = self.entries.get_mut(&period) {
            entry.generated_at -= by;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DescriptionCache {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_TTL_SECONDS))
    }
}
