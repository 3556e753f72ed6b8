use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Staleness windows per query kind, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub dicts_ms: u64,
    pub lookup_ms: u64,
    pub suggest_ms: u64,
    pub history_ms: u64,
    pub meta_ms: u64,
    pub wordbooks_ms: u64,
    pub wordbook_entries_ms: u64,
    pub membership_ms: u64,
}

impl CacheConfig {
    pub fn dicts(&self) -> Duration {
        Duration::from_millis(self.dicts_ms)
    }

    pub fn lookup(&self) -> Duration {
        Duration::from_millis(self.lookup_ms)
    }

    pub fn suggest(&self) -> Duration {
        Duration::from_millis(self.suggest_ms)
    }

    pub fn history(&self) -> Duration {
        Duration::from_millis(self.history_ms)
    }

    pub fn meta(&self) -> Duration {
        Duration::from_millis(self.meta_ms)
    }

    pub fn wordbooks(&self) -> Duration {
        Duration::from_millis(self.wordbooks_ms)
    }

    pub fn wordbook_entries(&self) -> Duration {
        Duration::from_millis(self.wordbook_entries_ms)
    }

    pub fn membership(&self) -> Duration {
        Duration::from_millis(self.membership_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dicts_ms: 60_000,
            lookup_ms: 5 * 60_000,
            suggest_ms: 30_000,
            // history changes on every search
            history_ms: 10_000,
            meta_ms: 5 * 60_000,
            wordbooks_ms: 30_000,
            wordbook_entries_ms: 30_000,
            membership_ms: 30_000,
        }
    }
}
