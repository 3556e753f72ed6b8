//! Query cache keyed by endpoint and parameters.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use mdict_config::cache::CacheConfig;
use mdict_types::{
    ActiveDict, DictInfo, HistoryItem, LookupAllResult, WordMeta, Wordbook, WordbookEntry,
    WordbookMembership,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Dicts,
    Lookup,
    Suggest,
    History,
    Meta,
    Wordbooks,
    WordbookEntries,
    WordMembership,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Dicts,
    Lookup { word: String, dict: ActiveDict },
    Suggest { query: String },
    History,
    Meta { word: String },
    Wordbooks,
    WordbookEntries { wordbook_id: i64 },
    WordMembership { word: String },
}

impl QueryKey {
    pub fn kind(&self) -> QueryKind {
        match self {
            QueryKey::Dicts => QueryKind::Dicts,
            QueryKey::Lookup { .. } => QueryKind::Lookup,
            QueryKey::Suggest { .. } => QueryKind::Suggest,
            QueryKey::History => QueryKind::History,
            QueryKey::Meta { .. } => QueryKind::Meta,
            QueryKey::Wordbooks => QueryKind::Wordbooks,
            QueryKey::WordbookEntries { .. } => QueryKind::WordbookEntries,
            QueryKey::WordMembership { .. } => QueryKind::WordMembership,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Dicts(Vec<DictInfo>),
    Lookup(LookupAllResult),
    Suggest(Vec<String>),
    History(Vec<HistoryItem>),
    Meta(WordMeta),
    Wordbooks(Vec<Wordbook>),
    WordbookEntries(Vec<WordbookEntry>),
    WordMembership(Vec<WordbookMembership>),
}

/// Conversion between a typed response and its cache slot
pub trait Cached: Clone + Sized {
    fn into_value(self) -> QueryValue;

    fn from_value(value: &QueryValue) -> Option<&Self>;
}

macro_rules! cached {
    ($ty:ty, $variant:ident) => {
        impl Cached for $ty {
            fn into_value(self) -> QueryValue {
                QueryValue::$variant(self)
            }

            fn from_value(value: &QueryValue) -> Option<&Self> {
                match value {
                    QueryValue::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

cached!(Vec<DictInfo>, Dicts);
cached!(LookupAllResult, Lookup);
cached!(Vec<String>, Suggest);
cached!(Vec<HistoryItem>, History);
cached!(WordMeta, Meta);
cached!(Vec<Wordbook>, Wordbooks);
cached!(Vec<WordbookEntry>, WordbookEntries);
cached!(Vec<WordbookMembership>, WordMembership);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    Stale,
    Missing,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: QueryValue,
    fetched_at: Instant,
}

fn window_for(windows: &CacheConfig, kind: QueryKind) -> Duration {
    match kind {
        QueryKind::Dicts => windows.dicts(),
        QueryKind::Lookup => windows.lookup(),
        QueryKind::Suggest => windows.suggest(),
        QueryKind::History => windows.history(),
        QueryKind::Meta => windows.meta(),
        QueryKind::Wordbooks => windows.wordbooks(),
        QueryKind::WordbookEntries => windows.wordbook_entries(),
        QueryKind::WordMembership => windows.membership(),
    }
}

pub struct QueryCache {
    windows: CacheConfig,
    entries: HashMap<QueryKey, CacheEntry>,
}

impl QueryCache {
    pub fn new(windows: CacheConfig) -> Self {
        Self {
            windows,
            entries: HashMap::new(),
        }
    }

    pub fn stale_window(&self, kind: QueryKind) -> Duration {
        window_for(&self.windows, kind)
    }

    pub fn freshness(&self, key: &QueryKey, now: Instant) -> Freshness {
        match self.entries.get(key) {
            None => Freshness::Missing,
            Some(entry) => {
                let age = now.saturating_duration_since(entry.fetched_at);
                if age < self.stale_window(key.kind()) {
                    Freshness::Fresh
                } else {
                    Freshness::Stale
                }
            }
        }
    }

    /// Value for `key` only while inside its stale window
    pub fn fresh(&self, key: &QueryKey, now: Instant) -> Option<&QueryValue> {
        match self.freshness(key, now) {
            Freshness::Fresh => self.entries.get(key).map(|e| &e.value),
            _ => None,
        }
    }

    /// Last known value regardless of age
    pub fn peek(&self, key: &QueryKey) -> Option<&QueryValue> {
        self.entries.get(key).map(|e| &e.value)
    }

    /// Store `value` and drop every other entry past its stale window
    pub fn insert(&mut self, key: QueryKey, value: QueryValue, now: Instant) {
        self.prune(now);
        self.entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at: now,
            },
        );
    }

    /// Evict stale entries; a stale value is refetched on next use anyway
    pub fn prune(&mut self, now: Instant) {
        let windows = &self.windows;
        let before = self.entries.len();
        self.entries.retain(|key, entry| {
            now.saturating_duration_since(entry.fetched_at) < window_for(windows, key.kind())
        });
        let evicted = before - self.entries.len();
        if evicted > 0 {
            tracing::trace!("[CACHE] evicted {evicted} stale entries");
        }
    }

    pub fn invalidate_key(&mut self, key: &QueryKey) {
        if self.entries.remove(key).is_some() {
            tracing::debug!("[CACHE] invalidated {key:?}");
        }
    }

    /// Drop every entry of one kind
    pub fn invalidate(&mut self, kind: QueryKind) {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.kind() != kind);
        tracing::debug!(
            "[CACHE] invalidated {kind:?}: {} entries",
            before - self.entries.len()
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
