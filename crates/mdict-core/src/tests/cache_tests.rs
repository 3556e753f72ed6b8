use std::time::{Duration, Instant};

use mdict_config::cache::CacheConfig;
use mdict_types::ActiveDict;

use crate::cache::{Cached, Freshness, QueryCache, QueryKey, QueryKind, QueryValue};

fn lookup_key(word: &str) -> QueryKey {
    QueryKey::Lookup {
        word: word.to_string(),
        dict: ActiveDict::All,
    }
}

#[test]
fn test_freshness_follows_stale_window() {
    let mut cache = QueryCache::new(CacheConfig::default());
    let start = Instant::now();
    let window = cache.stale_window(QueryKind::History);

    assert_eq!(cache.freshness(&QueryKey::History, start), Freshness::Missing);

    cache.insert(QueryKey::History, QueryValue::History(Vec::new()), start);
    assert_eq!(cache.freshness(&QueryKey::History, start), Freshness::Fresh);
    assert_eq!(
        cache.freshness(&QueryKey::History, start + window - Duration::from_millis(1)),
        Freshness::Fresh
    );
    assert_eq!(
        cache.freshness(&QueryKey::History, start + window),
        Freshness::Stale
    );

    assert!(cache.fresh(&QueryKey::History, start + window).is_none());
    assert!(cache.peek(&QueryKey::History).is_some());
}

#[test]
fn test_keys_differ_by_parameters() {
    let mut cache = QueryCache::new(CacheConfig::default());
    let now = Instant::now();
    cache.insert(lookup_key("a"), QueryValue::Suggest(vec!["x".into()]), now);

    assert!(cache.fresh(&lookup_key("a"), now).is_some());
    assert!(cache.fresh(&lookup_key("b"), now).is_none());

    let single = QueryKey::Lookup {
        word: "a".into(),
        dict: ActiveDict::Dict("u1".into()),
    };
    assert!(cache.fresh(&single, now).is_none());
}

#[test]
fn test_invalidate_kind_keeps_other_kinds() {
    let mut cache = QueryCache::new(CacheConfig::default());
    let now = Instant::now();
    cache.insert(lookup_key("a"), QueryValue::Suggest(Vec::new()), now);
    cache.insert(lookup_key("b"), QueryValue::Suggest(Vec::new()), now);
    cache.insert(QueryKey::Dicts, QueryValue::Dicts(Vec::new()), now);

    cache.invalidate(QueryKind::Lookup);

    assert_eq!(cache.len(), 1);
    assert!(cache.peek(&QueryKey::Dicts).is_some());

    cache.invalidate_key(&QueryKey::Dicts);
    assert!(cache.is_empty());
}

#[test]
fn test_typed_access_checks_variant() {
    let value = vec!["hello".to_string()].into_value();
    assert_eq!(
        <Vec<String>>::from_value(&value),
        Some(&vec!["hello".to_string()])
    );
    assert!(<Vec<mdict_types::Wordbook>>::from_value(&value).is_none());
}

#[test]
fn test_insert_evicts_stale_entries() {
    let mut cache = QueryCache::new(CacheConfig::default());
    let start = Instant::now();
    let lookup_window = cache.stale_window(QueryKind::Lookup);

    for word in ["a", "b", "c"] {
        cache.insert(lookup_key(word), QueryValue::Suggest(Vec::new()), start);
    }
    cache.insert(QueryKey::Dicts, QueryValue::Dicts(Vec::new()), start);
    assert_eq!(cache.len(), 4);

    // dicts expire well before lookups
    let later = start + cache.stale_window(QueryKind::Dicts);
    cache.insert(lookup_key("d"), QueryValue::Suggest(Vec::new()), later);
    assert_eq!(cache.len(), 4);
    assert!(cache.peek(&QueryKey::Dicts).is_none());

    let much_later = start + lookup_window;
    cache.insert(lookup_key("e"), QueryValue::Suggest(Vec::new()), much_later);
    assert_eq!(cache.len(), 2);
    assert!(cache.peek(&lookup_key("a")).is_none());
    assert!(cache.peek(&lookup_key("d")).is_some());
    assert!(cache.peek(&lookup_key("e")).is_some());
}
