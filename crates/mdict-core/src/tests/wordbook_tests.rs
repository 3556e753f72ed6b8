use std::sync::Arc;

use mdict_api::memory::MemoryApi;

use crate::wordbook::{DEFAULT_WORDBOOK_NAME, SaveOutcome, is_saved, toggle_saved};

use super::data_client;

#[tokio::test]
async fn test_first_save_creates_default_wordbook() {
    let api = Arc::new(MemoryApi::new());
    let mut data = data_client(api.clone());

    let outcome = toggle_saved(&mut data, "serendipity").await.unwrap();

    let books = api.wordbooks_snapshot().await;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].name, DEFAULT_WORDBOOK_NAME);
    assert_eq!(
        outcome,
        SaveOutcome::Saved {
            wordbook_id: books[0].id,
            created_wordbook: true
        }
    );
    assert_eq!(api.calls("create_wordbook").await, 1);
    assert_eq!(api.calls("add_wordbook_entry").await, 1);
    assert!(is_saved(&mut data, "serendipity").await.unwrap());
}

#[tokio::test]
async fn test_save_uses_first_existing_wordbook() {
    let api = Arc::new(
        MemoryApi::new()
            .with_wordbook("First", &[])
            .with_wordbook("Second", &[]),
    );
    let mut data = data_client(api.clone());

    let outcome = toggle_saved(&mut data, "word").await.unwrap();

    let books = api.wordbooks_snapshot().await;
    assert_eq!(
        outcome,
        SaveOutcome::Saved {
            wordbook_id: books[0].id,
            created_wordbook: false
        }
    );
    assert_eq!(api.calls("create_wordbook").await, 0);

    let entries = api.entries_snapshot().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].wordbook_id, Some(books[0].id));
}

#[tokio::test]
async fn test_unsave_removes_from_every_wordbook() {
    let api = Arc::new(
        MemoryApi::new()
            .with_wordbook("A", &["echo", "other"])
            .with_wordbook("B", &["echo"])
            .with_wordbook("C", &["echo"]),
    );
    let mut data = data_client(api.clone());

    assert!(is_saved(&mut data, "echo").await.unwrap());
    let outcome = toggle_saved(&mut data, "echo").await.unwrap();

    assert_eq!(outcome, SaveOutcome::Unsaved { removed: 3 });
    assert_eq!(api.calls("delete_wordbook_entry").await, 3);
    assert!(!is_saved(&mut data, "echo").await.unwrap());

    let remaining = api.entries_snapshot().await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].word, "other");
}

#[tokio::test]
async fn test_save_then_unsave_round_trip() {
    let api = Arc::new(MemoryApi::new().with_wordbook("Mine", &[]));
    let mut data = data_client(api.clone());

    toggle_saved(&mut data, "tide").await.unwrap();
    assert!(is_saved(&mut data, "tide").await.unwrap());

    toggle_saved(&mut data, "tide").await.unwrap();
    assert!(!is_saved(&mut data, "tide").await.unwrap());
    assert!(api.entries_snapshot().await.is_empty());
}

#[tokio::test]
async fn test_blank_word_is_skipped() {
    let api = Arc::new(MemoryApi::new());
    let mut data = data_client(api.clone());

    assert_eq!(
        crate::wordbook::save_word(&mut data, "  ").await.unwrap(),
        SaveOutcome::Skipped
    );
    assert_eq!(api.calls("create_wordbook").await, 0);
}

#[tokio::test]
async fn test_failed_entry_add_surfaces_error() {
    let api = Arc::new(MemoryApi::new().with_wordbook("Mine", &[]));
    let mut data = data_client(api.clone());
    api.fail("add_wordbook_entry", 500).await;

    assert!(toggle_saved(&mut data, "tide").await.is_err());
    assert!(api.entries_snapshot().await.is_empty());
}
