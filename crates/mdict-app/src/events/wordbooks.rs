use kanal::AsyncSender;
use mdict_core::wordbook::{self, SaveOutcome};
use mdict_types::AppEvent;

use crate::events::{Session, status};

pub async fn handle_save_toggle(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let word = session.store.state().search_word.clone();

    let message = match wordbook::toggle_saved(&mut session.data, &word).await {
        Ok(SaveOutcome::Saved {
            created_wordbook: true,
            ..
        }) => format!("Saved '{word}' to a new wordbook"),
        Ok(SaveOutcome::Saved { .. }) => format!("Saved '{word}'"),
        Ok(SaveOutcome::Unsaved { removed }) => {
            format!("Removed '{word}' from {removed} wordbook(s)")
        }
        Ok(SaveOutcome::AlreadySaved) => format!("'{word}' is already saved"),
        Ok(SaveOutcome::Skipped) => "Nothing to save".to_string(),
        Err(e) => {
            tracing::warn!("[WORDBOOK] Toggle of '{}' failed: {e}", word);
            "Failed to update wordbook".to_string()
        }
    };

    status(app_to_ui_tx, &message).await
}

pub async fn handle_wordbook_create(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    name: &str,
) -> anyhow::Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return status(app_to_ui_tx, "Wordbook name is required").await;
    }

    match session.data.create_wordbook(name).await {
        Ok(created) => {
            session.open_wordbook = Some(created.id);
            status(app_to_ui_tx, &format!("Created wordbook '{}'", created.name)).await
        }
        Err(e) => {
            tracing::warn!("[WORDBOOK] Create '{}' failed: {e}", name);
            status(app_to_ui_tx, "Failed to create wordbook").await
        }
    }
}

pub async fn handle_wordbook_rename(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    id: i64,
    name: &str,
) -> anyhow::Result<()> {
    match session.data.update_wordbook(id, name.trim()).await {
        Ok(_) => status(app_to_ui_tx, &format!("Renamed wordbook to '{}'", name.trim())).await,
        Err(e) => {
            tracing::warn!("[WORDBOOK] Rename of {} failed: {e}", id);
            status(app_to_ui_tx, "Failed to rename wordbook").await
        }
    }
}

pub async fn handle_wordbook_delete(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    id: i64,
) -> anyhow::Result<()> {
    match session.data.delete_wordbook(id).await {
        Ok(_) => {
            if session.open_wordbook == Some(id) {
                session.open_wordbook = None;
            }
            status(app_to_ui_tx, "Wordbook deleted").await
        }
        Err(e) => {
            tracing::warn!("[WORDBOOK] Delete of {} failed: {e}", id);
            status(app_to_ui_tx, "Failed to delete wordbook").await
        }
    }
}

pub async fn handle_entry_add(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    wordbook_id: i64,
    word: &str,
) -> anyhow::Result<()> {
    match session.data.add_wordbook_entry(wordbook_id, word.trim()).await {
        Ok(entry) => status(app_to_ui_tx, &format!("Added '{}'", entry.word)).await,
        Err(e) => {
            tracing::warn!("[WORDBOOK] Add '{}' to {} failed: {e}", word, wordbook_id);
            status(app_to_ui_tx, "Failed to add word").await
        }
    }
}

pub async fn handle_entry_remove(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    wordbook_id: i64,
    entry_id: i64,
) -> anyhow::Result<()> {
    match session
        .data
        .delete_wordbook_entry(wordbook_id, entry_id)
        .await
    {
        Ok(_) => status(app_to_ui_tx, "Word removed").await,
        Err(e) => {
            tracing::warn!("[WORDBOOK] Remove {} from {} failed: {e}", entry_id, wordbook_id);
            status(app_to_ui_tx, "Failed to remove word").await
        }
    }
}
