//! Save/unsave of the current word.
//!
//! Saving targets the first wordbook only, creating a default one when none
//! exist. Unsaving removes the word from every wordbook that holds it.

use mdict_api::ApiResult;

use crate::queries::DataClient;

pub const DEFAULT_WORDBOOK_NAME: &str = "My Words";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved {
        wordbook_id: i64,
        created_wordbook: bool,
    },
    Unsaved {
        removed: usize,
    },
    AlreadySaved,
    /// Blank word, nothing to do
    Skipped,
}

pub async fn is_saved(data: &mut DataClient, word: &str) -> ApiResult<bool> {
    Ok(data
        .word_membership(word)
        .await?
        .is_some_and(|memberships| !memberships.is_empty()))
}

/// Heart button: unsave when saved anywhere, otherwise save
pub async fn toggle_saved(data: &mut DataClient, word: &str) -> ApiResult<SaveOutcome> {
    if is_saved(data, word).await? {
        unsave_word(data, word).await
    } else {
        save_word(data, word).await
    }
}

pub async fn save_word(data: &mut DataClient, word: &str) -> ApiResult<SaveOutcome> {
    let Some(memberships) = data.word_membership(word).await? else {
        return Ok(SaveOutcome::Skipped);
    };
    if !memberships.is_empty() {
        return Ok(SaveOutcome::AlreadySaved);
    }

    let wordbooks = data.wordbooks().await?;
    let (wordbook_id, created_wordbook) = match wordbooks.first() {
        Some(first) => (first.id, false),
        None => {
            let created = data.create_wordbook(DEFAULT_WORDBOOK_NAME).await?;
            tracing::info!("[WORDBOOK] created default wordbook {}", created.id);
            (created.id, true)
        }
    };

    data.add_wordbook_entry(wordbook_id, word).await?;
    tracing::info!("[WORDBOOK] saved '{}' to {}", word, wordbook_id);

    Ok(SaveOutcome::Saved {
        wordbook_id,
        created_wordbook,
    })
}

pub async fn unsave_word(data: &mut DataClient, word: &str) -> ApiResult<SaveOutcome> {
    let Some(memberships) = data.word_membership(word).await? else {
        return Ok(SaveOutcome::Skipped);
    };

    let mut removed = 0;
    for membership in &memberships {
        data.delete_wordbook_entry(membership.wordbook_id, membership.id)
            .await?;
        removed += 1;
    }
    tracing::info!("[WORDBOOK] removed '{}' from {} wordbooks", word, removed);

    Ok(SaveOutcome::Unsaved { removed })
}
