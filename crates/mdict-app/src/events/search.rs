use std::time::Instant;

use kanal::AsyncSender;
use mdict_core::cache::{Freshness, QueryKey};
use mdict_core::views::Fetch;
use mdict_types::{AppEvent, Key};

use crate::events::Session;
use crate::screen::render;

/// Fetch suggestions once the debounce window has passed
pub async fn handle_tick(session: &mut Session) -> bool {
    let Some(query) = session.search.poll_debounce(Instant::now()) else {
        return false;
    };

    let suggestions = match session.data.suggest(&query).await {
        Ok(list) => list.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("[SEARCH] Suggestions for '{}' failed: {e}", query);
            Vec::new()
        }
    };
    tracing::debug!("[SEARCH] {} suggestions for '{}'", suggestions.len(), query);
    session.search.set_suggestions(&query, suggestions)
}

pub fn handle_input(session: &mut Session, text: String) {
    session.search.on_input(text, Instant::now());
}

pub async fn handle_key(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    key: Key,
) -> anyhow::Result<bool> {
    if let Some(word) = session.search.on_key(key) {
        navigate(session, app_to_ui_tx, &word).await?;
    }
    Ok(true)
}

/// Make `word` the search word and look it up
pub async fn navigate(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    word: &str,
) -> anyhow::Result<()> {
    tracing::info!("[SEARCH] Searching '{}'", word);
    session.store.set_search_word(word);
    session.search.sync_external(word);
    refresh_lookup(session, app_to_ui_tx).await
}

/// Run the lookup for the current word and dictionary, reloading the frames
pub async fn refresh_lookup(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let word = session.store.state().search_word.clone();
    let dict = session.store.state().active_dict.clone();

    if word.trim().is_empty() {
        session.lookup = Fetch::Idle;
        session.bridge.clear();
        return Ok(());
    }

    let key = QueryKey::Lookup {
        word: word.clone(),
        dict: dict.clone(),
    };
    if session.data.cache().freshness(&key, Instant::now()) != Freshness::Fresh {
        session.lookup = Fetch::Loading;
        render(session, app_to_ui_tx).await?;
    }

    match session.data.lookup(&word, &dict).await {
        Ok(Some(result)) => {
            tracing::debug!("[SEARCH] '{}' found in {} dictionaries", word, result.total);
            session.bridge.load(&result.results);
            session.outbox.clear();
            session.lookup = Fetch::Ready(result);
        }
        Ok(None) => {
            session.bridge.clear();
            session.lookup = Fetch::Idle;
        }
        Err(e) => {
            tracing::warn!("[SEARCH] Lookup of '{}' failed: {e}", word);
            session.bridge.clear();
            session.lookup = Fetch::Failed;
        }
    }

    Ok(())
}
