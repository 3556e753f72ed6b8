use kanal::AsyncSender;
use mdict_core::views;
use mdict_core::wordbook::is_saved;
use mdict_types::{AppEvent, Screen, SidebarTab};

use crate::events::Session;

/// Build the screen from store state and cached queries
///
/// Query failures degrade to empty sections; the lookup carries its own failed state.
pub async fn build_screen(session: &mut Session) -> Screen {
    let state = session.store.state().clone();
    let word = state.search_word.trim().to_string();

    let dicts = session.data.dicts().await.unwrap_or_else(|e| {
        tracing::warn!("[SCREEN] Dictionaries unavailable: {e}");
        Vec::new()
    });

    let history = session.data.history().await.unwrap_or_else(|e| {
        tracing::warn!("[SCREEN] History unavailable: {e}");
        Vec::new()
    });

    let meta = match session.data.word_meta(&word).await {
        Ok(meta) => meta,
        Err(e) => {
            tracing::debug!("[SCREEN] No metadata for '{}': {e}", word);
            None
        }
    };
    let saved = match &meta {
        Some(m) if m.found => is_saved(&mut session.data, &word).await.unwrap_or(false),
        _ => false,
    };

    let wordbooks = if state.sidebar_open && state.active_sidebar_tab == SidebarTab::Wordbook {
        let books = session.data.wordbooks().await.unwrap_or_else(|e| {
            tracing::warn!("[SCREEN] Wordbooks unavailable: {e}");
            Vec::new()
        });
        let entries = match session.open_wordbook {
            Some(id) => session.data.wordbook_entries(id).await.unwrap_or_default(),
            None => Vec::new(),
        };
        Some(views::wordbooks_view(&books, session.open_wordbook, &entries))
    } else {
        None
    };

    Screen {
        dark_mode: state.dark_mode,
        search: session.search.view(),
        sidebar: views::sidebar_view(&state, &dicts),
        meta: views::meta_view(meta.as_ref(), saved),
        results: views::results_view(&state.search_word, &session.lookup, &session.bridge),
        history: views::history_view(&history, session.history_expanded, session.history_preview),
        wordbooks,
        settings: views::settings_view(&state),
    }
}

pub async fn render(session: &mut Session, app_to_ui_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let screen = build_screen(session).await;
    app_to_ui_tx.send(AppEvent::Render(Box::new(screen))).await?;
    Ok(())
}
