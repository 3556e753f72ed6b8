use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use mdict_api::DictApi;
use mdict_config::Config;
use mdict_config::ui::UiConfig;
use mdict_core::bridge::{HostBridge, Outbound};
use mdict_core::queries::DataClient;
use mdict_core::search::SearchBar;
use mdict_core::shortcut::Shortcut;
use mdict_core::storage::FileStorage;
use mdict_core::store::AppStore;
use mdict_core::views::Fetch;
use mdict_types::{AppEvent, LookupAllResult, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::screen::render;
use crate::state::AppState;

pub mod bridge;
pub mod dicts;
pub mod export;
pub mod search;
pub mod wordbooks;

use bridge::{handle_bridge_message, toggle_dark_mode};
use dicts::{handle_dict_select, handle_dict_toggle};
use export::handle_frame_export;
use search::{handle_input, handle_key, handle_tick, navigate, refresh_lookup};
use wordbooks::{
    handle_entry_add, handle_entry_remove, handle_save_toggle, handle_wordbook_create,
    handle_wordbook_delete, handle_wordbook_rename,
};

/// Everything the event loop owns between events
pub struct Session {
    pub store: AppStore,
    pub data: DataClient,
    pub search: SearchBar,
    pub bridge: HostBridge,
    pub lookup: Fetch<LookupAllResult>,
    pub history_expanded: bool,
    pub history_preview: usize,
    pub open_wordbook: Option<i64>,
    /// Messages posted into frames since the last result load
    pub outbox: Vec<Outbound>,
}

impl Session {
    pub fn new(store: AppStore, data: DataClient, ui: &UiConfig) -> Self {
        Self {
            store,
            data,
            search: SearchBar::new(std::time::Duration::from_millis(ui.suggest_debounce_ms)),
            bridge: HostBridge::new(),
            lookup: Fetch::Idle,
            history_expanded: false,
            history_preview: ui.history_preview,
            open_wordbook: None,
            outbox: Vec::new(),
        }
    }

    pub fn from_config(config: &Config, api: Arc<dyn DictApi>) -> Self {
        let storage = FileStorage::open(&config.storage_path);
        let store = AppStore::load(Box::new(storage), &config.ui);
        let data = DataClient::new(api, &config.network, config.cache.clone());
        Self::new(store, data, &config.ui)
    }
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    api: Arc<dyn DictApi>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut session = {
        let config = state.config.read().await;
        tracing::info!("[EVENT_LOOP] Using server {}", config.network.origin());
        Session::from_config(&config, api)
    };

    render(&mut session, &app_to_ui_tx).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                return Ok(());
            }
            event = ui_to_app_rx.recv() => event?,
        };

        if !matches!(event, AppEvent::Tick) {
            tracing::debug!("[EVENT_LOOP] EVENT RECEIVED: {:?}", event);
        }

        if !handle_events(&mut session, &app_to_ui_tx, event).await? {
            tracing::info!("[EVENT_LOOP] Quit requested");
            return Ok(());
        }
    }
}

/// Handle one event and redraw when something visible changed; false stops the loop
pub async fn handle_events(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<bool> {
    let dirty = match event {
        AppEvent::Tick => handle_tick(session).await,
        AppEvent::UiEvent(UiEvent::Quit) => {
            app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Quit)).await?;
            return Ok(false);
        }
        AppEvent::UiEvent(event) => handle_ui_event(session, app_to_ui_tx, event).await?,
        // UI-only events, ignore in backend
        AppEvent::Render(_) | AppEvent::Status(_) | AppEvent::Fatal(_) => false,
    };

    if dirty {
        render(session, app_to_ui_tx).await?;
    }
    Ok(true)
}

async fn handle_ui_event(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: UiEvent,
) -> anyhow::Result<bool> {
    match event {
        UiEvent::Input(text) => {
            handle_input(session, text);
            Ok(true)
        }
        UiEvent::Key(key) => handle_key(session, app_to_ui_tx, key).await,
        UiEvent::Search(word) => match session.search.commit(&word) {
            Some(word) => {
                navigate(session, app_to_ui_tx, &word).await?;
                Ok(true)
            }
            None => Ok(false),
        },
        UiEvent::Focus => {
            session.search.on_focus();
            Ok(true)
        }
        UiEvent::OutsidePointerDown => {
            session.search.on_outside_pointer_down();
            Ok(true)
        }
        UiEvent::ClearInput => {
            session.search.clear();
            Ok(true)
        }
        UiEvent::Shortcut {
            key,
            ctrl,
            meta,
            shift,
        } => match Shortcut::from_key(&key, ctrl, meta, shift) {
            Some(Shortcut::ToggleDarkMode) => Ok(toggle_dark_mode(session)),
            None => Ok(false),
        },
        UiEvent::SelectDict(dict) => {
            handle_dict_select(session, app_to_ui_tx, dict).await?;
            Ok(true)
        }
        UiEvent::ToggleDict(uuid) => {
            handle_dict_toggle(session, app_to_ui_tx, &uuid).await?;
            Ok(true)
        }
        UiEvent::ToggleDarkMode => Ok(toggle_dark_mode(session)),
        UiEvent::SetSidebarOpen(open) => {
            session.store.set_sidebar_open(open);
            Ok(true)
        }
        UiEvent::SetSidebarWidth(width) => {
            session.store.set_sidebar_width(width);
            Ok(true)
        }
        UiEvent::SetSidebarTab(tab) => {
            session.store.set_active_sidebar_tab(tab);
            Ok(true)
        }
        UiEvent::SetSettingsOpen(open) => {
            session.store.set_settings_open(open);
            Ok(true)
        }
        UiEvent::ExpandHistory(expanded) => {
            session.history_expanded = expanded;
            Ok(true)
        }
        UiEvent::ClearHistory => {
            match session.data.clear_history().await {
                Ok(_) => status(app_to_ui_tx, "History cleared").await?,
                Err(e) => {
                    tracing::warn!("[HISTORY] Clear failed: {e}");
                    status(app_to_ui_tx, "Failed to clear history").await?;
                }
            }
            Ok(true)
        }
        UiEvent::ToggleSaved => {
            handle_save_toggle(session, app_to_ui_tx).await?;
            Ok(true)
        }
        UiEvent::CreateWordbook(name) => {
            handle_wordbook_create(session, app_to_ui_tx, &name).await?;
            Ok(true)
        }
        UiEvent::RenameWordbook { id, name } => {
            handle_wordbook_rename(session, app_to_ui_tx, id, &name).await?;
            Ok(true)
        }
        UiEvent::DeleteWordbook(id) => {
            handle_wordbook_delete(session, app_to_ui_tx, id).await?;
            Ok(true)
        }
        UiEvent::OpenWordbook(id) => {
            session.open_wordbook = Some(id);
            session
                .store
                .set_active_sidebar_tab(mdict_types::SidebarTab::Wordbook);
            Ok(true)
        }
        UiEvent::AddEntry { wordbook_id, word } => {
            handle_entry_add(session, app_to_ui_tx, wordbook_id, &word).await?;
            Ok(true)
        }
        UiEvent::RemoveEntry {
            wordbook_id,
            entry_id,
        } => {
            handle_entry_remove(session, app_to_ui_tx, wordbook_id, entry_id).await?;
            Ok(true)
        }
        UiEvent::BridgeMessage(raw) => handle_bridge_message(session, app_to_ui_tx, &raw).await,
        UiEvent::ExportFrames(dir) => {
            handle_frame_export(session, app_to_ui_tx, &dir).await?;
            Ok(false)
        }
        UiEvent::CacheInfo => {
            match session.data.cache_info().await {
                Ok(info) => status(app_to_ui_tx, &format!("Server cache: {info}")).await?,
                Err(e) => status(app_to_ui_tx, &format!("Cache info unavailable: {e}")).await?,
            }
            Ok(false)
        }
        UiEvent::ClearCache => {
            match session.data.clear_cache().await {
                Ok(_) => status(app_to_ui_tx, "Cache cleared").await?,
                Err(e) => status(app_to_ui_tx, &format!("Failed to clear cache: {e}")).await?,
            }
            refresh_lookup(session, app_to_ui_tx).await?;
            Ok(true)
        }
        UiEvent::Refresh => {
            session.data.invalidate_all();
            refresh_lookup(session, app_to_ui_tx).await?;
            Ok(true)
        }
        // handled by the caller
        UiEvent::Quit => Ok(false),
    }
}

pub async fn status(app_to_ui_tx: &AsyncSender<AppEvent>, message: &str) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::Status(message.to_string()))
        .await?;
    Ok(())
}
