mod profile_tests;

use std::sync::Arc;

use kanal::AsyncReceiver;
use mdict_api::memory::MemoryApi;
use mdict_config::cache::CacheConfig;
use mdict_config::network::NetworkConfig;
use mdict_config::ui::UiConfig;
use mdict_core::queries::DataClient;
use mdict_core::storage::MemoryStorage;
use mdict_core::store::AppStore;
use mdict_types::{AppEvent, Screen};

use crate::events::Session;

pub(crate) fn session(api: Arc<MemoryApi>) -> Session {
    let mut ui = UiConfig::new();
    ui.suggest_debounce_ms = 0;
    let store = AppStore::load(Box::new(MemoryStorage::new()), &ui);
    let data = DataClient::new(api, &NetworkConfig::new(), CacheConfig::default());
    Session::new(store, data, &ui)
}

/// Drain queued events, returning renders and status lines separately
pub(crate) fn drain(rx: &AsyncReceiver<AppEvent>) -> (Vec<Screen>, Vec<String>) {
    let mut screens = Vec::new();
    let mut statuses = Vec::new();
    while let Ok(Some(event)) = rx.try_recv() {
        match event {
            AppEvent::Render(screen) => screens.push(*screen),
            AppEvent::Status(message) => statuses.push(message),
            _ => {}
        }
    }
    (screens, statuses)
}
