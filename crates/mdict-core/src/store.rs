use mdict_config::ui::{MAX_SIDEBAR_WIDTH, MIN_SIDEBAR_WIDTH, UiConfig};
use mdict_types::{ActiveDict, SidebarTab};

use crate::storage::Storage;

pub const SIDEBAR_WIDTH_KEY: &str = "sidebarWidth";
pub const DARK_MODE_KEY: &str = "darkMode";

/// Client-owned UI state
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub search_word: String,
    pub active_dict: ActiveDict,
    pub sidebar_open: bool,
    pub sidebar_width: f64,
    pub dark_mode: bool,
    pub active_sidebar_tab: SidebarTab,
    pub settings_open: bool,
}

pub fn clamp_sidebar_width(width: f64) -> f64 {
    width.clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH)
}

/// Owns the UI state; only `sidebar_width` and `dark_mode` round-trip through storage
pub struct AppStore {
    state: AppState,
    storage: Box<dyn Storage>,
}

impl AppStore {
    pub fn load(storage: Box<dyn Storage>, ui: &UiConfig) -> Self {
        let sidebar_width = storage
            .get(SIDEBAR_WIDTH_KEY)
            .and_then(|saved| saved.trim().parse::<f64>().ok())
            .filter(|w| (MIN_SIDEBAR_WIDTH..=MAX_SIDEBAR_WIDTH).contains(w))
            .unwrap_or_else(|| ui.initial_sidebar_width());

        let dark_mode = storage.get(DARK_MODE_KEY).as_deref() == Some("true");

        tracing::debug!("[STORE] loaded sidebar_width={sidebar_width} dark_mode={dark_mode}");

        Self {
            state: AppState {
                search_word: String::new(),
                active_dict: ActiveDict::All,
                sidebar_open: false,
                sidebar_width,
                dark_mode,
                active_sidebar_tab: SidebarTab::Dicts,
                settings_open: false,
            },
            storage,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn set_search_word(&mut self, word: impl Into<String>) {
        self.state.search_word = word.into();
    }

    pub fn set_active_dict(&mut self, dict: ActiveDict) {
        self.state.active_dict = dict;
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.state.sidebar_open = open;
    }

    /// Clamp into [200, 500] and persist
    pub fn set_sidebar_width(&mut self, width: f64) {
        if width.is_nan() {
            tracing::warn!("[STORE] ignoring NaN sidebar width");
            return;
        }
        let clamped = clamp_sidebar_width(width);
        self.persist(SIDEBAR_WIDTH_KEY, &clamped.to_string());
        self.state.sidebar_width = clamped;
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        let next = !self.state.dark_mode;
        self.persist(DARK_MODE_KEY, if next { "true" } else { "false" });
        self.state.dark_mode = next;
        next
    }

    pub fn set_active_sidebar_tab(&mut self, tab: SidebarTab) {
        self.state.active_sidebar_tab = tab;
    }

    pub fn set_settings_open(&mut self, open: bool) {
        self.state.settings_open = open;
    }

    /// Storage failures never reach the caller
    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            tracing::warn!("[STORE] failed to persist {key}: {e}");
        }
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.get(key)
    }
}
