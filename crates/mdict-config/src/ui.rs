use serde::{Deserialize, Serialize};

pub const MIN_SIDEBAR_WIDTH: f64 = 200.0;
pub const MAX_SIDEBAR_WIDTH: f64 = 500.0;

fn default_viewport_width() -> f64 {
    1280.0
}

fn default_history_preview() -> usize {
    10
}

fn default_suggest_debounce_ms() -> u64 {
    300
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Window width used for the initial 30% sidebar when nothing is stored
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,
    /// History words shown before "+N more"
    #[serde(default = "default_history_preview")]
    pub history_preview: usize,
    #[serde(default = "default_suggest_debounce_ms")]
    pub suggest_debounce_ms: u64,
}

impl UiConfig {
    pub fn new() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            history_preview: default_history_preview(),
            suggest_debounce_ms: default_suggest_debounce_ms(),
        }
    }

    /// 30% of the viewport, clamped into the sidebar range
    pub fn initial_sidebar_width(&self) -> f64 {
        (self.viewport_width * 0.3).clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new()
    }
}
