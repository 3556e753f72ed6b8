use std::env;

use serde::{Deserialize, Serialize};

use self::cache::CacheConfig;
use self::network::NetworkConfig;
use self::ui::UiConfig;

pub mod cache;
pub mod network;
pub mod ui;


#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub ui: UiConfig,
    pub cache: CacheConfig,

    /// File that stands in for browser local storage
    pub storage_path: String,
    /// UI tick interval, drives the suggestion debounce
    pub delta_time: u64,
}

impl Config {
    pub fn new() -> Self {
        let storage_path =
            env::var("MDICT_STORAGE_PATH").unwrap_or_else(|_| "mdict-storage.json".to_string());

        let delta_time = env::var("DELTA_TIME_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50); // 50ms default

        Config {
            network: NetworkConfig::new(),
            ui: UiConfig::new(),
            cache: CacheConfig::default(),

            storage_path,
            delta_time,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
