use std::env;

use serde::{Deserialize, Serialize};

fn default_suggest_limit() -> u32 {
    20
}

fn default_history_limit() -> u32 {
    100
}

/// Where the Flask-Mdict server lives and how much to ask it for
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Server origin, without the `/api` suffix
    pub base_url: String,
    #[serde(default = "default_suggest_limit")]
    pub suggest_limit: u32,
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let base_url =
            env::var("MDICT_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:5248".to_string());

        Self {
            base_url,
            suggest_limit: default_suggest_limit(),
            history_limit: default_history_limit(),
        }
    }

    /// Base url with any trailing slash removed
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::new()
    }
}
