mod client;
mod endpoint;
mod error;
#[cfg(feature = "memory")]
pub mod memory;

pub use client::MdictClient;
pub use endpoint::Endpoint;
pub use error::ApiError;

use mdict_types::{
    DictInfo, HistoryItem, LookupAllResult, LookupResult, OkResponse, ToggleResult, WordMeta,
    Wordbook, WordbookEntry, WordbookMembership,
};

#[cfg(test)]
mod tests;

pub type ApiResult<T> = Result<T, ApiError>;

/// Flask-Mdict REST surface
#[async_trait::async_trait]
pub trait DictApi: Send + Sync {
    async fn get_dicts(&self) -> ApiResult<Vec<DictInfo>>;

    async fn lookup_word(&self, uuid: &str, word: &str) -> ApiResult<LookupResult>;

    /// Lookup across every enabled dictionary
    async fn lookup_all(&self, word: &str) -> ApiResult<LookupAllResult>;

    async fn suggest(&self, query: &str, limit: u32) -> ApiResult<Vec<String>>;

    async fn get_history(&self, limit: u32) -> ApiResult<Vec<HistoryItem>>;

    async fn clear_history(&self) -> ApiResult<OkResponse>;

    async fn get_word_meta(&self, word: &str) -> ApiResult<WordMeta>;

    /// Flip the enabled flag of a dictionary, returns the new state
    async fn toggle_dict(&self, uuid: &str) -> ApiResult<ToggleResult>;

    async fn get_wordbooks(&self) -> ApiResult<Vec<Wordbook>>;

    async fn create_wordbook(&self, name: &str) -> ApiResult<Wordbook>;

    async fn update_wordbook(&self, id: i64, name: &str) -> ApiResult<OkResponse>;

    async fn delete_wordbook(&self, id: i64) -> ApiResult<OkResponse>;

    async fn get_wordbook_entries(&self, wordbook_id: i64) -> ApiResult<Vec<WordbookEntry>>;

    async fn add_wordbook_entry(&self, wordbook_id: i64, word: &str) -> ApiResult<WordbookEntry>;

    async fn delete_wordbook_entry(&self, wordbook_id: i64, entry_id: i64) -> ApiResult<OkResponse>;

    /// Wordbooks (and entry ids) that currently hold `word`
    async fn check_word_in_wordbooks(&self, word: &str) -> ApiResult<Vec<WordbookMembership>>;

    async fn cache_info(&self) -> ApiResult<serde_json::Value>;

    async fn clear_cache(&self) -> ApiResult<OkResponse>;
}
