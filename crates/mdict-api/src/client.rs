use serde::de::DeserializeOwned;
use serde_json::json;

use mdict_types::{
    DictInfo, HistoryItem, LookupAllResult, LookupResult, OkResponse, ToggleResult, WordMeta,
    Wordbook, WordbookEntry, WordbookMembership,
};

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::{ApiResult, DictApi};

#[derive(Clone)]
pub struct MdictClient {
    base_url: String,
    client: reqwest::Client,
}

impl MdictClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one call; any non-2xx status becomes `ApiError::Status`
    async fn send<T>(&self, endpoint: Endpoint, body: Option<serde_json::Value>) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint.path);
        tracing::debug!("[API] {} {}", endpoint.method, endpoint.path);

        let mut request = self.client.request(endpoint.method, &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("[API] {} answered {}", endpoint.path, status.as_u16());
            return Err(ApiError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait::async_trait]
impl DictApi for MdictClient {
    async fn get_dicts(&self) -> ApiResult<Vec<DictInfo>> {
        self.send(Endpoint::dicts(), None).await
    }

    async fn lookup_word(&self, uuid: &str, word: &str) -> ApiResult<LookupResult> {
        self.send(Endpoint::lookup_word(uuid, word), None).await
    }

    async fn lookup_all(&self, word: &str) -> ApiResult<LookupAllResult> {
        self.send(Endpoint::lookup_all(word), None).await
    }

    async fn suggest(&self, query: &str, limit: u32) -> ApiResult<Vec<String>> {
        self.send(Endpoint::suggest(query, limit), None).await
    }

    async fn get_history(&self, limit: u32) -> ApiResult<Vec<HistoryItem>> {
        self.send(Endpoint::history(limit), None).await
    }

    async fn clear_history(&self) -> ApiResult<OkResponse> {
        self.send(Endpoint::clear_history(), None).await
    }

    async fn get_word_meta(&self, word: &str) -> ApiResult<WordMeta> {
        self.send(Endpoint::word_meta(word), None).await
    }

    async fn toggle_dict(&self, uuid: &str) -> ApiResult<ToggleResult> {
        self.send(Endpoint::toggle_dict(uuid), None).await
    }

    async fn get_wordbooks(&self) -> ApiResult<Vec<Wordbook>> {
        self.send(Endpoint::wordbooks(), None).await
    }

    async fn create_wordbook(&self, name: &str) -> ApiResult<Wordbook> {
        self.send(Endpoint::create_wordbook(), Some(json!({ "name": name })))
            .await
    }

    async fn update_wordbook(&self, id: i64, name: &str) -> ApiResult<OkResponse> {
        self.send(Endpoint::update_wordbook(id), Some(json!({ "name": name })))
            .await
    }

    async fn delete_wordbook(&self, id: i64) -> ApiResult<OkResponse> {
        self.send(Endpoint::delete_wordbook(id), None).await
    }

    async fn get_wordbook_entries(&self, wordbook_id: i64) -> ApiResult<Vec<WordbookEntry>> {
        self.send(Endpoint::wordbook_entries(wordbook_id), None).await
    }

    async fn add_wordbook_entry(&self, wordbook_id: i64, word: &str) -> ApiResult<WordbookEntry> {
        self.send(
            Endpoint::add_wordbook_entry(wordbook_id),
            Some(json!({ "word": word })),
        )
        .await
    }

    async fn delete_wordbook_entry(&self, wordbook_id: i64, entry_id: i64) -> ApiResult<OkResponse> {
        self.send(Endpoint::delete_wordbook_entry(wordbook_id, entry_id), None)
            .await
    }

    async fn check_word_in_wordbooks(&self, word: &str) -> ApiResult<Vec<WordbookMembership>> {
        self.send(Endpoint::word_membership(word), None).await
    }

    async fn cache_info(&self) -> ApiResult<serde_json::Value> {
        self.send(Endpoint::cache_info(), None).await
    }

    async fn clear_cache(&self) -> ApiResult<OkResponse> {
        self.send(Endpoint::clear_cache(), None).await
    }
}
