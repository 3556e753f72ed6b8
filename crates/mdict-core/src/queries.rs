//! Cache-aware bindings around the REST client.
//!
//! Every read is bound to a [`QueryKey`] built from its parameters. Reads with
//! blank input are skipped and report `Ok(None)`. Mutations wait for the
//! server, then invalidate the keys that depend on them; nothing is updated
//! optimistically.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use mdict_api::{ApiResult, DictApi};
use mdict_config::cache::CacheConfig;
use mdict_config::network::NetworkConfig;
use mdict_types::{
    ActiveDict, DictInfo, HistoryItem, LookupAllResult, OkResponse, ToggleResult, WordMeta,
    Wordbook, WordbookEntry, WordbookMembership,
};

use crate::cache::{Cached, QueryCache, QueryKey, QueryKind};

pub struct DataClient {
    api: Arc<dyn DictApi>,
    cache: QueryCache,
    suggest_limit: u32,
    history_limit: u32,
}

impl DataClient {
    pub fn new(api: Arc<dyn DictApi>, network: &NetworkConfig, cache: CacheConfig) -> Self {
        Self {
            api,
            cache: QueryCache::new(cache),
            suggest_limit: network.suggest_limit,
            history_limit: network.history_limit,
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Serve a fresh cache hit, otherwise fetch and store
    async fn cached<T, Fut>(&mut self, key: QueryKey, fetch: Fut) -> ApiResult<T>
    where
        T: Cached,
        Fut: Future<Output = ApiResult<T>>,
    {
        if let Some(hit) = self
            .cache
            .fresh(&key, Instant::now())
            .and_then(T::from_value)
        {
            tracing::trace!("[CACHE] hit {key:?}");
            return Ok(hit.clone());
        }

        tracing::debug!("[CACHE] fetch {key:?}");
        let value = fetch.await?;
        self.cache
            .insert(key, value.clone().into_value(), Instant::now());
        Ok(value)
    }

    /// Last value stored under `key`, even when stale
    pub fn peek<T: Cached>(&self, key: &QueryKey) -> Option<T> {
        self.cache.peek(key).and_then(T::from_value).cloned()
    }

    pub async fn dicts(&mut self) -> ApiResult<Vec<DictInfo>> {
        let api = Arc::clone(&self.api);
        self.cached(QueryKey::Dicts, async move { api.get_dicts().await })
            .await
    }

    /// Lookup against one dictionary or all enabled ones
    pub async fn lookup(
        &mut self,
        word: &str,
        dict: &ActiveDict,
    ) -> ApiResult<Option<LookupAllResult>> {
        if word.trim().is_empty() {
            return Ok(None);
        }

        let api = Arc::clone(&self.api);
        let key = QueryKey::Lookup {
            word: word.to_string(),
            dict: dict.clone(),
        };
        let owned_word = word.to_string();
        let owned_dict = dict.clone();
        let fresh = self.cache.fresh(&key, Instant::now()).is_some();

        let result = self
            .cached(key, async move {
                match owned_dict {
                    ActiveDict::All => api.lookup_all(&owned_word).await,
                    ActiveDict::Dict(uuid) => api
                        .lookup_word(&uuid, &owned_word)
                        .await
                        .map(LookupAllResult::from_single),
                }
            })
            .await?;

        if !fresh {
            // the server appends to history on every lookup that hit
            self.cache.invalidate(QueryKind::History);
        }

        Ok(Some(result))
    }

    pub async fn suggest(&mut self, query: &str) -> ApiResult<Option<Vec<String>>> {
        if query.trim().is_empty() {
            return Ok(None);
        }

        let api = Arc::clone(&self.api);
        let limit = self.suggest_limit;
        let owned = query.to_string();
        self.cached(
            QueryKey::Suggest {
                query: query.to_string(),
            },
            async move { api.suggest(&owned, limit).await },
        )
        .await
        .map(Some)
    }

    pub async fn history(&mut self) -> ApiResult<Vec<HistoryItem>> {
        let api = Arc::clone(&self.api);
        let limit = self.history_limit;
        self.cached(QueryKey::History, async move { api.get_history(limit).await })
            .await
    }

    pub async fn word_meta(&mut self, word: &str) -> ApiResult<Option<WordMeta>> {
        if word.trim().is_empty() {
            return Ok(None);
        }

        let api = Arc::clone(&self.api);
        let owned = word.to_string();
        self.cached(
            QueryKey::Meta {
                word: word.to_string(),
            },
            async move { api.get_word_meta(&owned).await },
        )
        .await
        .map(Some)
    }

    pub async fn wordbooks(&mut self) -> ApiResult<Vec<Wordbook>> {
        let api = Arc::clone(&self.api);
        self.cached(QueryKey::Wordbooks, async move { api.get_wordbooks().await })
            .await
    }

    pub async fn wordbook_entries(&mut self, wordbook_id: i64) -> ApiResult<Vec<WordbookEntry>> {
        let api = Arc::clone(&self.api);
        self.cached(QueryKey::WordbookEntries { wordbook_id }, async move {
            api.get_wordbook_entries(wordbook_id).await
        })
        .await
    }

    /// Wordbooks currently holding `word`
    pub async fn word_membership(
        &mut self,
        word: &str,
    ) -> ApiResult<Option<Vec<WordbookMembership>>> {
        if word.trim().is_empty() {
            return Ok(None);
        }

        let api = Arc::clone(&self.api);
        let owned = word.to_string();
        self.cached(
            QueryKey::WordMembership {
                word: word.to_string(),
            },
            async move { api.check_word_in_wordbooks(&owned).await },
        )
        .await
        .map(Some)
    }

    pub async fn toggle_dict(&mut self, uuid: &str) -> ApiResult<ToggleResult> {
        let result = self.api.toggle_dict(uuid).await?;
        tracing::info!("[DATA] {} enabled={}", result.uuid, result.enabled);
        self.cache.invalidate(QueryKind::Dicts);
        // aggregated lookups depend on which dictionaries are enabled
        self.cache.invalidate(QueryKind::Lookup);
        Ok(result)
    }

    pub async fn clear_history(&mut self) -> ApiResult<OkResponse> {
        let ok = self.api.clear_history().await?;
        self.cache.invalidate(QueryKind::History);
        Ok(ok)
    }

    pub async fn create_wordbook(&mut self, name: &str) -> ApiResult<Wordbook> {
        let wordbook = self.api.create_wordbook(name).await?;
        self.cache.invalidate(QueryKind::Wordbooks);
        Ok(wordbook)
    }

    pub async fn update_wordbook(&mut self, id: i64, name: &str) -> ApiResult<OkResponse> {
        let ok = self.api.update_wordbook(id, name).await?;
        self.cache.invalidate(QueryKind::Wordbooks);
        Ok(ok)
    }

    pub async fn delete_wordbook(&mut self, id: i64) -> ApiResult<OkResponse> {
        let ok = self.api.delete_wordbook(id).await?;
        self.cache.invalidate(QueryKind::Wordbooks);
        self.cache
            .invalidate_key(&QueryKey::WordbookEntries { wordbook_id: id });
        self.cache.invalidate(QueryKind::WordMembership);
        Ok(ok)
    }

    pub async fn add_wordbook_entry(
        &mut self,
        wordbook_id: i64,
        word: &str,
    ) -> ApiResult<WordbookEntry> {
        let entry = self.api.add_wordbook_entry(wordbook_id, word).await?;
        self.cache
            .invalidate_key(&QueryKey::WordbookEntries { wordbook_id });
        self.cache.invalidate(QueryKind::WordMembership);
        Ok(entry)
    }

    pub async fn delete_wordbook_entry(
        &mut self,
        wordbook_id: i64,
        entry_id: i64,
    ) -> ApiResult<OkResponse> {
        let ok = self.api.delete_wordbook_entry(wordbook_id, entry_id).await?;
        self.cache
            .invalidate_key(&QueryKey::WordbookEntries { wordbook_id });
        self.cache.invalidate(QueryKind::WordMembership);
        Ok(ok)
    }

    pub async fn cache_info(&self) -> ApiResult<serde_json::Value> {
        self.api.cache_info().await
    }

    /// Clear the server cache and everything held locally
    pub async fn clear_cache(&mut self) -> ApiResult<OkResponse> {
        let ok = self.api.clear_cache().await?;
        self.cache.clear();
        Ok(ok)
    }

    pub fn invalidate_all(&mut self) {
        self.cache.clear();
    }
}
