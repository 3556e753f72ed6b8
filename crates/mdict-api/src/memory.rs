//! In-process stand-in for a Flask-Mdict server.
//!
//! Mirrors the server's observable behaviour closely enough for client tests:
//! disabled dictionaries are skipped by aggregated lookups and suggestions,
//! successful lookups are recorded in history, and adding a word twice to the
//! same wordbook is rejected with 409.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tokio::sync::Mutex;

use mdict_types::{
    DictInfo, HistoryItem, LookupAllResult, LookupResult, OkResponse, ToggleResult, WordMeta,
    Wordbook, WordbookEntry, WordbookMembership,
};

use crate::{ApiError, ApiResult, DictApi};

struct MemoryDict {
    info: DictInfo,
    /// headword -> rendered html
    entries: BTreeMap<String, String>,
}

#[derive(Default)]
struct MemoryState {
    dicts: Vec<MemoryDict>,
    meta: HashMap<String, WordMeta>,
    history: Vec<HistoryItem>,
    wordbooks: Vec<Wordbook>,
    entries: Vec<WordbookEntry>,
    next_id: i64,
    clock: u64,
    calls: HashMap<&'static str, usize>,
    failures: HashMap<&'static str, u16>,
}

impl MemoryState {
    fn record(&mut self, call: &'static str) -> ApiResult<()> {
        *self.calls.entry(call).or_default() += 1;
        match self.failures.get(call) {
            Some(status) => Err(ApiError::Status(*status)),
            None => Ok(()),
        }
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn tick(&mut self) -> String {
        self.clock += 1;
        format!("2024-01-01 00:00:00.{:06}", self.clock)
    }

    fn add_history(&mut self, word: &str) {
        let now = self.tick();
        if let Some(item) = self.history.iter_mut().find(|h| h.word == word) {
            item.count += 1;
            item.last_time = now;
        } else {
            self.history.push(HistoryItem {
                word: word.to_string(),
                count: 1,
                last_time: now,
            });
        }
        // most recent first
        self.history.sort_by(|a, b| b.last_time.cmp(&a.last_time));
    }

    fn lookup_in(dict: &MemoryDict, word: &str) -> Option<String> {
        let lowered = word.to_lowercase();
        dict.entries
            .iter()
            .find(|(key, _)| key.to_lowercase() == lowered)
            .map(|(_, html)| html.clone())
    }

    fn has_wordbook(&self, id: i64) -> bool {
        self.wordbooks.iter().any(|wb| wb.id == id)
    }
}

#[derive(Default)]
pub struct MemoryApi {
    state: Mutex<MemoryState>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dictionary with `(headword, html)` entries
    pub fn with_dict(self, uuid: &str, title: &str, enabled: bool, entries: &[(&str, &str)]) -> Self {
        self.with_dict_kind(uuid, title, "mdict", enabled, entries)
    }

    pub fn with_dict_kind(
        mut self,
        uuid: &str,
        title: &str,
        kind: &str,
        enabled: bool,
        entries: &[(&str, &str)],
    ) -> Self {
        {
            let state = self.state.get_mut();
            state.dicts.push(MemoryDict {
                info: DictInfo {
                    uuid: uuid.to_string(),
                    title: title.to_string(),
                    logo: format!("/api/dicts/{uuid}/resource/logo.png"),
                    kind: kind.to_string(),
                    enabled,
                },
                entries: entries
                    .iter()
                    .map(|(word, html)| (word.to_string(), html.to_string()))
                    .collect(),
            });
        }
        self
    }

    pub fn with_meta(mut self, meta: WordMeta) -> Self {
        {
            let state = self.state.get_mut();
            state.meta.insert(meta.word.to_lowercase(), meta);
        }
        self
    }

    pub fn with_wordbook(mut self, name: &str, words: &[&str]) -> Self {
        {
            let state = self.state.get_mut();
            let id = state.next_id();
            let created_at = state.tick();
            state.wordbooks.push(Wordbook {
                id,
                name: name.to_string(),
                created_at: Some(created_at),
            });
            for word in words {
                let entry_id = state.next_id();
                let created_at = state.tick();
                state.entries.push(WordbookEntry {
                    id: entry_id,
                    wordbook_id: Some(id),
                    word: word.to_string(),
                    created_at: Some(created_at),
                });
            }
        }
        self
    }

    /// Make every later call of `call` fail with `status`
    pub async fn fail(&self, call: &'static str, status: u16) {
        self.state.lock().await.failures.insert(call, status);
    }

    pub async fn recover(&self, call: &'static str) {
        self.state.lock().await.failures.remove(call);
    }

    /// Number of times `call` reached the backend
    pub async fn calls(&self, call: &'static str) -> usize {
        self.state.lock().await.calls.get(call).copied().unwrap_or(0)
    }

    pub async fn wordbooks_snapshot(&self) -> Vec<Wordbook> {
        self.state.lock().await.wordbooks.clone()
    }

    pub async fn entries_snapshot(&self) -> Vec<WordbookEntry> {
        self.state.lock().await.entries.clone()
    }
}

#[async_trait::async_trait]
impl DictApi for MemoryApi {
    async fn get_dicts(&self) -> ApiResult<Vec<DictInfo>> {
        let mut state = self.state.lock().await;
        state.record("get_dicts")?;
        Ok(state.dicts.iter().map(|d| d.info.clone()).collect())
    }

    async fn lookup_word(&self, uuid: &str, word: &str) -> ApiResult<LookupResult> {
        let mut state = self.state.lock().await;
        state.record("lookup_word")?;
        let word = word.trim();

        let Some(dict) = state.dicts.iter().find(|d| d.info.uuid == uuid) else {
            return Err(ApiError::Status(404));
        };

        let result = match MemoryState::lookup_in(dict, word) {
            Some(html) => LookupResult {
                word: word.to_string(),
                uuid: uuid.to_string(),
                title: Some(dict.info.title.clone()),
                logo: Some(dict.info.logo.clone()),
                found: true,
                html,
            },
            None => LookupResult {
                word: word.to_string(),
                uuid: uuid.to_string(),
                title: None,
                logo: None,
                found: false,
                html: String::new(),
            },
        };

        if result.found {
            state.add_history(word);
        }
        Ok(result)
    }

    async fn lookup_all(&self, word: &str) -> ApiResult<LookupAllResult> {
        let mut state = self.state.lock().await;
        state.record("lookup_all")?;
        let word = word.trim();

        let results: Vec<LookupResult> = state
            .dicts
            .iter()
            .filter(|d| d.info.enabled)
            .filter_map(|d| {
                MemoryState::lookup_in(d, word).map(|html| LookupResult {
                    word: word.to_string(),
                    uuid: d.info.uuid.clone(),
                    title: Some(d.info.title.clone()),
                    logo: Some(d.info.logo.clone()),
                    found: true,
                    html,
                })
            })
            .collect();

        if !results.is_empty() {
            state.add_history(word);
        }

        Ok(LookupAllResult {
            word: word.to_string(),
            total: results.len(),
            results,
        })
    }

    async fn suggest(&self, query: &str, limit: u32) -> ApiResult<Vec<String>> {
        let mut state = self.state.lock().await;
        state.record("suggest")?;
        let lowered = query.to_lowercase();

        let words: BTreeSet<String> = state
            .dicts
            .iter()
            .filter(|d| d.info.enabled && !d.info.is_app())
            .flat_map(|d| d.entries.keys())
            .filter(|key| key.to_lowercase().starts_with(&lowered))
            .cloned()
            .collect();

        Ok(words.into_iter().take(limit as usize).collect())
    }

    async fn get_history(&self, limit: u32) -> ApiResult<Vec<HistoryItem>> {
        let mut state = self.state.lock().await;
        state.record("get_history")?;
        Ok(state.history.iter().take(limit as usize).cloned().collect())
    }

    async fn clear_history(&self) -> ApiResult<OkResponse> {
        let mut state = self.state.lock().await;
        state.record("clear_history")?;
        state.history.clear();
        Ok(OkResponse { ok: true })
    }

    async fn get_word_meta(&self, word: &str) -> ApiResult<WordMeta> {
        let mut state = self.state.lock().await;
        state.record("get_word_meta")?;
        Ok(state
            .meta
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_else(|| WordMeta {
                word: word.to_string(),
                found: false,
                ..WordMeta::default()
            }))
    }

    async fn toggle_dict(&self, uuid: &str) -> ApiResult<ToggleResult> {
        let mut state = self.state.lock().await;
        state.record("toggle_dict")?;
        let Some(dict) = state.dicts.iter_mut().find(|d| d.info.uuid == uuid) else {
            return Err(ApiError::Status(404));
        };
        dict.info.enabled = !dict.info.enabled;
        Ok(ToggleResult {
            uuid: uuid.to_string(),
            enabled: dict.info.enabled,
        })
    }

    async fn get_wordbooks(&self) -> ApiResult<Vec<Wordbook>> {
        let mut state = self.state.lock().await;
        state.record("get_wordbooks")?;
        Ok(state.wordbooks.clone())
    }

    async fn create_wordbook(&self, name: &str) -> ApiResult<Wordbook> {
        let mut state = self.state.lock().await;
        state.record("create_wordbook")?;
        if name.trim().is_empty() {
            return Err(ApiError::Status(400));
        }
        let id = state.next_id();
        let created_at = state.tick();
        state.wordbooks.push(Wordbook {
            id,
            name: name.to_string(),
            created_at: Some(created_at),
        });
        // the server only echoes id and name
        Ok(Wordbook {
            id,
            name: name.to_string(),
            created_at: None,
        })
    }

    async fn update_wordbook(&self, id: i64, name: &str) -> ApiResult<OkResponse> {
        let mut state = self.state.lock().await;
        state.record("update_wordbook")?;
        if name.trim().is_empty() {
            return Err(ApiError::Status(400));
        }
        if let Some(wb) = state.wordbooks.iter_mut().find(|wb| wb.id == id) {
            wb.name = name.to_string();
        }
        Ok(OkResponse { ok: true })
    }

    async fn delete_wordbook(&self, id: i64) -> ApiResult<OkResponse> {
        let mut state = self.state.lock().await;
        state.record("delete_wordbook")?;
        state.wordbooks.retain(|wb| wb.id != id);
        state.entries.retain(|e| e.wordbook_id != Some(id));
        Ok(OkResponse { ok: true })
    }

    async fn get_wordbook_entries(&self, wordbook_id: i64) -> ApiResult<Vec<WordbookEntry>> {
        let mut state = self.state.lock().await;
        state.record("get_wordbook_entries")?;
        let mut entries: Vec<WordbookEntry> = state
            .entries
            .iter()
            .filter(|e| e.wordbook_id == Some(wordbook_id))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    async fn add_wordbook_entry(&self, wordbook_id: i64, word: &str) -> ApiResult<WordbookEntry> {
        let mut state = self.state.lock().await;
        state.record("add_wordbook_entry")?;
        if word.is_empty() {
            return Err(ApiError::Status(400));
        }
        if !state.has_wordbook(wordbook_id) {
            return Err(ApiError::Status(404));
        }
        let duplicate = state
            .entries
            .iter()
            .any(|e| e.wordbook_id == Some(wordbook_id) && e.word == word);
        if duplicate {
            return Err(ApiError::Status(409));
        }
        let id = state.next_id();
        let created_at = state.tick();
        state.entries.push(WordbookEntry {
            id,
            wordbook_id: Some(wordbook_id),
            word: word.to_string(),
            created_at: Some(created_at),
        });
        Ok(WordbookEntry {
            id,
            wordbook_id: None,
            word: word.to_string(),
            created_at: None,
        })
    }

    async fn delete_wordbook_entry(&self, wordbook_id: i64, entry_id: i64) -> ApiResult<OkResponse> {
        let mut state = self.state.lock().await;
        state.record("delete_wordbook_entry")?;
        state
            .entries
            .retain(|e| !(e.id == entry_id && e.wordbook_id == Some(wordbook_id)));
        Ok(OkResponse { ok: true })
    }

    async fn check_word_in_wordbooks(&self, word: &str) -> ApiResult<Vec<WordbookMembership>> {
        let mut state = self.state.lock().await;
        state.record("check_word_in_wordbooks")?;
        if word.is_empty() {
            return Ok(Vec::new());
        }
        Ok(state
            .entries
            .iter()
            .filter(|e| e.word == word)
            .filter_map(|e| {
                e.wordbook_id.map(|wordbook_id| WordbookMembership {
                    wordbook_id,
                    id: e.id,
                })
            })
            .collect())
    }

    async fn cache_info(&self) -> ApiResult<serde_json::Value> {
        let mut state = self.state.lock().await;
        state.record("cache_info")?;
        Ok(serde_json::json!({ "backend": "none" }))
    }

    async fn clear_cache(&self) -> ApiResult<OkResponse> {
        let mut state = self.state.lock().await;
        state.record("clear_cache")?;
        Ok(OkResponse { ok: true })
    }
}
