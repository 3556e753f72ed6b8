use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Method;

/// Characters left alone by JavaScript's `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Method and path of one REST call, relative to the server origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
}

impl Endpoint {
    fn get(path: String) -> Self {
        Self {
            method: Method::GET,
            path,
        }
    }

    fn post(path: String) -> Self {
        Self {
            method: Method::POST,
            path,
        }
    }

    pub fn dicts() -> Self {
        Self::get("/api/dicts".to_string())
    }

    pub fn lookup_word(uuid: &str, word: &str) -> Self {
        Self::get(format!(
            "/api/dicts/{}/lookup/{}",
            encode_component(uuid),
            encode_component(word)
        ))
    }

    pub fn lookup_all(word: &str) -> Self {
        Self::get(format!("/api/lookup/{}", encode_component(word)))
    }

    pub fn suggest(query: &str, limit: u32) -> Self {
        Self::get(format!(
            "/api/suggest/{}?limit={limit}",
            encode_component(query)
        ))
    }

    pub fn history(limit: u32) -> Self {
        Self::get(format!("/api/history?limit={limit}"))
    }

    pub fn clear_history() -> Self {
        Self::post("/api/history/clear".to_string())
    }

    pub fn word_meta(word: &str) -> Self {
        Self::get(format!("/api/meta/{}", encode_component(word)))
    }

    pub fn toggle_dict(uuid: &str) -> Self {
        Self::post(format!("/api/dicts/{}/toggle", encode_component(uuid)))
    }

    pub fn wordbooks() -> Self {
        Self::get("/api/wordbooks".to_string())
    }

    pub fn create_wordbook() -> Self {
        Self::post("/api/wordbooks".to_string())
    }

    pub fn update_wordbook(id: i64) -> Self {
        Self {
            method: Method::PUT,
            path: format!("/api/wordbooks/{id}"),
        }
    }

    pub fn delete_wordbook(id: i64) -> Self {
        Self {
            method: Method::DELETE,
            path: format!("/api/wordbooks/{id}"),
        }
    }

    pub fn wordbook_entries(wordbook_id: i64) -> Self {
        Self::get(format!("/api/wordbooks/{wordbook_id}/entries"))
    }

    pub fn add_wordbook_entry(wordbook_id: i64) -> Self {
        Self::post(format!("/api/wordbooks/{wordbook_id}/entries"))
    }

    pub fn delete_wordbook_entry(wordbook_id: i64, entry_id: i64) -> Self {
        Self {
            method: Method::DELETE,
            path: format!("/api/wordbooks/{wordbook_id}/entries/{entry_id}"),
        }
    }

    pub fn word_membership(word: &str) -> Self {
        Self::get(format!(
            "/api/wordbooks/entries?word={}",
            encode_component(word)
        ))
    }

    pub fn cache_info() -> Self {
        Self::get("/api/cache/info".to_string())
    }

    pub fn clear_cache() -> Self {
        Self::post("/api/cache/clear".to_string())
    }
}
