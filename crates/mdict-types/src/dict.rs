use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel used by the backend and local storage for "every enabled dictionary"
pub const ALL_DICTS: &str = "all";

/// A dictionary known to the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictInfo {
    pub uuid: String,
    pub title: String,
    #[serde(default)]
    pub logo: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub enabled: bool,
}

impl DictInfo {
    /// Built-in "app" dictionaries are served by the backend but never listed
    pub fn is_app(&self) -> bool {
        self.kind == "app"
    }
}

/// Rendered entry of one dictionary for one word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    pub uuid: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub found: bool,
    #[serde(default)]
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupAllResult {
    pub word: String,
    #[serde(default)]
    pub results: Vec<LookupResult>,
    #[serde(default)]
    pub total: usize,
}

impl LookupAllResult {
    /// Wrap a single-dictionary lookup in the aggregated shape
    pub fn from_single(result: LookupResult) -> Self {
        let word = result.word.clone();
        if result.found {
            Self {
                word,
                results: vec![result],
                total: 1,
            }
        } else {
            Self {
                word,
                results: Vec::new(),
                total: 0,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub word: String,
    pub count: u32,
    pub last_time: String,
}

/// Phonetic, frequency and tag annotations for a word
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordMeta {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub found: bool,
    pub phonetic: Option<String>,
    pub definition: Option<String>,
    pub translation: Option<String>,
    pub oxford: Option<bool>,
    pub collins: Option<u8>,
    pub tags: Option<Vec<String>>,
    pub bnc: Option<u32>,
    pub frq: Option<u32>,
    pub exchanges: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wordbook {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordbookEntry {
    pub id: i64,
    #[serde(default)]
    pub wordbook_id: Option<i64>,
    pub word: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One wordbook that currently holds a given word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordbookMembership {
    pub wordbook_id: i64,
    /// Entry id inside that wordbook
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleResult {
    pub uuid: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// Which dictionaries a lookup targets
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActiveDict {
    #[default]
    All,
    Dict(String),
}

impl ActiveDict {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | ALL_DICTS => ActiveDict::All,
            uuid => ActiveDict::Dict(uuid.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActiveDict::All => ALL_DICTS,
            ActiveDict::Dict(uuid) => uuid,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ActiveDict::All)
    }
}

impl fmt::Display for ActiveDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ActiveDict {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ActiveDict {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ActiveDict::parse(&raw))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarTab {
    #[default]
    Dicts,
    History,
    Wordbook,
}

impl SidebarTab {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dicts" => Some(SidebarTab::Dicts),
            "history" => Some(SidebarTab::History),
            "wordbook" | "wordbooks" => Some(SidebarTab::Wordbook),
            _ => None,
        }
    }
}
