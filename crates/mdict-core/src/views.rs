//! View models for the front-end, built from store state and query results.

use mdict_types::{
    ActiveDict, DictInfo, HistoryItem, HistoryView, LookupAllResult, PanelView, ResultsView,
    SettingsView, SidebarRow, SidebarView, WordMeta, WordMetaView, Wordbook, WordbookEntry,
    WordbookEntryRow, WordbookRow, WordbooksView,
};

use crate::bridge::HostBridge;
use crate::panel;
use crate::store::AppState;

pub const SHORTCUT_HINT: &str = "Switch between light and dark themes. (Shortcut: Ctrl+Shift+D)";
const EXCERPT_CHARS: usize = 240;

/// Outcome of one query, as a component sees it
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    /// Guard condition kept the query disabled
    Idle,
    Loading,
    Failed,
    Ready(T),
}

impl<T> Default for Fetch<T> {
    fn default() -> Self {
        Fetch::Idle
    }
}

impl<T> Fetch<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Fetch::Ready(value) => Some(value),
            _ => None,
        }
    }
}

pub fn results_view(
    search_word: &str,
    lookup: &Fetch<LookupAllResult>,
    bridge: &HostBridge,
) -> ResultsView {
    if search_word.is_empty() {
        return ResultsView::Idle;
    }

    match lookup {
        Fetch::Idle | Fetch::Loading => ResultsView::Loading,
        Fetch::Failed => ResultsView::Failed,
        Fetch::Ready(result) if result.results.is_empty() => ResultsView::Empty {
            word: search_word.to_string(),
        },
        Fetch::Ready(_) => ResultsView::Panels(
            bridge
                .frames()
                .iter()
                .map(|f| PanelView {
                    uuid: f.uuid.clone(),
                    title: f.title.clone(),
                    logo: f.logo.clone(),
                    height: f.height,
                    excerpt: panel::text_excerpt(&f.fragment, EXCERPT_CHARS),
                })
                .collect(),
        ),
    }
}

/// Dictionary list without built-in app entries
pub fn sidebar_view(state: &AppState, dicts: &[DictInfo]) -> SidebarView {
    let rows: Vec<SidebarRow> = dicts
        .iter()
        .filter(|d| !d.is_app())
        .map(|d| SidebarRow {
            uuid: d.uuid.clone(),
            title: d.title.clone(),
            logo: Some(d.logo.clone()).filter(|l| !l.is_empty()),
            enabled: d.enabled,
            selected: matches!(&state.active_dict, ActiveDict::Dict(uuid) if *uuid == d.uuid),
        })
        .collect();

    SidebarView {
        open: state.sidebar_open,
        width: state.sidebar_width,
        tab: state.active_sidebar_tab,
        all_selected: state.active_dict.is_all(),
        footer: format!("{} dictionaries loaded", rows.len()),
        rows,
    }
}

pub fn collins_stars(collins: u8) -> String {
    let filled = collins.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Hidden unless the backend knows the word
pub fn meta_view(meta: Option<&WordMeta>, saved: bool) -> Option<WordMetaView> {
    let meta = meta.filter(|m| m.found)?;

    Some(WordMetaView {
        saved,
        phonetic: meta.phonetic.clone().filter(|p| !p.is_empty()),
        oxford: meta.oxford.unwrap_or(false),
        collins_stars: meta.collins.filter(|c| *c > 0).map(collins_stars),
        tags: meta
            .tags
            .iter()
            .flatten()
            .map(|t| t.to_uppercase())
            .collect(),
        bnc: meta.bnc.filter(|v| *v > 0),
        frq: meta.frq.filter(|v| *v > 0),
        translation: meta.translation.clone().filter(|t| !t.is_empty()),
    })
}

/// Hidden when empty; collapsed shows the first `preview` words
pub fn history_view(items: &[HistoryItem], expanded: bool, preview: usize) -> Option<HistoryView> {
    if items.is_empty() {
        return None;
    }

    let shown = if expanded {
        items.len()
    } else {
        items.len().min(preview)
    };
    let more = (!expanded && items.len() > preview).then(|| items.len() - preview);

    Some(HistoryView {
        words: items.iter().take(shown).map(|h| h.word.clone()).collect(),
        total: items.len(),
        expanded,
        more,
    })
}

pub fn wordbooks_view(
    wordbooks: &[Wordbook],
    open: Option<i64>,
    entries: &[WordbookEntry],
) -> WordbooksView {
    WordbooksView {
        books: wordbooks
            .iter()
            .map(|wb| WordbookRow {
                id: wb.id,
                name: wb.name.clone(),
            })
            .collect(),
        open,
        entries: entries
            .iter()
            .map(|e| WordbookEntryRow {
                id: e.id,
                word: e.word.clone(),
            })
            .collect(),
    }
}

pub fn settings_view(state: &AppState) -> SettingsView {
    SettingsView {
        open: state.settings_open,
        dark_mode: state.dark_mode,
        shortcut_hint: SHORTCUT_HINT.to_string(),
    }
}
