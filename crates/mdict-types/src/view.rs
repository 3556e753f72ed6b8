use crate::dict::SidebarTab;

/// Everything the front-end needs to draw one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub dark_mode: bool,
    pub search: SearchView,
    pub sidebar: SidebarView,
    pub meta: Option<WordMetaView>,
    pub results: ResultsView,
    pub history: Option<HistoryView>,
    pub wordbooks: Option<WordbooksView>,
    pub settings: SettingsView,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchView {
    pub input: String,
    pub suggestions: Vec<String>,
    pub selected: i32,
    pub show_suggestions: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarView {
    pub open: bool,
    pub width: f64,
    pub tab: SidebarTab,
    pub all_selected: bool,
    pub rows: Vec<SidebarRow>,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarRow {
    pub uuid: String,
    pub title: String,
    pub logo: Option<String>,
    pub enabled: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResultsView {
    /// No search word yet
    #[default]
    Idle,
    Loading,
    Failed,
    Empty { word: String },
    Panels(Vec<PanelView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub uuid: String,
    pub title: String,
    pub logo: Option<String>,
    pub height: u32,
    pub excerpt: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordMetaView {
    pub saved: bool,
    pub phonetic: Option<String>,
    pub oxford: bool,
    pub collins_stars: Option<String>,
    pub tags: Vec<String>,
    pub bnc: Option<u32>,
    pub frq: Option<u32>,
    pub translation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryView {
    pub words: Vec<String>,
    pub total: usize,
    pub expanded: bool,
    /// "+N more" when collapsed
    pub more: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordbooksView {
    pub books: Vec<WordbookRow>,
    pub open: Option<i64>,
    pub entries: Vec<WordbookEntryRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordbookRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordbookEntryRow {
    pub id: i64,
    pub word: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsView {
    pub open: bool,
    pub dark_mode: bool,
    pub shortcut_hint: String,
}
