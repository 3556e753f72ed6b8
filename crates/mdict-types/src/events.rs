use crate::dict::{ActiveDict, SidebarTab};
use crate::view::Screen;

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Periodic tick from the ticker task, drives debounced suggestions
    Tick,
    Render(Box<Screen>),
    Status(String),
    /// Unrecoverable failure, the front-end replaces everything with an error screen
    Fatal(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Raw text typed into the search box
    Input(String),
    Key(Key),
    /// Search button or suggestion click
    Search(String),
    Focus,
    OutsidePointerDown,
    ClearInput,
    /// Key press outside the search box, checked against global shortcuts
    Shortcut {
        key: String,
        ctrl: bool,
        meta: bool,
        shift: bool,
    },
    SelectDict(ActiveDict),
    ToggleDict(String),
    ToggleDarkMode,
    SetSidebarOpen(bool),
    SetSidebarWidth(f64),
    SetSidebarTab(SidebarTab),
    SetSettingsOpen(bool),
    ExpandHistory(bool),
    ClearHistory,
    ToggleSaved,
    CreateWordbook(String),
    RenameWordbook { id: i64, name: String },
    DeleteWordbook(i64),
    OpenWordbook(i64),
    AddEntry { wordbook_id: i64, word: String },
    RemoveEntry { wordbook_id: i64, entry_id: i64 },
    /// Raw JSON posted by a dictionary frame
    BridgeMessage(String),
    ExportFrames(String),
    CacheInfo,
    ClearCache,
    Refresh,
    Quit,
}
