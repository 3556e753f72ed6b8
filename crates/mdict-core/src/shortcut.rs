#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ToggleDarkMode,
}

impl Shortcut {
    /// Ctrl/Cmd+Shift+D toggles dark mode
    pub fn from_key(key: &str, ctrl: bool, meta: bool, shift: bool) -> Option<Self> {
        if (ctrl || meta) && shift && key.eq_ignore_ascii_case("d") {
            Some(Shortcut::ToggleDarkMode)
        } else {
            None
        }
    }
}
