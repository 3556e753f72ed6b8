use std::time::{Duration, Instant};

use mdict_types::{Key, SearchView};

/// Trailing-edge debounce: a value is released once `delay` passes without a newer one
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn schedule(&mut self, value: String, now: Instant) {
        self.pending = Some((value, now));
    }

    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let ready = match &self.pending {
            Some((_, since)) => now.saturating_duration_since(*since) >= self.delay,
            None => false,
        };
        if ready {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Search box with its own input text, independent of the committed search word
#[derive(Debug)]
pub struct SearchBar {
    input: String,
    show_suggestions: bool,
    selected: i32,
    suggestions: Vec<String>,
    debounced: String,
    debouncer: Debouncer,
    last_external: String,
}

impl SearchBar {
    pub fn new(debounce: Duration) -> Self {
        Self {
            input: String::new(),
            show_suggestions: false,
            selected: -1,
            suggestions: Vec::new(),
            debounced: String::new(),
            debouncer: Debouncer::new(debounce),
            last_external: String::new(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn selected(&self) -> i32 {
        self.selected
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced
    }

    pub fn is_showing_suggestions(&self) -> bool {
        self.show_suggestions
    }

    pub fn on_input(&mut self, text: impl Into<String>, now: Instant) {
        self.input = text.into();
        self.show_suggestions = true;
        self.selected = -1;
        self.debouncer.schedule(self.input.clone(), now);
    }

    /// Debounced query to fetch suggestions for, once its window has elapsed
    ///
    /// A blank query clears the list and needs no fetch.
    pub fn poll_debounce(&mut self, now: Instant) -> Option<String> {
        let query = self.debouncer.poll(now)?;
        if query == self.debounced {
            return None;
        }

        self.debounced = query.clone();
        self.suggestions.clear();
        if query.trim().is_empty() {
            return None;
        }
        Some(query)
    }

    /// Accept suggestions only for the current debounced query
    pub fn set_suggestions(&mut self, query: &str, suggestions: Vec<String>) -> bool {
        if query != self.debounced {
            tracing::debug!("[SEARCH] dropping suggestions for stale query '{}'", query);
            return false;
        }
        self.suggestions = suggestions;
        true
    }

    /// Returns the word to commit, if any
    pub fn on_key(&mut self, key: Key) -> Option<String> {
        match key {
            Key::ArrowDown => {
                let last = self.suggestions.len() as i32 - 1;
                self.selected = (self.selected + 1).min(last);
                None
            }
            Key::ArrowUp => {
                self.selected = (self.selected - 1).max(-1);
                None
            }
            Key::Enter => {
                let highlighted = usize::try_from(self.selected)
                    .ok()
                    .and_then(|i| self.suggestions.get(i))
                    .cloned();
                match highlighted {
                    Some(word) => self.commit(&word),
                    None => {
                        let input = self.input.clone();
                        self.commit(&input)
                    }
                }
            }
            Key::Escape => {
                self.show_suggestions = false;
                None
            }
        }
    }

    /// Trim and commit; blank input commits nothing
    pub fn commit(&mut self, word: &str) -> Option<String> {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.input = trimmed.to_string();
        self.show_suggestions = false;
        Some(trimmed.to_string())
    }

    pub fn on_focus(&mut self) {
        if !self.input.trim().is_empty() {
            self.show_suggestions = true;
        }
    }

    pub fn on_outside_pointer_down(&mut self) {
        self.show_suggestions = false;
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.show_suggestions = false;
    }

    /// Follow a search word changed elsewhere (history, entry links)
    pub fn sync_external(&mut self, search_word: &str) {
        if search_word == self.last_external {
            return;
        }
        self.last_external = search_word.to_string();
        if !search_word.is_empty() && search_word != self.input {
            self.input = search_word.to_string();
        }
    }

    pub fn view(&self) -> SearchView {
        SearchView {
            input: self.input.clone(),
            suggestions: self.suggestions.clone(),
            selected: self.selected,
            show_suggestions: self.show_suggestions && !self.suggestions.is_empty(),
        }
    }
}
