use std::fmt::Write;

use mdict_types::{ResultsView, Screen, SidebarTab};

pub const ERROR_TITLE: &str = "Something went wrong";
pub const ERROR_HINT: &str = "Restart the client to reload.";

/// Full-screen error shown when the app cannot continue
pub fn render_fatal(message: &str) -> String {
    format!("\n!! {ERROR_TITLE}\n!! {message}\n!! {ERROR_HINT}\n")
}

pub fn render_status(message: &str) -> String {
    format!("-- {message}")
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n[{title}]");
}

pub fn render_screen(screen: &Screen) -> String {
    let mut out = String::new();
    let theme = if screen.dark_mode { "dark" } else { "light" };
    let _ = writeln!(out, "==== Flask-Mdict ({theme}) ====");

    // search box
    let _ = writeln!(out, "search> {}", screen.search.input);
    if screen.search.show_suggestions {
        for (i, word) in screen.search.suggestions.iter().enumerate() {
            let marker = if i as i32 == screen.search.selected {
                ">"
            } else {
                " "
            };
            let _ = writeln!(out, "  {marker} {word}");
        }
    }

    if let Some(meta) = &screen.meta {
        section(&mut out, if meta.saved { "word ♥" } else { "word ♡" });
        let mut line = Vec::new();
        if let Some(phonetic) = &meta.phonetic {
            line.push(format!("/{phonetic}/"));
        }
        if meta.oxford {
            line.push("Oxford 3000".to_string());
        }
        if let Some(stars) = &meta.collins_stars {
            line.push(stars.clone());
        }
        line.extend(meta.tags.iter().cloned());
        if let Some(bnc) = meta.bnc {
            line.push(format!("BNC {bnc}"));
        }
        if let Some(frq) = meta.frq {
            line.push(format!("FRQ {frq}"));
        }
        if !line.is_empty() {
            let _ = writeln!(out, "{}", line.join("  "));
        }
        if let Some(translation) = &meta.translation {
            let _ = writeln!(out, "{translation}");
        }
    }

    section(&mut out, "results");
    match &screen.results {
        ResultsView::Idle => {
            let _ = writeln!(out, "Type a word to search.");
        }
        ResultsView::Loading => {
            let _ = writeln!(out, "Searching...");
        }
        ResultsView::Failed => {
            let _ = writeln!(out, "Failed to load results.");
        }
        ResultsView::Empty { word } => {
            let _ = writeln!(out, "No results found for \"{word}\".");
        }
        ResultsView::Panels(panels) => {
            for panel in panels {
                let _ = writeln!(out, "--- {} ({}px) [{}]", panel.title, panel.height, panel.uuid);
                if !panel.excerpt.is_empty() {
                    let _ = writeln!(out, "{}", panel.excerpt);
                }
            }
        }
    }

    if let Some(history) = &screen.history {
        section(&mut out, &format!("history ({})", history.total));
        let _ = write!(out, "{}", history.words.join(", "));
        if let Some(more) = history.more {
            let _ = write!(out, "  +{more} more");
        }
        let _ = writeln!(out);
    }

    let sidebar = &screen.sidebar;
    if sidebar.open {
        let tab = match sidebar.tab {
            SidebarTab::Dicts => "dicts",
            SidebarTab::History => "history",
            SidebarTab::Wordbook => "wordbook",
        };
        section(&mut out, &format!("sidebar: {tab} ({}px)", sidebar.width));

        match sidebar.tab {
            SidebarTab::Dicts => {
                let marker = if sidebar.all_selected { ">" } else { " " };
                let _ = writeln!(out, "{marker} All Dictionaries");
                for row in &sidebar.rows {
                    let marker = if row.selected { ">" } else { " " };
                    let enabled = if row.enabled { "on " } else { "off" };
                    let _ = writeln!(out, "{marker} [{enabled}] {} ({})", row.title, row.uuid);
                }
                let _ = writeln!(out, "{}", sidebar.footer);
            }
            SidebarTab::History => {}
            SidebarTab::Wordbook => {
                if let Some(wordbooks) = &screen.wordbooks {
                    if wordbooks.books.is_empty() {
                        let _ = writeln!(out, "No wordbooks yet.");
                    }
                    for book in &wordbooks.books {
                        let marker = if wordbooks.open == Some(book.id) { ">" } else { " " };
                        let _ = writeln!(out, "{marker} #{} {}", book.id, book.name);
                    }
                    for entry in &wordbooks.entries {
                        let _ = writeln!(out, "    - {} (#{})", entry.word, entry.id);
                    }
                }
            }
        }
    }

    if screen.settings.open {
        section(&mut out, "settings");
        let state = if screen.settings.dark_mode { "on" } else { "off" };
        let _ = writeln!(out, "Dark mode: {state}");
        let _ = writeln!(out, "{}", screen.settings.shortcut_hint);
    }

    out
}
