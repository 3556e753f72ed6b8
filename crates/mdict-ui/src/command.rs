//! Line commands typed at the prompt.
//!
//! Plain text goes into the search box, an empty line presses Enter and
//! `:`-prefixed lines drive everything else.

use mdict_types::{ActiveDict, Key, SidebarTab, UiEvent};

pub const HELP: &str = "\
commands:
  <text>                 type into the search box (empty line = Enter)
  :search <word>         look up a word directly
  :up | :down | :esc     move through suggestions / close them
  :focus | :blur | :clear
  :dict all|<uuid>       choose the dictionary to search
  :toggle <uuid>         enable or disable a dictionary
  :dark                  toggle dark mode
  :key <combo>           press a key combination, e.g. ctrl+shift+d
  :sidebar open|close    :width <px>    :tab dicts|history|wordbook
  :settings open|close
  :history more|less     :clear-history
  :save                  save or unsave the current word
  :wb new <name> | rename <id> <name> | rm <id> | open <id>
  :wb add <id> <word> | del <id> <entry>
  :msg <json>            deliver a frame message to the host
  :export <dir>          write the frame documents to a directory
  :cache [clear]         :refresh    :quit";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument for :{0}")]
    MissingArgument(&'static str),

    #[error("Invalid argument for :{command}: {value}")]
    InvalidArgument {
        command: &'static str,
        value: String,
    },
}

fn required<'a>(command: &'static str, value: Option<&'a str>) -> Result<&'a str, CommandError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(CommandError::MissingArgument(command))
}

fn id(command: &'static str, value: Option<&str>) -> Result<i64, CommandError> {
    let raw = required(command, value)?;
    raw.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        value: raw.to_string(),
    })
}

fn open_close(command: &'static str, value: Option<&str>) -> Result<bool, CommandError> {
    match required(command, value)? {
        "open" | "on" => Ok(true),
        "close" | "off" => Ok(false),
        other => Err(CommandError::InvalidArgument {
            command,
            value: other.to_string(),
        }),
    }
}

/// `ctrl+shift+d` style combination
fn shortcut(raw: &str) -> Result<UiEvent, CommandError> {
    let mut ctrl = false;
    let mut meta = false;
    let mut shift = false;
    let mut key = None;

    for part in raw.split('+').map(str::trim) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => ctrl = true,
            "cmd" | "meta" | "super" => meta = true,
            "shift" => shift = true,
            "" => {}
            _ => key = Some(part.to_string()),
        }
    }

    let key = key.ok_or(CommandError::InvalidArgument {
        command: "key",
        value: raw.to_string(),
    })?;
    Ok(UiEvent::Shortcut {
        key,
        ctrl,
        meta,
        shift,
    })
}

fn wordbook(rest: Option<&str>) -> Result<UiEvent, CommandError> {
    let rest = required("wb", rest)?;
    let (action, args) = match rest.split_once(char::is_whitespace) {
        Some((action, args)) => (action, Some(args.trim())),
        None => (rest, None),
    };

    match action {
        "new" => Ok(UiEvent::CreateWordbook(required("wb", args)?.to_string())),
        "rename" => {
            let (id_part, name) = required("wb", args)?
                .split_once(char::is_whitespace)
                .ok_or(CommandError::MissingArgument("wb"))?;
            Ok(UiEvent::RenameWordbook {
                id: id("wb", Some(id_part))?,
                name: required("wb", Some(name))?.to_string(),
            })
        }
        "rm" | "delete" => Ok(UiEvent::DeleteWordbook(id("wb", args)?)),
        "open" => Ok(UiEvent::OpenWordbook(id("wb", args)?)),
        "add" => {
            let (id_part, word) = required("wb", args)?
                .split_once(char::is_whitespace)
                .ok_or(CommandError::MissingArgument("wb"))?;
            Ok(UiEvent::AddEntry {
                wordbook_id: id("wb", Some(id_part))?,
                word: required("wb", Some(word))?.to_string(),
            })
        }
        "del" => {
            let mut parts = required("wb", args)?.split_whitespace();
            Ok(UiEvent::RemoveEntry {
                wordbook_id: id("wb", parts.next())?,
                entry_id: id("wb", parts.next())?,
            })
        }
        other => Err(CommandError::InvalidArgument {
            command: "wb",
            value: other.to_string(),
        }),
    }
}

pub fn parse(line: &str) -> Result<UiEvent, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(UiEvent::Key(Key::Enter));
    }

    let Some(command) = line.strip_prefix(':') else {
        return Ok(UiEvent::Input(line.to_string()));
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, Some(rest)),
        None => (command, None),
    };

    match name {
        "search" | "s" => Ok(UiEvent::Search(required("search", rest)?.to_string())),
        "up" => Ok(UiEvent::Key(Key::ArrowUp)),
        "down" => Ok(UiEvent::Key(Key::ArrowDown)),
        "esc" => Ok(UiEvent::Key(Key::Escape)),
        "focus" => Ok(UiEvent::Focus),
        "blur" => Ok(UiEvent::OutsidePointerDown),
        "clear" => Ok(UiEvent::ClearInput),
        "dict" => Ok(UiEvent::SelectDict(ActiveDict::parse(required(
            "dict", rest,
        )?))),
        "toggle" => Ok(UiEvent::ToggleDict(required("toggle", rest)?.to_string())),
        "dark" => Ok(UiEvent::ToggleDarkMode),
        "key" => shortcut(required("key", rest)?),
        "sidebar" => Ok(UiEvent::SetSidebarOpen(open_close("sidebar", rest)?)),
        "width" => {
            let raw = required("width", rest)?;
            let width = raw.parse().map_err(|_| CommandError::InvalidArgument {
                command: "width",
                value: raw.to_string(),
            })?;
            Ok(UiEvent::SetSidebarWidth(width))
        }
        "tab" => {
            let raw = required("tab", rest)?;
            SidebarTab::parse(raw)
                .map(UiEvent::SetSidebarTab)
                .ok_or(CommandError::InvalidArgument {
                    command: "tab",
                    value: raw.to_string(),
                })
        }
        "settings" => Ok(UiEvent::SetSettingsOpen(open_close("settings", rest)?)),
        "history" => match rest.map(str::trim) {
            None | Some("") | Some("more") => Ok(UiEvent::ExpandHistory(true)),
            Some("less") => Ok(UiEvent::ExpandHistory(false)),
            Some(other) => Err(CommandError::InvalidArgument {
                command: "history",
                value: other.to_string(),
            }),
        },
        "clear-history" => Ok(UiEvent::ClearHistory),
        "save" => Ok(UiEvent::ToggleSaved),
        "wb" => wordbook(rest),
        "msg" => Ok(UiEvent::BridgeMessage(required("msg", rest)?.to_string())),
        "export" => Ok(UiEvent::ExportFrames(required("export", rest)?.to_string())),
        "cache" => match rest.map(str::trim) {
            None | Some("") => Ok(UiEvent::CacheInfo),
            Some("clear") => Ok(UiEvent::ClearCache),
            Some(other) => Err(CommandError::InvalidArgument {
                command: "cache",
                value: other.to_string(),
            }),
        },
        "refresh" => Ok(UiEvent::Refresh),
        "quit" | "q" => Ok(UiEvent::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
