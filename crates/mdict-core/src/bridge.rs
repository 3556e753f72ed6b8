//! Host side of the frame message protocol.
//!
//! Each dictionary result lives in its own frame document (see [`crate::panel`]).
//! Frames post JSON messages to the host; all frames share one listener, so
//! uuid-scoped messages are only applied to the frame with that uuid.

use serde::{Deserialize, Serialize};

use mdict_types::LookupResult;

use crate::error::BridgeError;
use crate::panel;

pub const INITIAL_FRAME_HEIGHT: u32 = 200;
pub const MIN_FRAME_HEIGHT: f64 = 100.0;
/// Added to the reported scroll height so the frame never shows a scrollbar
pub const FRAME_HEIGHT_PADDING: f64 = 20.0;
pub const DEFAULT_PANEL_TITLE: &str = "Dictionary";

const KNOWN_TYPES: [&str; 4] = ["iframe-resize", "request-theme", "theme", "entry-click"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BridgeMessage {
    IframeResize { uuid: String, height: f64 },
    RequestTheme { uuid: String },
    Theme { dark: bool },
    EntryClick { word: String },
}

impl BridgeMessage {
    /// Validate a raw payload; unknown types are rejected, not ignored
    pub fn parse(raw: &str) -> Result<Self, BridgeError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|_| BridgeError::MissingType)?;

        let kind = value
            .get("type")
            .and_then(|t| t.as_str())
            .ok_or(BridgeError::MissingType)?
            .to_string();

        if !KNOWN_TYPES.contains(&kind.as_str()) {
            return Err(BridgeError::UnknownType(kind));
        }

        serde_json::from_value(value).map_err(|source| BridgeError::Malformed { kind, source })
    }

    pub fn to_json(&self) -> String {
        // a tagged enum of strings, bools and numbers always serializes
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Displayed frame height for a reported content height
pub fn display_height(reported: f64) -> u32 {
    (reported + FRAME_HEIGHT_PADDING).max(MIN_FRAME_HEIGHT).round() as u32
}

/// Strip one leading and one trailing quote character
pub fn normalize_entry_word(raw: &str) -> &str {
    let word = raw
        .strip_prefix('"')
        .or_else(|| raw.strip_prefix('\''))
        .unwrap_or(raw);
    word.strip_suffix('"')
        .or_else(|| word.strip_suffix('\''))
        .unwrap_or(word)
}

/// One embedded result frame as the host sees it
#[derive(Debug, Clone, PartialEq)]
pub struct PanelFrame {
    pub uuid: String,
    pub title: String,
    pub logo: Option<String>,
    pub fragment: String,
    pub document: String,
    pub height: u32,
}

/// A message the host posts into one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Outbound {
    pub uuid: String,
    pub message: BridgeMessage,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Resized { uuid: String, height: u32 },
    Reply(Outbound),
    /// `dict-entry-click`: the app should navigate to this word
    EntryClick(String),
}

#[derive(Debug, Default)]
pub struct HostBridge {
    frames: Vec<PanelFrame>,
}

impl HostBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[PanelFrame] {
        &self.frames
    }

    pub fn frame(&self, uuid: &str) -> Option<&PanelFrame> {
        self.frames.iter().find(|f| f.uuid == uuid)
    }

    /// Replace frames with a new result set; a dictionary that stays keeps its last height
    pub fn load(&mut self, results: &[LookupResult]) {
        let frames = results
            .iter()
            .map(|r| {
                let height = self
                    .frame(&r.uuid)
                    .map(|f| f.height)
                    .unwrap_or(INITIAL_FRAME_HEIGHT);
                PanelFrame {
                    uuid: r.uuid.clone(),
                    title: r
                        .title
                        .clone()
                        .unwrap_or_else(|| DEFAULT_PANEL_TITLE.to_string()),
                    logo: r.logo.clone().filter(|l| !l.is_empty()),
                    fragment: r.html.clone(),
                    document: panel::render_document(&r.uuid, &r.html),
                    height,
                }
            })
            .collect();

        self.frames = frames;
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Parse and route one raw payload
    pub fn receive(&mut self, raw: &str, dark: bool) -> Result<Option<HostEvent>, BridgeError> {
        let message = BridgeMessage::parse(raw)?;
        Ok(self.handle(message, dark))
    }

    pub fn handle(&mut self, message: BridgeMessage, dark: bool) -> Option<HostEvent> {
        match message {
            BridgeMessage::IframeResize { uuid, height } => {
                let frame = self.frames.iter_mut().find(|f| f.uuid == uuid)?;
                frame.height = display_height(height);
                tracing::trace!("[BRIDGE] {} height {}", uuid, frame.height);
                Some(HostEvent::Resized {
                    uuid,
                    height: frame.height,
                })
            }
            BridgeMessage::RequestTheme { uuid } => {
                self.frame(&uuid)?;
                Some(HostEvent::Reply(Outbound {
                    uuid,
                    message: BridgeMessage::Theme { dark },
                }))
            }
            BridgeMessage::EntryClick { word } => {
                let word = normalize_entry_word(word.trim()).trim();
                if word.is_empty() {
                    return None;
                }
                tracing::debug!("[BRIDGE] entry click '{}'", word);
                Some(HostEvent::EntryClick(word.to_string()))
            }
            // host-to-frame only
            BridgeMessage::Theme { .. } => {
                tracing::debug!("[BRIDGE] dropping theme message sent to host");
                None
            }
        }
    }

    /// Theme push for every frame after dark mode changes
    pub fn broadcast_theme(&self, dark: bool) -> Vec<Outbound> {
        self.frames
            .iter()
            .map(|f| Outbound {
                uuid: f.uuid.clone(),
                message: BridgeMessage::Theme { dark },
            })
            .collect()
    }
}
