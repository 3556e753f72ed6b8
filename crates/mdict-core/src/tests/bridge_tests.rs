use mdict_types::LookupResult;

use crate::bridge::{
    BridgeMessage, HostBridge, HostEvent, INITIAL_FRAME_HEIGHT, Outbound, display_height,
    normalize_entry_word,
};
use crate::error::BridgeError;

fn result(uuid: &str, html: &str) -> LookupResult {
    LookupResult {
        word: "hello".into(),
        uuid: uuid.into(),
        title: Some(format!("Dict {uuid}")),
        logo: None,
        found: true,
        html: html.into(),
    }
}

fn loaded() -> HostBridge {
    let mut bridge = HostBridge::new();
    bridge.load(&[result("u1", "<p>one</p>"), result("u2", "<p>two</p>")]);
    bridge
}

#[test]
fn test_parse_known_messages() {
    assert_eq!(
        BridgeMessage::parse(r#"{"type":"iframe-resize","uuid":"u1","height":340}"#).unwrap(),
        BridgeMessage::IframeResize {
            uuid: "u1".into(),
            height: 340.0
        }
    );
    assert_eq!(
        BridgeMessage::parse(r#"{"type":"entry-click","word":"cat"}"#).unwrap(),
        BridgeMessage::EntryClick { word: "cat".into() }
    );
}

#[test]
fn test_parse_rejects_unknown_and_malformed() {
    assert!(matches!(
        BridgeMessage::parse(r#"{"type":"navigate","url":"x"}"#),
        Err(BridgeError::UnknownType(kind)) if kind == "navigate"
    ));
    assert!(matches!(
        BridgeMessage::parse(r#"{"uuid":"u1"}"#),
        Err(BridgeError::MissingType)
    ));
    assert!(matches!(
        BridgeMessage::parse("not json"),
        Err(BridgeError::MissingType)
    ));
    assert!(matches!(
        BridgeMessage::parse(r#"{"type":"iframe-resize","uuid":"u1"}"#),
        Err(BridgeError::Malformed { .. })
    ));
}

#[test]
fn test_theme_serializes_with_type_tag() {
    let json = BridgeMessage::Theme { dark: true }.to_json();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["type"], "theme");
    assert_eq!(value["dark"], true);
}

#[test]
fn test_display_height_has_floor_and_padding() {
    assert_eq!(display_height(0.0), 100);
    assert_eq!(display_height(79.0), 100);
    assert_eq!(display_height(80.0), 100);
    assert_eq!(display_height(81.0), 101);
    assert_eq!(display_height(500.0), 520);

    for h in [0.0, 12.5, 80.0, 250.0, 4096.0] {
        let shown = display_height(h) as f64;
        assert!(shown >= 100.0);
        assert!(shown >= h + 20.0 - 0.5);
    }
}

#[test]
fn test_resize_only_touches_matching_frame() {
    let mut bridge = loaded();

    let event = bridge
        .receive(r#"{"type":"iframe-resize","uuid":"u2","height":480}"#, false)
        .unwrap();

    assert_eq!(
        event,
        Some(HostEvent::Resized {
            uuid: "u2".into(),
            height: 500
        })
    );
    assert_eq!(bridge.frame("u1").unwrap().height, INITIAL_FRAME_HEIGHT);
    assert_eq!(bridge.frame("u2").unwrap().height, 500);

    let unknown = bridge
        .receive(r#"{"type":"iframe-resize","uuid":"u9","height":480}"#, false)
        .unwrap();
    assert_eq!(unknown, None);
}

#[test]
fn test_reload_keeps_known_heights() {
    let mut bridge = loaded();
    bridge.handle(
        BridgeMessage::IframeResize {
            uuid: "u1".into(),
            height: 300.0,
        },
        false,
    );

    bridge.load(&[result("u1", "<p>again</p>"), result("u3", "<p>new</p>")]);

    assert_eq!(bridge.frame("u1").unwrap().height, 320);
    assert_eq!(bridge.frame("u3").unwrap().height, INITIAL_FRAME_HEIGHT);
    assert!(bridge.frame("u2").is_none());
}

#[test]
fn test_request_theme_replies_to_sender() {
    let mut bridge = loaded();

    let reply = bridge.handle(BridgeMessage::RequestTheme { uuid: "u1".into() }, true);
    assert_eq!(
        reply,
        Some(HostEvent::Reply(Outbound {
            uuid: "u1".into(),
            message: BridgeMessage::Theme { dark: true },
        }))
    );

    assert_eq!(
        bridge.handle(BridgeMessage::RequestTheme { uuid: "nope".into() }, true),
        None
    );
}

#[test]
fn test_entry_click_strips_quotes() {
    let mut bridge = loaded();

    let event = bridge
        .receive(r#"{"type":"entry-click","word":"\"foo\""}"#, false)
        .unwrap();
    assert_eq!(event, Some(HostEvent::EntryClick("foo".into())));

    assert_eq!(normalize_entry_word("'bar'"), "bar");
    assert_eq!(normalize_entry_word("plain"), "plain");
    assert_eq!(normalize_entry_word("\"\"quoted\"\""), "\"quoted\"");

    let blank = bridge.handle(BridgeMessage::EntryClick { word: "  ".into() }, false);
    assert_eq!(blank, None);
}

#[test]
fn test_theme_from_frame_is_dropped() {
    let mut bridge = loaded();
    assert_eq!(bridge.handle(BridgeMessage::Theme { dark: true }, false), None);
}

#[test]
fn test_broadcast_reaches_every_frame() {
    let bridge = loaded();
    let outbound = bridge.broadcast_theme(false);

    let uuids: Vec<&str> = outbound.iter().map(|o| o.uuid.as_str()).collect();
    assert_eq!(uuids, vec!["u1", "u2"]);
    assert!(
        outbound
            .iter()
            .all(|o| o.message == BridgeMessage::Theme { dark: false })
    );
}

#[test]
fn test_missing_title_uses_default() {
    let mut bridge = HostBridge::new();
    let mut untitled = result("u1", "<p>x</p>");
    untitled.title = None;
    bridge.load(&[untitled]);

    assert_eq!(bridge.frame("u1").unwrap().title, "Dictionary");
}
