use mdict_types::{ActiveDict, Key, SidebarTab, UiEvent};

use crate::command::{CommandError, parse};

#[test]
fn test_plain_text_and_enter() {
    assert_eq!(parse("hello"), Ok(UiEvent::Input("hello".into())));
    assert_eq!(parse("  two words "), Ok(UiEvent::Input("  two words ".into())));
    assert_eq!(parse(""), Ok(UiEvent::Key(Key::Enter)));
    assert_eq!(parse("   \r\n"), Ok(UiEvent::Key(Key::Enter)));
}

#[test]
fn test_navigation_commands() {
    assert_eq!(parse(":up"), Ok(UiEvent::Key(Key::ArrowUp)));
    assert_eq!(parse(":down"), Ok(UiEvent::Key(Key::ArrowDown)));
    assert_eq!(parse(":esc"), Ok(UiEvent::Key(Key::Escape)));
    assert_eq!(parse(":blur"), Ok(UiEvent::OutsidePointerDown));
    assert_eq!(parse(":search  apple "), Ok(UiEvent::Search("apple".into())));
}

#[test]
fn test_dictionary_commands() {
    assert_eq!(parse(":dict all"), Ok(UiEvent::SelectDict(ActiveDict::All)));
    assert_eq!(
        parse(":dict 6b2f"),
        Ok(UiEvent::SelectDict(ActiveDict::Dict("6b2f".into())))
    );
    assert_eq!(parse(":toggle 6b2f"), Ok(UiEvent::ToggleDict("6b2f".into())));
    assert_eq!(parse(":dict"), Err(CommandError::MissingArgument("dict")));
}

#[test]
fn test_layout_commands() {
    assert_eq!(parse(":sidebar open"), Ok(UiEvent::SetSidebarOpen(true)));
    assert_eq!(parse(":settings close"), Ok(UiEvent::SetSettingsOpen(false)));
    assert_eq!(parse(":width 320"), Ok(UiEvent::SetSidebarWidth(320.0)));
    assert_eq!(
        parse(":tab wordbook"),
        Ok(UiEvent::SetSidebarTab(SidebarTab::Wordbook))
    );
    assert!(matches!(
        parse(":width wide"),
        Err(CommandError::InvalidArgument { command: "width", .. })
    ));
    assert!(matches!(
        parse(":tab nowhere"),
        Err(CommandError::InvalidArgument { command: "tab", .. })
    ));
}

#[test]
fn test_shortcut_combo() {
    assert_eq!(
        parse(":key ctrl+shift+d"),
        Ok(UiEvent::Shortcut {
            key: "d".into(),
            ctrl: true,
            meta: false,
            shift: true,
        })
    );
    assert_eq!(
        parse(":key Cmd+Shift+D"),
        Ok(UiEvent::Shortcut {
            key: "D".into(),
            ctrl: false,
            meta: true,
            shift: true,
        })
    );
    assert!(parse(":key ctrl+shift").is_err());
}

#[test]
fn test_wordbook_commands() {
    assert_eq!(
        parse(":wb new Travel words"),
        Ok(UiEvent::CreateWordbook("Travel words".into()))
    );
    assert_eq!(
        parse(":wb rename 3 Verbs"),
        Ok(UiEvent::RenameWordbook {
            id: 3,
            name: "Verbs".into()
        })
    );
    assert_eq!(parse(":wb rm 3"), Ok(UiEvent::DeleteWordbook(3)));
    assert_eq!(parse(":wb open 2"), Ok(UiEvent::OpenWordbook(2)));
    assert_eq!(
        parse(":wb add 2 ice cream"),
        Ok(UiEvent::AddEntry {
            wordbook_id: 2,
            word: "ice cream".into()
        })
    );
    assert_eq!(
        parse(":wb del 2 17"),
        Ok(UiEvent::RemoveEntry {
            wordbook_id: 2,
            entry_id: 17
        })
    );
    assert_eq!(parse(":wb"), Err(CommandError::MissingArgument("wb")));
    assert!(matches!(
        parse(":wb rm x"),
        Err(CommandError::InvalidArgument { command: "wb", .. })
    ));
}

#[test]
fn test_misc_commands() {
    assert_eq!(parse(":history"), Ok(UiEvent::ExpandHistory(true)));
    assert_eq!(parse(":history less"), Ok(UiEvent::ExpandHistory(false)));
    assert_eq!(parse(":clear-history"), Ok(UiEvent::ClearHistory));
    assert_eq!(parse(":save"), Ok(UiEvent::ToggleSaved));
    assert_eq!(parse(":cache"), Ok(UiEvent::CacheInfo));
    assert_eq!(parse(":cache clear"), Ok(UiEvent::ClearCache));
    assert_eq!(parse(":export /tmp/frames"), Ok(UiEvent::ExportFrames("/tmp/frames".into())));
    assert_eq!(
        parse(r#":msg {"type":"entry-click","word":"cat"}"#),
        Ok(UiEvent::BridgeMessage(r#"{"type":"entry-click","word":"cat"}"#.into()))
    );
    assert_eq!(parse(":q"), Ok(UiEvent::Quit));
    assert_eq!(parse(":nope"), Err(CommandError::Unknown("nope".into())));
}
