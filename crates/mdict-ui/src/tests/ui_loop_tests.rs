use std::time::Duration;

use mdict_types::{AppEvent, Key, Screen, UiEvent};
use tokio::time::timeout;

use crate::{handle_events, run};

#[tokio::test]
async fn test_lines_become_ui_events() {
    let (to_ui_tx, to_ui_rx) = kanal::bounded_async::<AppEvent>(8);
    let (from_ui_tx, from_ui_rx) = kanal::bounded_async::<AppEvent>(8);

    let input: &[u8] = b"hello\n:down\n\n";
    let ui = tokio::spawn(async move { run(input, Vec::new(), to_ui_rx, from_ui_tx).await });

    let mut received = Vec::new();
    for _ in 0..4 {
        match timeout(Duration::from_secs(2), from_ui_rx.recv()).await {
            Ok(Ok(AppEvent::UiEvent(event))) => received.push(event),
            Ok(Ok(_)) => panic!("Wrong event type"),
            Ok(Err(e)) => panic!("Channel error: {}", e),
            Err(_) => panic!("Timeout waiting for ui event"),
        }
    }

    assert_eq!(
        received,
        vec![
            UiEvent::Input("hello".into()),
            UiEvent::Key(Key::ArrowDown),
            UiEvent::Key(Key::Enter),
            UiEvent::Quit,
        ]
    );

    to_ui_tx
        .send(AppEvent::UiEvent(UiEvent::Quit))
        .await
        .expect("send failed");
    let result = timeout(Duration::from_secs(2), ui).await;
    assert!(matches!(result, Ok(Ok(Ok(())))));
}

#[tokio::test]
async fn test_bad_command_is_not_forwarded() {
    let (to_ui_tx, to_ui_rx) = kanal::bounded_async::<AppEvent>(8);
    let (from_ui_tx, from_ui_rx) = kanal::bounded_async::<AppEvent>(8);

    let input: &[u8] = b":bogus\n";
    let ui = tokio::spawn(async move { run(input, Vec::new(), to_ui_rx, from_ui_tx).await });

    let first = timeout(Duration::from_secs(2), from_ui_rx.recv())
        .await
        .expect("timeout")
        .expect("channel closed");
    assert!(matches!(first, AppEvent::UiEvent(UiEvent::Quit)));

    drop(to_ui_tx);
    let result = timeout(Duration::from_secs(2), ui).await;
    assert!(matches!(result, Ok(Ok(Ok(())))));
}

#[test]
fn test_fatal_stops_drawing() {
    let mut out = Vec::new();

    assert!(handle_events(AppEvent::Render(Box::new(Screen::default())), &mut out).unwrap());
    assert!(handle_events(AppEvent::Status("Saved".into()), &mut out).unwrap());
    assert!(!handle_events(AppEvent::Fatal("boom".into()), &mut out).unwrap());

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("-- Saved"));
    assert!(text.contains("Something went wrong"));
    assert!(text.contains("boom"));
}
