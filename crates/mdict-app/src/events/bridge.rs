use kanal::AsyncSender;
use mdict_core::bridge::{HostEvent, Outbound};
use mdict_types::AppEvent;

use crate::events::search::navigate;
use crate::events::{Session, status};

/// Deliver a message into one frame
fn post(session: &mut Session, outbound: Outbound) {
    tracing::debug!(
        "[BRIDGE] -> {} {}",
        outbound.uuid,
        outbound.message.to_json()
    );
    session.outbox.push(outbound);
}

/// Route one message posted by a frame
pub async fn handle_bridge_message(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    raw: &str,
) -> anyhow::Result<bool> {
    let dark = session.store.state().dark_mode;

    match session.bridge.receive(raw, dark) {
        Ok(Some(HostEvent::Resized { .. })) => Ok(true),
        Ok(Some(HostEvent::Reply(outbound))) => {
            post(session, outbound);
            Ok(false)
        }
        Ok(Some(HostEvent::EntryClick(word))) => {
            tracing::info!("[BRIDGE] dict-entry-click '{}'", word);
            navigate(session, app_to_ui_tx, &word).await?;
            Ok(true)
        }
        Ok(None) => Ok(false),
        Err(e) => {
            tracing::warn!("[BRIDGE] Rejected frame message: {e}");
            status(app_to_ui_tx, &format!("Ignored frame message: {e}")).await?;
            Ok(false)
        }
    }
}

/// Flip dark mode and push the new theme to every frame
pub fn toggle_dark_mode(session: &mut Session) -> bool {
    let dark = session.store.toggle_dark_mode();
    tracing::info!("[THEME] Dark mode {}", if dark { "on" } else { "off" });

    for outbound in session.bridge.broadcast_theme(dark) {
        post(session, outbound);
    }
    true
}
