use kanal::AsyncSender;
use mdict_types::{ActiveDict, AppEvent};

use crate::events::search::refresh_lookup;
use crate::events::{Session, status};

pub async fn handle_dict_select(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    dict: ActiveDict,
) -> anyhow::Result<()> {
    tracing::info!("[DICTS] Active dictionary: {}", dict);
    session.store.set_active_dict(dict);
    session.store.set_sidebar_open(false);
    refresh_lookup(session, app_to_ui_tx).await
}

pub async fn handle_dict_toggle(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    uuid: &str,
) -> anyhow::Result<()> {
    match session.data.toggle_dict(uuid).await {
        Ok(result) => {
            let state = if result.enabled { "enabled" } else { "disabled" };
            status(app_to_ui_tx, &format!("Dictionary {} {}", result.uuid, state)).await?;
            // aggregated results depend on the enabled set
            refresh_lookup(session, app_to_ui_tx).await
        }
        Err(e) => {
            tracing::warn!("[DICTS] Toggle of {} failed: {e}", uuid);
            status(app_to_ui_tx, "Failed to toggle dictionary").await
        }
    }
}
