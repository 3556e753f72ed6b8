use std::path::Path;

use anyhow::Context;
use kanal::AsyncSender;
use mdict_core::panel;
use mdict_types::AppEvent;

use crate::events::{Session, status};

/// File name for a frame document, keeping only filename-safe characters
pub fn frame_file_name(uuid: &str) -> String {
    let stem: String = uuid
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}.html")
}

/// Write each frame document plus an `index.html` host page into `dir`
pub fn export_frames(session: &Session, dir: &Path) -> anyhow::Result<usize> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let frames = session.bridge.frames();
    for frame in frames {
        let path = dir.join(frame_file_name(&frame.uuid));
        std::fs::write(&path, &frame.document)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    let state = session.store.state();
    let host = panel::render_host_page(&state.search_word, frames, state.dark_mode);
    let index = dir.join("index.html");
    std::fs::write(&index, host).with_context(|| format!("writing {}", index.display()))?;

    Ok(frames.len())
}

pub async fn handle_frame_export(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    dir: &str,
) -> anyhow::Result<()> {
    let message = match export_frames(session, Path::new(dir)) {
        Ok(count) => {
            tracing::info!("[EXPORT] Wrote {} frames to {}", count, dir);
            format!("Exported {count} frames to {dir}")
        }
        Err(e) => {
            tracing::warn!("[EXPORT] {e:#}");
            format!("Export failed: {e}")
        }
    };
    status(app_to_ui_tx, &message).await
}
