use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use mdict_api::DictApi;
use mdict_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::tick_io;
use crate::state::AppState;
use crate::ui::ui_loop;

/// How long the front-end gets to draw the error screen before tasks are aborted
const FATAL_GRACE: Duration = Duration::from_secs(2);

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),  // renders and status lines
            ui_to_app: kanal::bounded_async(128), // commands and ticks
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub async fn spawn_tasks(&self, api: Arc<dyn DictApi>) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            api,
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        // UI loop
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
        ));

        // Debounce ticker
        let delta_time = {
            let config = self.state.config.read().await;
            Duration::from_millis(config.delta_time)
        };
        tasks.spawn(tick_io(
            delta_time,
            self.cancel_token.child_token(),
            self.channels.ui_to_app.0.clone(),
        ));

        tasks
    }

    /// Wait for the first task to stop, then bring the rest down
    ///
    /// A failed or panicked task puts the front-end on the error screen.
    pub async fn supervise(&self, mut tasks: JoinSet<anyhow::Result<()>>) -> anyhow::Result<()> {
        let outcome = match tasks.join_next().await {
            Some(Ok(Ok(()))) => {
                tracing::info!("[CONTROLLER] Task finished, shutting down");
                Ok(())
            }
            Some(Ok(Err(e))) => {
                tracing::error!("[CONTROLLER] Task failed: {e:#}");
                Err(e)
            }
            Some(Err(e)) => {
                tracing::error!("[CONTROLLER] Task panicked: {e}");
                Err(anyhow::anyhow!("task panicked: {e}"))
            }
            None => Ok(()),
        };

        if let Err(e) = &outcome {
            let _ = self
                .channels
                .app_to_ui
                .0
                .send(AppEvent::Fatal(e.to_string()))
                .await;
        }

        self.shutdown();
        let drained = tokio::time::timeout(FATAL_GRACE, async {
            while tasks.join_next().await.is_some() {}
        })
        .await;
        if drained.is_err() {
            tracing::debug!("[CONTROLLER] Aborting remaining tasks");
            tasks.abort_all();
        }

        outcome
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }

    #[cfg(test)]
    pub fn channels(&self) -> &ChannelSet {
        &self.channels
    }
}
