use std::time::Duration;

use kanal::AsyncSender;
use mdict_types::AppEvent;
use tokio_util::sync::CancellationToken;

/// Periodic ticks into the event loop, they drive the suggestion debounce
pub async fn tick_io(
    delta_time: Duration,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut interval = tokio::time::interval(delta_time);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("[TICK] Cancelled");
                return Ok(());
            }
            _ = interval.tick() => {
                // a full queue means the loop is busy, the next tick will do
                if !event_tx.try_send(AppEvent::Tick)? {
                    tracing::trace!("[TICK] Event loop busy, skipping tick");
                }
            }
        }
    }
}
