use std::io::Write;

use kanal::{AsyncReceiver, AsyncSender};
use mdict_types::{AppEvent, UiEvent};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

pub mod command;
pub mod render;

#[cfg(test)]
mod tests;

/// Terminal front-end on stdin/stdout
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let input = BufReader::new(tokio::io::stdin());
    run(input, std::io::stdout(), app_to_ui_rx, ui_to_app_tx).await
}

pub async fn run<R, W>(
    input: R,
    mut output: W,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut input_open = true;

    tracing::info!("[UI] Terminal front-end ready");
    writeln!(output, "{}", command::HELP)?;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    tracing::debug!("[UI] Input closed");
                    input_open = false;
                    ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Quit)).await?;
                    continue;
                };

                match command::parse(&line) {
                    Ok(event) => {
                        tracing::debug!("[UI] {:?}", event);
                        ui_to_app_tx.send(AppEvent::UiEvent(event)).await?;
                    }
                    Err(e) => {
                        writeln!(output, "{e}\n{}", command::HELP)?;
                    }
                }
            }
            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else {
                    tracing::debug!("[UI] App channel closed");
                    break;
                };
                if !handle_events(event, &mut output)? {
                    break;
                }
                output.flush()?;
            }
        }
    }

    Ok(())
}

/// Draw one app event; false once nothing more should be drawn
pub fn handle_events<W: Write>(event: AppEvent, output: &mut W) -> anyhow::Result<bool> {
    match event {
        AppEvent::Render(screen) => {
            writeln!(output, "{}", render::render_screen(&screen))?;
        }
        AppEvent::Status(message) => {
            writeln!(output, "{}", render::render_status(&message))?;
        }
        AppEvent::Fatal(message) => {
            tracing::error!("[UI] Fatal: {}", message);
            writeln!(output, "{}", render::render_fatal(&message))?;
            return Ok(false);
        }
        AppEvent::UiEvent(UiEvent::Quit) => {
            tracing::debug!("[UI] Closing");
            return Ok(false);
        }
        AppEvent::UiEvent(_) | AppEvent::Tick => {}
    }
    Ok(true)
}
