use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::SetTitle;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedReceiver;

use super::LoadMessage;
use crate::app::{handle_input, App};
use crate::ui;

/// Run the main application event loop
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    mut loads: UnboundedReceiver<LoadMessage>,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let mut shown_title = String::new();

    loop {
        // Apply whatever finished loading since the last frame
        while let Ok((city, result)) = loads.try_recv() {
            app.on_city_loaded(city, result);
        }
        app.run_due_tasks(Instant::now());

        sync_title(app, &mut shown_title);

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        tracing::debug!("redraw after resize failed");
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::warn!(error = %e, "failed to read terminal event"),
            }
        }

        // let the load tasks make progress between frames
        tokio::task::yield_now().await;
    }
    Ok(())
}

fn sync_title(app: &App, shown: &mut String) {
    let title = &app.view().document_title;
    if title == shown {
        return;
    }
    if let Err(e) = execute!(std::io::stdout(), SetTitle(title.as_str())) {
        tracing::debug!(error = %e, "terminal does not accept a title");
    }
    shown.clone_from(title);
}
