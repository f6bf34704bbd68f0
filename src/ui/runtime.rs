use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Drive the UI until the user quits. `events` must be the handler whose
/// sender was given to the app's lookup bridge.
pub fn run(mut app: App, events: EventHandler) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!("ui started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Lookup(event)) => app.on_lookup_event(event),
            Err(RecvTimeoutError::Timeout) => app.on_tick(),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!(items = app.store().len(), "ui stopped");
    Ok(())
}
