use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Run the interactive counter until the user quits.
pub fn run(mut app: App, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(tick_rate);

    loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next_event()? {
            AppEvent::Key(key) => handle_key(&mut app, key),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize(_, _) => app.mark_dirty(),
        }
    }

    drop(guard);
    Ok(())
}
