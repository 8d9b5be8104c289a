use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::config::Config;
use crate::filter::NameFilter;
use crate::roster::{IdGenerator, RosterReducer};
use crate::store::Store;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Runs the terminal UI until the user quits.
///
/// The store, filter, and id generator are constructed here and handed to
/// the collaborators that need them; nothing is global.
pub fn run(config: Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    let store = Store::<RosterReducer>::new();
    let filter = NameFilter::new(&config.filter.banned_words);
    let mut app = App::new(store.clone(), filter, IdGenerator::new());

    // The render collaborator: subscribed once at startup, it marks the
    // screen dirty after every committed action.
    let render_pending = Arc::new(AtomicBool::new(true));
    let render_flag = Arc::clone(&render_pending);
    let subscription = store.subscribe(move || render_flag.store(true, Ordering::Release));

    let events = EventHandler::new(tick_rate);
    info!("ui loop started");

    loop {
        if render_pending.swap(false, Ordering::AcqRel) {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
                // Entry edits and cursor moves live outside the store.
                render_pending.store(true, Ordering::Release);
            }
            Ok(AppEvent::Resize) => render_pending.store(true, Ordering::Release),
            Ok(AppEvent::Tick) => {
                if app.on_tick() {
                    render_pending.store(true, Ordering::Release);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    subscription.unsubscribe();
    info!("ui loop finished");
    drop(guard);
    Ok(())
}
