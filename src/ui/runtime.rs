use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;

use crate::config::ConfigStore;
use crate::data::UserRepository;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::run_fetch_worker;

/// Drives the screen until the user quits.
///
/// The fetch worker runs on the tokio runtime and is aborted when this
/// function returns; a fetch still in flight at that point resolves into a
/// closed channel and is discarded. The config store is shared with the
/// caller, so settings read here see any reload that happened before entry.
pub fn run(store: ConfigStore, repository: Arc<dyn UserRepository>) -> io::Result<()> {
    let tick_rate = store.get().ui.tick_rate();
    let runtime = tokio::runtime::Runtime::new()?;
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let (fetch_tx, fetch_rx) = tokio::sync::mpsc::channel(8);
    let worker = runtime.spawn(run_fetch_worker(repository, fetch_rx, events.sender()));

    let mut app = App::new();
    app.set_fetch_sender(fetch_tx);
    app.load();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::FetchResult { generation, result }) => {
                app.on_fetch_result(generation, result);
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    worker.abort();
    drop(guard);
    Ok(())
}
