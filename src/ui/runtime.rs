use crate::client::SummaryService;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::editor::InputBuffer;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::summary::{Resolution, ResolutionSink, SubmissionController};
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Run the terminal UI until the user quits.
///
/// Network calls run on `runtime`; their results come back through the event
/// channel so state is only ever touched on this thread.
pub fn run(
    config: &Config,
    service: Arc<dyn SummaryService>,
    endpoint: String,
    initial_text: String,
    runtime: Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);

    let resolved_tx = events.sender();
    let sink: ResolutionSink = Arc::new(move |resolution: Resolution| {
        let _ = resolved_tx.send(AppEvent::SummaryResolved(resolution));
    });
    let controller = SubmissionController::new(service, runtime, sink);
    let mut app = App::new(InputBuffer::with_text(initial_text), controller, endpoint);

    tracing::info!("Terminal UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::SummaryResolved(resolution)) => app.on_summary_resolved(resolution),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("Terminal UI stopped");
    drop(guard);
    Ok(())
}
