use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::ui::summary::Resolution;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// A summarization request settled on the runtime.
    SummaryResolved(Resolution),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the terminal reader thread.
    ///
    /// The thread exits once the handler (and every sender clone) is dropped.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                            Ok(Event::Paste(text)) => Some(AppEvent::Paste(text)),
                            Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                            Ok(_) => None,
                            Err(err) => {
                                tracing::error!(error = %err, "Terminal read failed");
                                break;
                            }
                        };
                        if let Some(app_event) = forwarded {
                            if event_tx.send(app_event).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
