use crossterm::cursor::Show;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

/// Restores the terminal on drop or on panic, whichever comes first.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Cleanup>>>,
}

impl TerminalGuard {
    fn new(cleanup: Cleanup) -> Self {
        Self {
            cleanup: Arc::new(Mutex::new(Some(cleanup))),
        }
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_cleanup(&cleanup);
            default_hook(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_cleanup(&self.cleanup);
    }
}

fn run_cleanup(slot: &Mutex<Option<Cleanup>>) {
    if let Ok(mut slot) = slot.lock() {
        if let Some(cleanup) = slot.take() {
            cleanup();
        }
    }
}

/// Enter raw mode and the alternate screen with bracketed paste enabled.
pub fn setup_terminal() -> io::Result<(Tui, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableBracketedPaste)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let guard = TerminalGuard::new(Box::new(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(DisableBracketedPaste);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    }));
    guard.install_panic_hook();

    Ok((terminal, guard))
}
