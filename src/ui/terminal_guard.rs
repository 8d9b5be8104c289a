use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

/// Restores the terminal exactly once: on drop, or earlier from the panic
/// hook if the UI loop unwinds.
pub struct TerminalGuard {
    restored: Arc<Mutex<bool>>,
}

impl TerminalGuard {
    fn install() -> Self {
        let restored = Arc::new(Mutex::new(false));

        let hook_flag = Arc::clone(&restored);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let mut done = hook_flag.lock().unwrap_or_else(|e| e.into_inner());
            if !*done {
                *done = true;
                restore_terminal();
            }
            default_hook(info);
        }));

        Self { restored }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut done = self.restored.lock().unwrap_or_else(|e| e.into_inner());
        if !*done {
            *done = true;
            restore_terminal();
        }
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok((terminal, TerminalGuard::install()))
}
