//! Terminal setup and teardown.
//!
//! The UI runs on the alternate screen with raw mode and mouse capture, so
//! clicks reach the graph and list panels.

use std::io::{self, Stdout};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        cursor::Show,
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switch the terminal into UI mode.
///
/// A panic hook is installed that restores the terminal before the panic
/// message is printed.
///
/// # Errors
/// Returns an error if raw mode or the alternate screen cannot be entered.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    if let Err(err) = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(err);
    }

    set_panic_hook();

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        hook(panic_info);
    }));
}

/// Leave UI mode and give the terminal back to the shell.
///
/// # Errors
/// Returns an error if the terminal state cannot be restored.
pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show)?;
    disable_raw_mode()
}
