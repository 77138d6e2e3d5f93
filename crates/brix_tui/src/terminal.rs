//! Raw mode and alternate screen handling.

use std::io;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use tracing::{instrument, warn};

/// Holds the terminal in raw mode on the alternate screen.
///
/// Dropping the guard restores the terminal, including when setup fails
/// halfway or the event loop returns an error.
#[derive(Debug)]
pub struct TerminalGuard {
    _entered: (),
}

impl TerminalGuard {
    /// Enables raw mode and switches to the alternate screen.
    #[instrument]
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { _entered: () };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step runs even if an earlier one fails; the first error is
/// returned.
#[instrument]
pub(crate) fn restore() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}
