//! Terminal setup and teardown.
//!
//! Low-level functions for entering and leaving TUI mode, plus a panic hook
//! that restores the terminal so a crash never leaves the user's shell in
//! raw mode with a hidden cursor.

use std::io::{self, Write};
use std::panic;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

/// Enters TUI mode: raw input, alternate screen, hidden cursor.
///
/// # Errors
///
/// Returns an error if any terminal command fails.
pub fn enter_tui_mode() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))
}

/// Leaves TUI mode and restores the terminal to its normal state.
///
/// Safe to call multiple times; errors are ignored because this runs on
/// every exit path including panics.
pub fn leave_tui_mode() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen, Show);
    let _ = stdout.flush();
}

/// Installs a panic hook that restores the terminal before the panic
/// message prints.
///
/// Call early in `main`, before entering TUI mode. The original hook still
/// runs afterwards so the panic message reaches the (restored) terminal.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        leave_tui_mode();
        original_hook(panic_info);
    }));
}
