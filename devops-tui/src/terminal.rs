//! Terminal setup and teardown for the DevOps Center TUI.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used throughout the TUI.
pub type DevopsTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal into raw mode on the alternate screen with the cursor
/// hidden.
///
/// Raw mode is switched back off if entering the alternate screen fails, so
/// an error here never leaves the shell unusable. Pass the returned terminal
/// to [`restore_terminal`] on exit.
pub fn setup_terminal() -> io::Result<DevopsTerminal> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        return Err(err);
    }

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

/// Leaves the alternate screen, shows the cursor and disables raw mode.
pub fn restore_terminal(terminal: &mut DevopsTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before the panic
/// message is printed.
///
/// The panic is also logged, since while the dashboard runs the log goes to
/// a file rather than the screen. Call once at startup before entering the
/// TUI.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "dashboard panicked");

        // Best-effort terminal restoration - ignore errors
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);

        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    // A real TTY is needed to drive these; the e2e tests cover the binary.
    #[test]
    fn setup_and_restore_share_the_terminal_type() {
        fn _round_trip() -> io::Result<()> {
            let mut terminal: DevopsTerminal = setup_terminal()?;
            restore_terminal(&mut terminal)
        }
    }

    #[test]
    fn install_panic_hook_function_exists() {
        // Not called: it replaces the process-wide panic hook.
        fn _check_install() {
            install_panic_hook()
        }
    }
}
