//! Terminal setup and restore
//!
//! Restore is best-effort: every step runs even when an earlier one fails,
//! so a broken raw-mode reset never leaves the alternate screen up.

use std::io::{self, Stdout};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreStep {
    DisableRawMode,
    LeaveAlternateScreen,
    ShowCursor,
}

const RESTORE_STEPS: [RestoreStep; 3] = [
    RestoreStep::DisableRawMode,
    RestoreStep::LeaveAlternateScreen,
    RestoreStep::ShowCursor,
];

/// Raw mode plus alternate screen. Undoes whatever succeeded on failure.
pub fn enter() -> io::Result<Tui> {
    enable_raw_mode()?;
    let setup = execute!(io::stdout(), EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
    if setup.is_err() {
        restore();
    }
    setup
}

/// Put the terminal back the way the shell expects it
pub fn restore() {
    let failures = run_restore_steps(|step| match step {
        RestoreStep::DisableRawMode => disable_raw_mode(),
        RestoreStep::LeaveAlternateScreen => execute!(io::stdout(), LeaveAlternateScreen),
        RestoreStep::ShowCursor => execute!(io::stdout(), Show),
    });
    for (step, error) in failures {
        tracing::warn!(?step, %error, "terminal restore step failed");
    }
}

fn run_restore_steps<F>(mut run: F) -> Vec<(RestoreStep, io::Error)>
where
    F: FnMut(RestoreStep) -> io::Result<()>,
{
    RESTORE_STEPS
        .into_iter()
        .filter_map(|step| run(step).err().map(|error| (step, error)))
        .collect()
}
