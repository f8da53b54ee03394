//! Panic handler module
//!
//! In TUI mode the terminal is in raw mode on the alternate screen when a
//! panic happens; restore it first so the message is readable.

use std::panic;

/// Running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Cli,
    Tui,
}

/// Install custom panic hook
pub fn install_panic_hook(mode: RunMode) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if mode == RunMode::Tui {
            restore_terminal();
        }

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());
        tracing::error!("Panic at {}: {}", location, panic_message(panic_info));

        default_hook(panic_info);
    }));
}

fn panic_message(panic_info: &panic::PanicHookInfo<'_>) -> String {
    let payload = panic_info.payload();
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(feature = "tui")]
fn restore_terminal() {
    use ratatui::crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{LeaveAlternateScreen, disable_raw_mode},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
}

#[cfg(not(feature = "tui"))]
fn restore_terminal() {}
