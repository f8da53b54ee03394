//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - CLI mode (one-shot commands)
//! - TUI mode (Terminal UI)
//!
//! The mode selection is based on the parsed command and feature flags.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli(Commands),
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

/// Detect which mode to run based on the parsed command
///
/// # Mode Detection Logic
/// 1. No command, or `tui`, with the TUI feature enabled -> TUI mode
/// 2. Any other command with the CLI feature enabled -> CLI mode
/// 3. Otherwise -> Unknown (print help)
pub fn detect_mode(command: Option<Commands>) -> Mode {
    match command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => Mode::Tui,
        #[cfg(feature = "cli")]
        Some(cmd) => Mode::Cli(cmd),
        #[allow(unreachable_patterns)]
        _ => Mode::Unknown,
    }
}
