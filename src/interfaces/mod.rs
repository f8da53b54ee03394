//! User interfaces: one-shot CLI commands and the interactive TUI.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;
