//! System-level modules
//!
//! - Logging initialization
//! - Panic handling (terminal restore for the TUI)

pub mod logging;
pub mod panic_handler;
