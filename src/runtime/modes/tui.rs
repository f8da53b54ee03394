//! TUI mode
//!
//! Logging goes to a file here; anything written to the terminal would
//! corrupt the interface.

use crate::config::get_config;
use crate::runtime::lifetime;
use crate::system::logging::{init_logging, tui_logging_config};
use crate::system::panic_handler::{RunMode, install_panic_hook};

/// Run TUI mode
///
/// This function:
/// 1. Initializes file logging
/// 2. Installs the terminal-restoring panic hook
/// 3. Performs pre-startup processing
/// 4. Delegates to the actual TUI implementation
pub async fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    let logging = tui_logging_config(&get_config().logging);
    let _guard = init_logging(&logging)?;
    install_panic_hook(RunMode::Tui);

    let ctx = lifetime::startup::prepare_startup()?;
    crate::interfaces::tui::run_tui(ctx).await
}
