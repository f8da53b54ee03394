//! CLI mode
//!
//! Sets up logging and the panic hook, then delegates to the CLI
//! implementation.

use crate::cli::Commands;
use crate::config::{LoggingConfig, get_config};
use crate::interfaces::cli::CliError;
use crate::system::logging::init_logging;
use crate::system::panic_handler::{RunMode, install_panic_hook};

/// Run CLI mode
///
/// This function:
/// 1. Initializes console logging (warnings only unless `verbose`)
/// 2. Installs the panic hook
/// 3. Delegates to the actual CLI implementation
pub async fn run_cli(cmd: Commands, verbose: bool) -> Result<(), CliError> {
    let logging = cli_logging_config(&get_config().logging, verbose);
    // 日志初始化失败不影响命令执行
    let _guard = init_logging(&logging)
        .map_err(|e| eprintln!("{}", e.format_colored()))
        .ok();
    install_panic_hook(RunMode::Cli);

    crate::interfaces::cli::run_cli_command(cmd).await
}

/// CLI output is for the user; the configured level only applies with a
/// log file
fn cli_logging_config(config: &LoggingConfig, verbose: bool) -> LoggingConfig {
    let mut config = config.clone();
    if verbose {
        config.level = "debug".to_string();
    } else if config.file.as_ref().is_none_or(|f| f.is_empty()) {
        config.level = "warn".to_string();
    }
    config
}
