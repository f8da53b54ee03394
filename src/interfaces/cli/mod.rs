//! CLI interface module
//!
//! One-shot commands against the bookmark API. Every command goes through
//! [`BookmarkListController`], so the CLI and the TUI share the same sync
//! and notification behaviour.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::capabilities::{ConsoleNotifier, SystemBrowser, SystemClipboard};
use crate::cli::{Commands, ConfigCommands};
use crate::client::ClientError;
use crate::controller::BookmarkListController;
use crate::errors::BookmarkerError;
use crate::runtime::lifetime::startup::StartupContext;
use commands::{
    add_bookmark, config_generate, copy_bookmark, list_bookmarks, open_bookmark, remove_bookmark,
};

#[derive(Debug)]
pub enum CliError {
    ApiError(String),
    ConfigError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ApiError(msg) => format!("API error: {}", msg),
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ApiError(msg) => format!("{} {}", "API error:".red().bold(), msg.white()),
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Validation(msg) => CliError::CommandError(msg),
            other => CliError::ApiError(other.to_string()),
        }
    }
}

impl From<BookmarkerError> for CliError {
    fn from(err: BookmarkerError) -> Self {
        match err {
            BookmarkerError::Config(msg) | BookmarkerError::FileOperation(msg) => {
                CliError::ConfigError(msg)
            }
            BookmarkerError::Network(_)
            | BookmarkerError::Server(_)
            | BookmarkerError::Unauthorized(_)
            | BookmarkerError::Serialization(_) => CliError::ApiError(err.to_string()),
            other => CliError::CommandError(other.message().to_string()),
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::ConfigError(format!("{:#}", err))
    }
}

/// Controller for one CLI invocation: console notifications plus the
/// system clipboard and browser
pub fn cli_controller(ctx: &StartupContext) -> BookmarkListController {
    ctx.controller(Arc::new(ConsoleNotifier))
        .with_clipboard(Arc::new(SystemClipboard))
        .with_opener(Arc::new(SystemBrowser))
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    // config generate 不需要 API 客户端
    if let Commands::Config { action } = cmd {
        let ConfigCommands::Generate { output_path, force } = action;
        return config_generate(output_path, force);
    }

    let ctx = crate::runtime::lifetime::startup::prepare_startup()?;
    let controller = cli_controller(&ctx);

    let result = run_with_controller(&controller, cmd).await;
    controller.close();
    result
}

/// Dispatch a bookmark command to `controller`
pub async fn run_with_controller(
    controller: &BookmarkListController,
    cmd: Commands,
) -> Result<(), CliError> {
    match cmd {
        Commands::List { search, json } => list_bookmarks(controller, search, json).await,
        Commands::Add { url } => add_bookmark(controller, &url).await,
        Commands::Remove { id } => remove_bookmark(controller, id).await,
        Commands::Copy { id } => copy_bookmark(controller, id).await,
        Commands::Open { id } => open_bookmark(controller, id).await,
        Commands::Config { .. } => Err(CliError::CommandError(
            "config commands do not talk to the API".to_string(),
        )),
        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "the TUI is started without a subcommand".to_string(),
        )),
    }
}
