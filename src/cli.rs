//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for bookmarker using clap's derive macros.

use clap::{Parser, Subcommand};

/// Bookmarker - keep your links in one place
#[derive(Parser, Debug)]
#[command(name = "bookmarker")]
#[command(version)]
#[command(about = "A terminal bookmark manager backed by a remote bookmark API", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Log at debug level (CLI mode logs warnings only by default)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start TUI mode (default when no command is given)
    #[cfg(feature = "tui")]
    Tui,

    /// List bookmarks
    List {
        /// Only show bookmarks whose title or description contains TEXT
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save a new bookmark
    Add {
        /// URL to save
        url: String,
    },

    /// Delete a bookmark
    Remove {
        /// Bookmark id
        id: i64,
    },

    /// Copy a bookmark's URL to the clipboard
    Copy {
        /// Bookmark id
        id: i64,
    },

    /// Open a bookmark in the default browser
    Open {
        /// Bookmark id
        id: i64,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
