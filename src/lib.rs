//! Bookmarker - a terminal bookmark manager
//!
//! Keeps a local view of a remote bookmark collection in sync: every
//! mutation is sent to the server and followed by a full refresh, and the
//! search view is derived from the collection on every read.
//!
//! # Features
//! - **cli**: One-shot commands (default)
//! - **tui**: Terminal user interface (default)
//!
//! # Architecture
//! - `controller`: `BookmarkListController`, the single owner of the collection
//! - `client`: `BookmarkApi` trait and the HTTP implementation
//! - `capabilities`: notifier / clipboard / link opener seams
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Startup and execution modes
//! - `system`: Logging and panic handling

pub mod capabilities;
pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod structs;
pub mod system;
pub mod utils;
