//! CLI command implementations

mod bookmarks;
mod config_gen;

pub use bookmarks::{add_bookmark, copy_bookmark, list_bookmarks, open_bookmark, remove_bookmark};
pub use config_gen::{config_generate, write_sample_config};
