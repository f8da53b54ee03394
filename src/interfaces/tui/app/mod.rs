//! TUI application state and operations

mod navigation;
mod operations;
mod state;

pub use state::{App, CurrentScreen};

#[cfg(test)]
pub(crate) use state::tests as state_tests;
