use std::collections::BTreeSet;

use super::filter::filter_bookmarks;
use crate::structs::Bookmark;

/// Everything the controller owns.
///
/// `bookmarks` is written only by refresh completion; other handlers
/// touch the busy flags, inputs and `last_error`.
#[derive(Debug, Clone, Default)]
pub struct ControllerState {
    /// Last successfully fetched collection, server order
    pub bookmarks: Vec<Bookmark>,
    pub search: String,
    pub url_input: String,
    /// Creates currently in flight
    pub saving: usize,
    /// Ids with a delete in flight
    pub deleting: BTreeSet<i64>,
    pub last_error: Option<String>,
    /// Set once the first refresh has resolved (success or failure)
    pub loaded: bool,
    /// Set on teardown; late completions become no-ops
    pub closed: bool,
}

impl ControllerState {
    pub fn view(&self) -> ListView {
        ListView {
            bookmarks: filter_bookmarks(&self.bookmarks, &self.search)
                .into_iter()
                .cloned()
                .collect(),
            total: self.bookmarks.len(),
            search: self.search.clone(),
            url_input: self.url_input.clone(),
            saving: self.saving > 0,
            deleting: self.deleting.clone(),
            last_error: self.last_error.clone(),
            loading: !self.loaded,
        }
    }
}

/// Read-only snapshot handed to renderers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    /// Filtered view of the collection
    pub bookmarks: Vec<Bookmark>,
    /// Size of the unfiltered collection
    pub total: usize,
    pub search: String,
    pub url_input: String,
    pub saving: bool,
    pub deleting: BTreeSet<i64>,
    pub last_error: Option<String>,
    pub loading: bool,
}

impl ListView {
    pub fn is_deleting(&self, id: i64) -> bool {
        self.deleting.contains(&id)
    }

    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty()
    }
}
