//! Search filtering
//!
//! Pure functions of (collection, search text); results are recomputed on
//! every read and never cached.

use crate::structs::Bookmark;

/// Whether `bookmark` matches an already lower-cased needle
fn matches_lowercase(bookmark: &Bookmark, needle: &str) -> bool {
    bookmark.title.to_lowercase().contains(needle)
        || bookmark.description.to_lowercase().contains(needle)
}

/// Case-insensitive substring match against title or description.
/// An empty `text` matches everything.
pub fn matches(bookmark: &Bookmark, text: &str) -> bool {
    text.is_empty() || matches_lowercase(bookmark, &text.to_lowercase())
}

/// Bookmarks matching `text`, in collection order
pub fn filter_bookmarks<'a>(bookmarks: &'a [Bookmark], text: &str) -> Vec<&'a Bookmark> {
    if text.is_empty() {
        return bookmarks.iter().collect();
    }
    let needle = text.to_lowercase();
    bookmarks
        .iter()
        .filter(|b| matches_lowercase(b, &needle))
        .collect()
}
