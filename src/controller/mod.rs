//! Bookmark list controller
//!
//! Keeps the local collection consistent with the remote store.
//!
//! # Sync discipline
//!
//! ```text
//! create / remove ──→ remote call ──ok──→ refresh() ──→ collection replaced
//!                                  └err─→ last_error + notification
//! ```
//!
//! - The collection is written only when a refresh completes; mutations never
//!   patch it locally, they go through [`BookmarkListController::sync_after`].
//! - The filtered view is derived on every read from (collection, search).
//! - Overlapping refreshes: the one that completes last wins.
//! - After [`BookmarkListController::close`], completions are dropped.

mod filter;
mod state;

pub use filter::{filter_bookmarks, matches};
pub use state::{ControllerState, ListView};

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::capabilities::{
    ClipboardSink, LinkOpener, NoopCapabilities, Notification, Notifier,
};
use crate::client::{BookmarkApi, ClientError};
use crate::errors::BookmarkerError;
use crate::structs::{Bookmark, NewBookmark};

/// User-facing messages
pub mod messages {
    pub const FETCH_FAILED: &str = "Error fetching bookmarks";
    pub const INVALID_URL: &str = "Please provide a valid URL";
    pub const SAVED: &str = "Bookmark saved!";
    pub const SAVE_FAILED: &str = "Failed to save bookmark";
    pub const DELETED: &str = "Bookmark deleted!";
    pub const DELETE_FAILED: &str = "Failed to delete bookmark";
    pub const COPIED: &str = "Link copied to clipboard!";
    pub const COPY_FAILED: &str = "Failed to copy link";
    pub const OPEN_FAILED: &str = "Failed to open link";
}

/// Owns the bookmark collection and mediates every mutation.
///
/// Clones share state, so several operations can be in flight at once.
#[derive(Clone)]
pub struct BookmarkListController {
    api: Arc<dyn BookmarkApi>,
    notifier: Arc<dyn Notifier>,
    clipboard: Arc<dyn ClipboardSink>,
    opener: Arc<dyn LinkOpener>,
    state: Arc<Mutex<ControllerState>>,
}

impl BookmarkListController {
    pub fn new(api: Arc<dyn BookmarkApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            clipboard: NoopCapabilities::arc(),
            opener: NoopCapabilities::arc(),
            state: Arc::new(Mutex::new(ControllerState::default())),
        }
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn ClipboardSink>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn with_opener(mut self, opener: Arc<dyn LinkOpener>) -> Self {
        self.opener = opener;
        self
    }

    // ========== reads ==========

    /// Snapshot with the filtered view derived from the current state
    pub fn view(&self) -> ListView {
        self.state.lock().view()
    }

    /// Full collection as of the last successful refresh
    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.state.lock().bookmarks.clone()
    }

    /// Filtered view for the current search text
    pub fn filtered(&self) -> Vec<Bookmark> {
        let state = self.state.lock();
        filter_bookmarks(&state.bookmarks, &state.search)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn find(&self, id: i64) -> Option<Bookmark> {
        self.state
            .lock()
            .bookmarks
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    pub fn search_text(&self) -> String {
        self.state.lock().search.clone()
    }

    pub fn url_input(&self) -> String {
        self.state.lock().url_input.clone()
    }

    pub fn is_saving(&self) -> bool {
        self.state.lock().saving > 0
    }

    pub fn is_deleting(&self, id: i64) -> bool {
        self.state.lock().deleting.contains(&id)
    }

    pub fn last_error(&self) -> Option<String> {
        self.state.lock().last_error.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    // ========== local edits ==========

    /// Update the search text; the filtered view follows on the next read
    pub fn set_search<T: Into<String>>(&self, text: T) {
        self.state.lock().search = text.into();
    }

    pub fn set_url_input<T: Into<String>>(&self, text: T) {
        self.state.lock().url_input = text.into();
    }

    pub fn dismiss_error(&self) {
        self.state.lock().last_error = None;
    }

    /// Teardown: completions that resolve afterwards neither write state
    /// nor notify
    pub fn close(&self) {
        self.state.lock().closed = true;
        debug!("Bookmark controller closed");
    }

    // ========== remote operations ==========

    /// Replace the collection with the server's.
    ///
    /// On failure the previous collection is kept and the error recorded.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        debug!("Refreshing bookmarks via {} API", self.api.name());
        let result = self.api.list().await;

        let mut state = self.state.lock();
        if state.closed {
            debug!("Dropping refresh result after close");
            return result.map(|_| ());
        }
        state.loaded = true;

        match result {
            Ok(bookmarks) => {
                info!("Loaded {} bookmarks", bookmarks.len());
                state.bookmarks = bookmarks;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to fetch bookmarks: {}", e);
                state.last_error = Some(messages::FETCH_FAILED.to_string());
                drop(state);
                self.notifier
                    .notify(Notification::error(messages::FETCH_FAILED));
                Err(e)
            }
        }
    }

    /// Submit `url` for creation; refreshes on success.
    ///
    /// Empty input is rejected without a network call. Concurrent creates
    /// are each submitted and each triggers its own refresh.
    pub async fn create(&self, url: &str) -> Result<(), ClientError> {
        let url = url.trim();
        if url.is_empty() {
            self.record_failure(messages::INVALID_URL);
            return Err(ClientError::Validation(messages::INVALID_URL.to_string()));
        }

        {
            let mut state = self.state.lock();
            state.last_error = None;
            state.saving += 1;
        }
        self.send_create(url.to_string()).await
    }

    /// `create` with the current URL input
    pub async fn submit(&self) -> Result<(), ClientError> {
        let url = self.url_input();
        self.create(&url).await
    }

    /// Start a create from the URL input unless one is already in flight.
    ///
    /// The busy check and the `saving` count change under the same lock, so
    /// two quick submits cannot both pass. Returns `None` when busy or when
    /// the input is empty (recorded like any validation failure); otherwise
    /// the returned future performs the request.
    pub fn start_submit(
        &self,
    ) -> Option<impl Future<Output = Result<(), ClientError>> + Send + 'static> {
        let url = {
            let mut state = self.state.lock();
            if state.saving > 0 {
                debug!("Create already in flight, ignoring submit");
                return None;
            }
            let url = state.url_input.trim().to_string();
            if !url.is_empty() {
                state.last_error = None;
                state.saving += 1;
            }
            url
        };

        if url.is_empty() {
            self.record_failure(messages::INVALID_URL);
            return None;
        }

        let controller = self.clone();
        Some(async move { controller.send_create(url).await })
    }

    /// Delete `id` remotely; refreshes on success.
    ///
    /// The id is not checked against the local collection; the server's
    /// answer decides.
    pub async fn remove(&self, id: i64) -> Result<(), ClientError> {
        self.state.lock().deleting.insert(id);

        self.sync_after(self.api.delete(id), move |state, outcome| {
            state.deleting.remove(&id);
            match outcome {
                Ok(()) => Notification::success(messages::DELETED),
                Err(e) => {
                    warn!("Error deleting bookmark {}: {}", id, e);
                    Notification::error(messages::DELETE_FAILED)
                }
            }
        })
        .await
    }

    /// Copy `url` to the clipboard
    pub fn copy_link(&self, url: &str) -> Result<(), BookmarkerError> {
        match self.clipboard.set_text(url) {
            Ok(()) => {
                self.notifier.notify(Notification::success(messages::COPIED));
                Ok(())
            }
            Err(e) => {
                warn!("Failed to copy text: {}", e);
                self.notifier
                    .notify(Notification::error(messages::COPY_FAILED));
                Err(BookmarkerError::clipboard(e))
            }
        }
    }

    /// Open `url` outside the application
    pub fn open_link(&self, url: &str) -> Result<(), BookmarkerError> {
        self.opener.open(url).map_err(|e| {
            warn!("Failed to open {}: {}", url, e);
            self.notifier
                .notify(Notification::error(messages::OPEN_FAILED));
            BookmarkerError::terminal(e)
        })
    }

    // ========== internals ==========

    /// Send a create whose `saving` slot is already taken
    async fn send_create(&self, url: String) -> Result<(), ClientError> {
        let request = NewBookmark { url: url.clone() };
        let result = self
            .sync_after(self.api.create(request), |state, outcome| {
                state.saving = state.saving.saturating_sub(1);
                match outcome {
                    Ok(()) => Notification::success(messages::SAVED),
                    Err(e) => {
                        warn!("Error saving bookmark: {}", e);
                        Notification::error(messages::SAVE_FAILED)
                    }
                }
            })
            .await;

        if result.is_ok() {
            let mut state = self.state.lock();
            // 只清空仍是本次提交内容的输入
            if !state.closed && state.url_input.trim() == url {
                state.url_input.clear();
            }
        }
        result
    }

    /// Run a remote mutation, settle the busy flags, and resync on success.
    ///
    /// `settle` runs under the state lock and returns the notification to
    /// emit; an error notification is also stored as `last_error`. The
    /// collection is only touched by the follow-up refresh.
    async fn sync_after<Fut, S>(&self, operation: Fut, settle: S) -> Result<(), ClientError>
    where
        Fut: Future<Output = Result<(), ClientError>>,
        S: FnOnce(&mut ControllerState, &Result<(), ClientError>) -> Notification,
    {
        let outcome = operation.await;

        let notification = {
            let mut state = self.state.lock();
            if state.closed {
                debug!("Dropping operation result after close");
                return outcome;
            }
            let notification = settle(&mut state, &outcome);
            if notification.is_error() {
                state.last_error = Some(notification.message.clone());
            }
            notification
        };
        self.notifier.notify(notification);

        if outcome.is_ok() {
            // 刷新失败由 refresh 自行记录，不影响本次操作结果
            let _ = self.refresh().await;
        }
        outcome
    }

    fn record_failure(&self, message: &str) {
        self.state.lock().last_error = Some(message.to_string());
        self.notifier.notify(Notification::error(message));
    }
}
