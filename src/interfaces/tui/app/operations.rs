//! Bookmark operations started from the TUI
//!
//! Remote operations run as background tasks on a controller clone so the
//! event loop keeps drawing; their outcome reaches the screen through the
//! controller state and the notification log.

use tracing::debug;

use super::state::{App, CurrentScreen};

impl App {
    pub fn spawn_refresh(&self) {
        let controller = self.controller.clone();
        tokio::spawn(async move {
            let _ = controller.refresh().await;
        });
    }

    /// Submit the URL input and return to the list
    ///
    /// Stays on the form when the input is empty or a save is still running.
    pub fn submit_new_bookmark(&mut self) {
        match self.controller.start_submit() {
            Some(task) => {
                tokio::spawn(async move {
                    let _ = task.await;
                });
                self.current_screen = CurrentScreen::Main;
            }
            None => debug!("Bookmark not submitted"),
        }
    }

    /// Ask for confirmation before deleting the selected bookmark
    pub fn request_delete(&mut self) {
        if let Some(bookmark) = self.get_selected_bookmark().cloned() {
            if self.view.is_deleting(bookmark.id) {
                debug!("Bookmark {} is already being deleted", bookmark.id);
                return;
            }
            self.pending_delete = Some(bookmark);
            self.current_screen = CurrentScreen::DeleteConfirm;
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(bookmark) = self.pending_delete.take() {
            let controller = self.controller.clone();
            tokio::spawn(async move {
                let _ = controller.remove(bookmark.id).await;
            });
        }
        self.current_screen = CurrentScreen::Main;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.current_screen = CurrentScreen::Main;
    }

    pub fn copy_selected(&self) {
        if let Some(bookmark) = self.get_selected_bookmark() {
            // 失败已通过通知展示
            let _ = self.controller.copy_link(&bookmark.url);
        }
    }

    pub fn open_selected(&self) {
        if let Some(bookmark) = self.get_selected_bookmark() {
            let _ = self.controller.open_link(&bookmark.url);
        }
    }
}
