//! App state definition and basic state management

use std::sync::Arc;

use ratatui::widgets::ListState;

use crate::capabilities::{Notification, NotificationLog};
use crate::controller::{BookmarkListController, ListView};
use crate::structs::Bookmark;

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    AddBookmark,
    DeleteConfirm,
    Help,
    Exiting,
}

pub struct App {
    pub controller: BookmarkListController,
    pub notifications: Arc<NotificationLog>,
    pub current_screen: CurrentScreen,

    /// Snapshot taken before every draw
    pub view: ListView,

    // Search
    pub inline_search_mode: bool,

    // Selection
    pub selected_index: usize,
    pub list_state: ListState,

    /// Bookmark awaiting delete confirmation
    pub pending_delete: Option<Bookmark>,
}

impl App {
    pub fn new(controller: BookmarkListController, notifications: Arc<NotificationLog>) -> App {
        let view = controller.view();
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        App {
            controller,
            notifications,
            current_screen: CurrentScreen::Main,
            view,
            inline_search_mode: false,
            selected_index: 0,
            list_state,
            pending_delete: None,
        }
    }

    /// Re-read the controller and keep the selection inside the filtered view
    pub fn sync_view(&mut self) {
        self.view = self.controller.view();
        self.notifications.prune();
        self.clamp_selection();
    }

    /// Bookmark under the cursor in the filtered view
    pub fn get_selected_bookmark(&self) -> Option<&Bookmark> {
        self.view.bookmarks.get(self.selected_index)
    }

    pub fn display_count(&self) -> usize {
        self.view.bookmarks.len()
    }

    /// Notification to show in the status bar, if any is still fresh
    pub fn current_notification(&self) -> Option<Notification> {
        self.notifications.current()
    }

    pub fn clear_search(&mut self) {
        self.controller.set_search("");
        self.inline_search_mode = false;
        self.selected_index = 0;
        self.sync_view();
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut text = self.controller.search_text();
        text.push(c);
        self.controller.set_search(text);
        self.selected_index = 0;
        self.sync_view();
    }

    pub fn pop_search_char(&mut self) {
        let mut text = self.controller.search_text();
        text.pop();
        self.controller.set_search(text);
        self.sync_view();
    }

    pub fn push_url_char(&mut self, c: char) {
        let mut text = self.controller.url_input();
        text.push(c);
        self.controller.set_url_input(text);
        self.sync_view();
    }

    pub fn pop_url_char(&mut self) {
        let mut text = self.controller.url_input();
        text.pop();
        self.controller.set_url_input(text);
        self.sync_view();
    }

    fn clamp_selection(&mut self) {
        let len = self.display_count();
        if len == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            self.selected_index = self.selected_index.min(len - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }
}
