//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - bookmark_screens: Main, AddBookmark, DeleteConfirm, inline search
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

mod bookmark_screens;
mod misc_screens;

use bookmark_screens::*;
use misc_screens::*;

/// Handle keyboard input based on current screen
///
/// Returns `true` when the application should exit.
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> bool {
    // Handle inline search mode first
    if app.inline_search_mode && app.current_screen == CurrentScreen::Main {
        return handle_inline_search(app, key_code);
    }

    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key_code),
        CurrentScreen::AddBookmark => handle_add_bookmark_screen(app, key_code),
        CurrentScreen::DeleteConfirm => handle_delete_confirm_screen(app, key_code),
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key_code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::tui::app::state_tests::{
        StalledCreateApi, bookmark, test_app, test_app_with_api,
    };
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    #[test]
    fn test_quit_requires_confirmation() {
        let mut app = test_app(Vec::new());
        assert!(!handle_key_event(&mut app, KeyCode::Char('q')));
        assert_eq!(app.current_screen, CurrentScreen::Exiting);
        assert!(!handle_key_event(&mut app, KeyCode::Char('n')));
        assert_eq!(app.current_screen, CurrentScreen::Main);
        handle_key_event(&mut app, KeyCode::Char('q'));
        assert!(handle_key_event(&mut app, KeyCode::Char('y')));
    }

    #[test]
    fn test_inline_search_filters_through_controller() {
        let mut app = test_app(vec![bookmark(1, "Rust book")]);
        handle_key_event(&mut app, KeyCode::Char('/'));
        assert!(app.inline_search_mode);
        for c in "rust".chars() {
            handle_key_event(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.controller.search_text(), "rust");

        // Enter keeps the filter, Esc on the list clears it
        handle_key_event(&mut app, KeyCode::Enter);
        assert!(!app.inline_search_mode);
        assert_eq!(app.controller.search_text(), "rust");
        handle_key_event(&mut app, KeyCode::Esc);
        assert_eq!(app.controller.search_text(), "");
    }

    #[test]
    fn test_add_screen_typing_and_cancel() {
        let mut app = test_app(Vec::new());
        handle_key_event(&mut app, KeyCode::Char('a'));
        assert_eq!(app.current_screen, CurrentScreen::AddBookmark);
        for c in "http://x".chars() {
            handle_key_event(&mut app, KeyCode::Char(c));
        }
        handle_key_event(&mut app, KeyCode::Backspace);
        assert_eq!(app.controller.url_input(), "http://");

        handle_key_event(&mut app, KeyCode::Esc);
        assert_eq!(app.current_screen, CurrentScreen::Main);
        // 取消不清空输入，再次打开时保留
        assert_eq!(app.controller.url_input(), "http://");
    }

    #[tokio::test]
    async fn test_add_form_is_locked_while_saving() {
        let api = Arc::new(StalledCreateApi::default());
        let mut app = test_app_with_api(api.clone(), Vec::new());

        handle_key_event(&mut app, KeyCode::Char('a'));
        for c in "http://a.com".chars() {
            handle_key_event(&mut app, KeyCode::Char(c));
        }
        handle_key_event(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen, CurrentScreen::Main);
        assert!(app.controller.is_saving());

        // 重新打开表单：输入与再次提交都被忽略
        handle_key_event(&mut app, KeyCode::Char('a'));
        assert_eq!(app.current_screen, CurrentScreen::AddBookmark);
        handle_key_event(&mut app, KeyCode::Char('x'));
        handle_key_event(&mut app, KeyCode::Backspace);
        handle_key_event(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.url_input(), "http://a.com");
        assert_eq!(app.current_screen, CurrentScreen::AddBookmark);

        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert_eq!(api.creates.load(Ordering::SeqCst), 1);

        handle_key_event(&mut app, KeyCode::Esc);
        assert_eq!(app.current_screen, CurrentScreen::Main);
    }

    #[test]
    fn test_empty_submit_stays_on_form() {
        let mut app = test_app(Vec::new());
        handle_key_event(&mut app, KeyCode::Char('a'));
        handle_key_event(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen, CurrentScreen::AddBookmark);
        assert_eq!(
            app.controller.last_error().as_deref(),
            Some(crate::controller::messages::INVALID_URL)
        );
    }

    #[test]
    fn test_help_screen_closes() {
        let mut app = test_app(Vec::new());
        handle_key_event(&mut app, KeyCode::Char('?'));
        assert_eq!(app.current_screen, CurrentScreen::Help);
        handle_key_event(&mut app, KeyCode::Esc);
        assert_eq!(app.current_screen, CurrentScreen::Main);
    }

    #[test]
    fn test_delete_key_opens_confirmation() {
        let mut app = test_app(vec![bookmark(4, "four")]);
        handle_key_event(&mut app, KeyCode::Char('d'));
        assert_eq!(app.current_screen, CurrentScreen::DeleteConfirm);
        handle_key_event(&mut app, KeyCode::Esc);
        assert_eq!(app.current_screen, CurrentScreen::Main);
        assert!(app.pending_delete.is_none());
    }
}
