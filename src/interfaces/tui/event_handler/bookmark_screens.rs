//! Event handlers for bookmark screens
//!
//! Handles: Main, AddBookmark, DeleteConfirm, inline search

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle main screen input
pub fn handle_main_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Esc => {
            // Clear search if active, then dismiss the persisted error
            if !app.controller.search_text().is_empty() {
                app.clear_search();
            } else {
                app.controller.dismiss_error();
            }
        }
        KeyCode::Char('/') => {
            app.inline_search_mode = true;
        }
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.current_screen = CurrentScreen::AddBookmark;
        }
        KeyCode::Char('d') | KeyCode::Char('D') => app.request_delete(),
        KeyCode::Char('y') | KeyCode::Char('Y') => app.copy_selected(),
        KeyCode::Enter | KeyCode::Char('o') | KeyCode::Char('O') => app.open_selected(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.spawn_refresh(),
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
    false
}

/// Handle add bookmark screen input
pub fn handle_add_bookmark_screen(app: &mut App, key_code: KeyCode) -> bool {
    // 保存进行中时表单只读
    if app.controller.is_saving() {
        if key_code == KeyCode::Esc {
            app.current_screen = CurrentScreen::Main;
        }
        return false;
    }

    match key_code {
        KeyCode::Enter => app.submit_new_bookmark(),
        KeyCode::Backspace => app.pop_url_char(),
        KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        KeyCode::Char(c) => app.push_url_char(c),
        _ => {}
    }
    false
}

/// Handle delete confirmation screen input
pub fn handle_delete_confirm_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
    false
}

/// Handle inline search mode input
pub fn handle_inline_search(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => {
            app.inline_search_mode = false;
            // Keep the search results visible
        }
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Char(c) => app.push_search_char(c),
        _ => {}
    }
    false
}
