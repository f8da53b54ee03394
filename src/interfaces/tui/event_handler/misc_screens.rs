//! Event handlers for Help and Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

pub fn handle_help_screen(app: &mut App, key_code: KeyCode) -> bool {
    if matches!(
        key_code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('?')
    ) {
        app.current_screen = CurrentScreen::Main;
    }
    false
}

pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => return true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
    false
}
