// UI submodules
mod add_bookmark;
mod common;
mod delete_confirm;
mod detail_panel;
mod exiting;
mod help;
mod inline_search;
mod main_screen;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};

pub use add_bookmark::draw_add_bookmark_screen;
pub use delete_confirm::draw_delete_confirm_screen;
pub use detail_panel::draw_detail_panel;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use inline_search::draw_inline_search_bar;
pub use main_screen::draw_main_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    // Calculate layout based on whether inline search is active
    let main_chunks = if app.inline_search_mode {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Main content
                Constraint::Length(3), // Inline search bar
                Constraint::Length(3), // Status
                Constraint::Length(2), // Footer
            ])
            .split(frame.area())
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Main content
                Constraint::Length(3), // Status
                Constraint::Length(2), // Footer
            ])
            .split(frame.area())
    };

    draw_title_bar(frame, app, main_chunks[0]);

    // 列表始终绘制，弹窗叠加在其上
    draw_list_with_details(frame, app, main_chunks[1]);
    match app.current_screen {
        CurrentScreen::Main => {}
        CurrentScreen::AddBookmark => draw_add_bookmark_screen(frame, app, main_chunks[1]),
        CurrentScreen::DeleteConfirm => draw_delete_confirm_screen(frame, app, main_chunks[1]),
        CurrentScreen::Help => draw_help_screen(frame, main_chunks[1]),
        CurrentScreen::Exiting => draw_exiting_screen(frame, app, main_chunks[1]),
    }

    if app.inline_search_mode {
        draw_inline_search_bar(frame, app, main_chunks[2]);
        draw_status_bar(frame, app, main_chunks[3]);
        draw_footer(frame, app, main_chunks[4]);
    } else {
        draw_status_bar(frame, app, main_chunks[2]);
        draw_footer(frame, app, main_chunks[3]);
    }
}

fn draw_list_with_details(frame: &mut Frame, app: &mut App, area: Rect) {
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left: bookmark cards
            Constraint::Percentage(40), // Right: detail panel
        ])
        .split(area);

    draw_main_screen(frame, app, content_chunks[0]);
    draw_detail_panel(frame, app, content_chunks[1]);
}
