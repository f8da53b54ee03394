//! Inline search bar component

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::App;

/// Draw the inline search bar
pub fn draw_inline_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let search_text = vec![Line::from(vec![
        Span::styled(
            "/",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(&app.view.search, Style::default().fg(Color::White)),
        Span::styled(
            "_",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::RAPID_BLINK),
        ),
    ])];

    let result_count = if app.view.search.is_empty() {
        String::new()
    } else if app.view.bookmarks.is_empty() {
        " (no matches)".to_string()
    } else {
        format!(" ({} matches)", app.view.bookmarks.len())
    };

    let block = Block::default()
        .title(format!("Search title / description{}", result_count))
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(Paragraph::new(search_text).block(block), area);
}
