use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::controller::messages;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

pub fn draw_add_bookmark_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Save Bookmark", popup::ADD_BOOKMARK)
        .theme_color(Color::Green)
        .render(frame, area);

    // 只展示与表单相关的错误
    let error = app
        .view
        .last_error
        .as_deref()
        .filter(|e| *e == messages::INVALID_URL || *e == messages::SAVE_FAILED);

    let field = InputField::new("URL", &app.view.url_input)
        .active(!app.view.saving)
        .readonly(app.view.saving)
        .placeholder("https://...")
        .error(error);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Hint
            Constraint::Length(field.height()), // URL + error
            Constraint::Min(1),                 // Footer hint
        ])
        .split(inner_area);

    let hint = Paragraph::new(Line::from(Span::styled(
        "Title, description and image are filled in by the server.",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hint, chunks[0]);

    field.render(frame, chunks[1]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green).bold()),
        Span::styled(" Save  ", Style::default().fg(Color::White)),
        Span::styled("[Esc]", Style::default().fg(Color::Red).bold()),
        Span::styled(" Cancel", Style::default().fg(Color::White)),
    ]))
    .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}
