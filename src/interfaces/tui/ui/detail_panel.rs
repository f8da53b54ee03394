//! Detail panel for the selected bookmark

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::interfaces::tui::app::App;

pub fn draw_detail_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title("Details")
        .title_style(Style::default().fg(Color::Cyan).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(bookmark) = app.get_selected_bookmark() else {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No bookmark selected",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    };

    let label = Style::default().fg(Color::DarkGray);
    let (status_text, status_color) = if app.view.is_deleting(bookmark.id) {
        ("Deleting...", Color::Red)
    } else {
        ("Saved", Color::Green)
    };

    let mut details = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Id:        ", label),
            Span::styled(
                bookmark.id.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Title:", label)),
        Line::from(Span::styled(
            bookmark.display_title(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("URL:", label)),
        Line::from(Span::styled(&bookmark.url, Style::default().fg(Color::Blue))),
    ];

    if !bookmark.description.is_empty() {
        details.push(Line::from(""));
        details.push(Line::from(Span::styled("Description:", label)));
        details.push(Line::from(Span::styled(
            &bookmark.description,
            Style::default().fg(Color::Gray),
        )));
    }

    if let Some(image_url) = &bookmark.image_url {
        details.push(Line::from(""));
        details.push(Line::from(vec![
            Span::styled("Image:     ", label),
            Span::styled(image_url, Style::default().fg(Color::Blue)),
        ]));
    }

    details.push(Line::from(""));
    details.push(Line::from(vec![
        Span::styled("Status:    ", label),
        Span::styled(
            status_text,
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let paragraph = Paragraph::new(details)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
