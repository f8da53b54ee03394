use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::capabilities::NotificationLevel;
use crate::interfaces::tui::app::{App, CurrentScreen};

/// Draw title bar with version, counts and busy indicators
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("Bookmarker", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Total: {} ", app.view.total),
            Style::default().fg(Color::Yellow),
        ),
    ];

    if app.view.saving {
        spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            "Saving... ",
            Style::default().fg(Color::Green).bold(),
        ));
    }
    if !app.view.deleting.is_empty() {
        spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("Deleting {}... ", app.view.deleting.len()),
            Style::default().fg(Color::Red).bold(),
        ));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Status line text and style.
///
/// A fresh notification wins; otherwise the persisted error stays visible
/// until dismissed.
pub fn status_line(app: &App) -> (String, Style) {
    if let Some(notification) = app.current_notification() {
        return match notification.level {
            NotificationLevel::Error => (
                format!("[ERROR] {}", notification.message),
                Style::default().fg(Color::White).bg(Color::Red).bold(),
            ),
            NotificationLevel::Success => (
                format!("[SUCCESS] {}", notification.message),
                Style::default().fg(Color::Black).bg(Color::Green).bold(),
            ),
        };
    }

    if let Some(error) = &app.view.last_error {
        (
            format!("[ERROR] {} (Esc to dismiss)", error),
            Style::default().fg(Color::Red).bold(),
        )
    } else if app.view.loading {
        (
            "Loading bookmarks...".to_string(),
            Style::default().fg(Color::Yellow),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    }
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = status_line(app);

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = if app.inline_search_mode && app.current_screen == CurrentScreen::Main {
        vec![
            ("Enter", "Keep filter", Color::Green),
            ("Esc", "Clear", Color::Red),
        ]
    } else {
        match app.current_screen {
            CurrentScreen::Main => vec![
                ("Up/Down", "Navigate", Color::Cyan),
                ("/", "Search", Color::Cyan),
                ("a", "Add", Color::Green),
                ("y", "Copy", Color::Yellow),
                ("o", "Open", Color::Yellow),
                ("d", "Delete", Color::Red),
                ("r", "Refresh", Color::Blue),
                ("?", "Help", Color::Blue),
                ("q", "Quit", Color::Magenta),
            ],
            CurrentScreen::AddBookmark => vec![
                ("Enter", "Save", Color::Green),
                ("Esc", "Cancel", Color::Red),
            ],
            CurrentScreen::DeleteConfirm | CurrentScreen::Exiting => {
                vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)]
            }
            CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
        }
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
