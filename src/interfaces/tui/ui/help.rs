use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "NAVIGATION",
        &[
            ("Up/Down, j/k", "Navigate list"),
            ("Home, g", "Jump to top"),
            ("End, G", "Jump to bottom"),
            ("PageUp/PageDown", "Scroll 10 items"),
        ],
    ),
    (
        "ACTIONS",
        &[
            ("a", "Save a new bookmark"),
            ("y", "Copy link to clipboard"),
            ("o, Enter", "Open link in browser"),
            ("d", "Delete bookmark"),
            ("r", "Refresh from server"),
        ],
    ),
    (
        "SEARCH",
        &[
            ("/", "Filter by title or description"),
            ("Esc", "Clear search / dismiss error"),
        ],
    ),
    ("OTHER", &[("?", "Toggle this help"), ("q", "Quit")]),
];

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let mut help_text = vec![Line::from("")];
    for (section, keys) in SECTIONS {
        help_text.push(Line::from(Span::styled(
            *section,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, desc) in *keys {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {:<18}", key), Style::default().fg(Color::Cyan)),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
        help_text.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(help_text), inner_area);
}
