use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, colors};
use crate::structs::Bookmark;
use crate::utils::{CARD_MAX_WORDS, truncate_chars, truncate_words};

pub fn draw_main_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.view.bookmarks.is_empty() {
        draw_empty_state(frame, app, area);
        return;
    }

    let items: Vec<ListItem> = app
        .view
        .bookmarks
        .iter()
        .map(|bookmark| bookmark_card(bookmark, app.view.is_deleting(bookmark.id)))
        .collect();

    let title = if app.view.is_filtered() {
        format!(
            "Search: \"{}\" ({} of {})",
            app.view.search,
            app.view.bookmarks.len(),
            app.view.total
        )
    } else {
        format!("Bookmarks ({})", app.view.total)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title)
                .title_style(
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// One card: title, optional description, URL, separator
fn bookmark_card(bookmark: &Bookmark, deleting: bool) -> ListItem<'static> {
    let mut title_spans = vec![Span::styled(
        truncate_words(bookmark.display_title(), CARD_MAX_WORDS),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    if deleting {
        title_spans.push(Span::styled(
            "  Deleting...",
            Style::default().fg(colors::ERROR).add_modifier(Modifier::ITALIC),
        ));
    }

    let mut lines = vec![Line::from(title_spans)];
    if !bookmark.description.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate_words(&bookmark.description, CARD_MAX_WORDS),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(Span::styled(
        truncate_chars(&bookmark.url, URL_TRUNCATE_LENGTH),
        Style::default().fg(colors::LINK),
    )));
    lines.push(Line::from(""));

    let item = ListItem::new(lines);
    if deleting {
        item.style(Style::default().fg(colors::MUTED))
    } else {
        item
    }
}

fn draw_empty_state(frame: &mut Frame, app: &App, area: Rect) {
    let key_style = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(colors::MUTED);

    let text = if app.view.loading {
        vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled("Loading bookmarks...", key_style(Color::Gray))),
        ]
    } else if app.view.is_filtered() {
        vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "No bookmarks match your search",
                key_style(Color::Gray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Search query: ", muted),
                Span::styled(app.view.search.clone(), key_style(colors::PRIMARY)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", muted),
                Span::styled("[Esc]", key_style(colors::WARNING)),
                Span::styled(" to clear search", muted),
            ]),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled("No bookmarks yet", key_style(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", muted),
                Span::styled("[a]", key_style(colors::SUCCESS)),
                Span::styled(" to save your first link", muted),
            ]),
        ]
    };

    let empty = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::MUTED))
                .title("Bookmarks")
                .title_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(empty, area);
}
