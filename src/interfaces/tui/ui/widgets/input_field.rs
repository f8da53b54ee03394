//! 通用输入框组件
//!
//! 支持激活状态高亮、错误提示与字符计数

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// ```rust,ignore
/// InputField::new("URL", &app.view.url_input)
///     .active(true)
///     .error(app.view.last_error.as_deref())
///     .placeholder("https://...")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    error: Option<&'a str>,
    placeholder: Option<&'a str>,
    readonly: bool,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            error: None,
            placeholder: None,
            readonly: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 提交中禁止编辑时使用
    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// 计算所需的高度（输入框 + 错误行）
    pub fn height(&self) -> u16 {
        if self.error.is_some() { 4 } else { 3 }
    }

    fn display_title(&self) -> String {
        let mut title = if self.value.is_empty() {
            match self.placeholder {
                Some(placeholder) => format!("{} ({})", self.title, placeholder),
                None => self.title.to_string(),
            }
        } else {
            format!("{} ({} chars)", self.title, self.value.chars().count())
        };

        if self.readonly {
            title.push_str(" [saving]");
        }
        title
    }

    fn border_style(&self) -> Style {
        if self.readonly {
            Style::default().fg(colors::MUTED)
        } else if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    /// `area` 高度应为 3（无错误）或 4（有错误）
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let input = Paragraph::new(self.value).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, chunks[0]);

        if let Some(error) = self.error {
            let error_text = Paragraph::new(error).style(Style::default().fg(colors::ERROR));
            frame.render_widget(error_text, chunks[1]);
        }
    }
}
