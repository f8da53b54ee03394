//! 通用弹窗容器
//!
//! 提供居中弹窗的辅助功能

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear},
};

use crate::interfaces::tui::constants::PopupSize;

/// 弹窗容器
pub struct Popup<'a> {
    title: &'a str,
    color: Color,
    size: PopupSize,
    margin: Margin,
}

impl<'a> Popup<'a> {
    pub fn new(title: &'a str, size: PopupSize) -> Self {
        Self {
            title,
            color: Color::Cyan,
            size,
            margin: Margin::new(2, 1),
        }
    }

    /// 设置主题颜色（标题和边框）
    pub fn theme_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// 渲染阴影、清除背景、绘制边框，返回内部可用区域
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let popup_area = centered_rect(self.size.width, self.size.height, area);

        let shadow = Block::default().style(Style::default().bg(Color::Black));
        frame.render_widget(shadow, popup_area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(self.title)
            .title_style(Style::default().fg(self.color).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(self.color));
        frame.render_widget(block, popup_area);

        popup_area.inner(self.margin)
    }
}

/// 根据百分比在给定区域中创建居中的矩形
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
