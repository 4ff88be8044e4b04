//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{App, Modal};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal else {
        return;
    };

    match modal {
        Modal::Notice { message } => render_message(frame, " ℹ ", message, Color::Cyan),
        Modal::Link { url } => render_message(frame, " ↗ ", url, Color::Cyan),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗外框，返回内容区域
fn frame_block(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title.to_string())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 说明文字或需要在浏览器打开的地址
fn render_message(frame: &mut Frame, title: &str, message: &str, color: Color) {
    let area = centered_rect(60, 9, frame.area());
    let inner = frame_block(frame, area, title, color);

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled("Esc / Enter", Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let area = centered_rect(48, 17, frame.area());
    let inner = frame_block(frame, area, " Help ", Color::Cyan);

    let section = |text: &'static str| {
        Line::styled(
            text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        section("Form"),
        entry("Tab", "Next field"),
        entry("Shift+Tab", "Previous field"),
        entry("←→", "Switch option"),
        entry("Enter", "Press button / next field"),
        entry("Ctrl+U", "Clear input"),
        Line::from(""),
        section("Actions"),
        entry("Alt+S", "Activate"),
        entry("Alt+L", "Show/hide dial log"),
        entry("Alt+V", "Show/hide password"),
        entry("Alt+P", "Change password"),
        entry("Alt+R", "Reload language"),
        entry("Esc", "Quit"),
        Line::from(""),
        Line::styled("Press Esc to close the help", Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
