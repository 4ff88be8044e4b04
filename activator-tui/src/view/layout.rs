//! 主布局渲染

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::{element, App};

use super::components;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    if app.is_ready() {
        render_content(app, frame, main_layout[1]);
    } else {
        render_loading(app, frame, main_layout[1]);
    }

    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = app.document.text(element::TITLE).unwrap_or("PPPoE Activator");
    let bar = Paragraph::new(format!(" {title}"))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(bar, area);
}

/// 首个翻译表就绪前的加载页
fn render_loading(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let (text, color) = if app.load_failed {
        (
            "翻译加载失败 / Failed to load translations  (Alt+R 重试 / retry, Esc 退出 / quit)",
            c.error,
        )
    } else {
        ("加载中... / Loading...", c.muted)
    };

    let block = Block::default().borders(Borders::ALL).border_style(Styles::border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top = inner.y + inner.height.saturating_sub(3) / 2;
    let line_area = Rect::new(inner.x, top, inner.width, inner.height.min(3));
    let paragraph = Paragraph::new(Line::styled(text, Style::default().fg(color)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, line_area);
}

/// 左侧表单，右侧结果与日志
fn render_content(app: &App, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    components::form::render(app, frame, columns[0]);

    let view = app.form.view();
    if view.log.visible {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[1]);
        components::result::render_result(app, frame, rows[0]);
        components::result::render_log(app, frame, rows[1]);
    } else {
        components::result::render_result(app, frame, columns[1]);
    }
}
