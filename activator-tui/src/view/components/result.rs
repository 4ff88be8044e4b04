//! 结果与日志面板

use activator_core::services::Tone;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::{element, App};
use crate::view::theme::{colors, Styles};

/// 渲染激活结果
pub fn render_result(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let panel = &app.form.view().result;

    let block = Block::default()
        .title(format!(" {} ", app.document.text_or_key(element::RESULT)))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !panel.visible {
        return;
    }

    let color = match panel.tone {
        Tone::Info => c.highlight,
        Tone::Success => c.success,
        Tone::Error => c.error,
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            format!(" {}", panel.headline),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    lines.extend(panel.lines.iter().map(|line| {
        Line::from(vec![
            Span::styled(format!(" {}: ", line.label), Style::default().fg(c.muted)),
            Span::styled(line.value.clone(), Style::default().fg(c.fg)),
        ])
    }));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// 渲染日志
pub fn render_log(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let panel = &app.form.view().log;

    let block = Block::default()
        .title(format!(" {} ", app.document.text_or_key(element::LOG)))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    let style = if panel.loading {
        Style::default().fg(c.muted)
    } else {
        Style::default().fg(c.fg)
    };
    let paragraph = Paragraph::new(panel.text.as_str())
        .style(style)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
