//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FormField};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::statusbar()), area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if !app.is_ready() {
        return vec![("Alt+R", "Reload"), ("Esc", "Quit")];
    }

    let mut hints = vec![("Tab", "Next")];
    if app.focus.is_selector() {
        hints.push(("←→", "Switch"));
    }
    match app.focus {
        FormField::Password => hints.push(("Alt+V", "Show/Hide")),
        FormField::Submit | FormField::ChangePassword | FormField::Log => {
            hints.push(("Enter", "Press"));
        }
        _ => {}
    }
    hints.push(("Alt+S", "Activate"));
    hints.push(("Alt+L", "Log"));
    hints.push(("F1", "Help"));
    hints.push(("Esc", "Quit"));
    hints
}
