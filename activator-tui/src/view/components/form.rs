//! 激活表单

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{element, App, FormField};
use crate::view::theme::{colors, Styles};

/// 标签列宽度（显示宽度）
const LABEL_WIDTH: usize = 16;
/// 密码掩码最多显示的字符数
const MASK_MAX: usize = 24;

/// 渲染表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.document.text_or_key(element::TITLE)))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    for field in [
        FormField::Language,
        FormField::Isp,
        FormField::Variant,
        FormField::Username,
        FormField::Password,
        FormField::Name,
        FormField::Role,
        FormField::ChangePassword,
        FormField::Submit,
        FormField::Log,
    ] {
        if app.is_field_visible(field) {
            push_field(app, field, &mut lines);
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn push_field(app: &App, field: FormField, lines: &mut Vec<Line<'static>>) {
    let c = colors();
    let view = app.form.view();
    let doc = &app.document;
    let focused = app.focus == field;

    match field {
        FormField::Language => {
            let mut value = app.selected_language.display_name().to_string();
            if app.language_loading {
                value.push_str(" …");
            }
            lines.push(selector_row(doc.text_or_key(element::LANGUAGE), value, focused));
        }
        FormField::Isp => {
            let value = view.isp.map_or_else(
                || doc.text_or_key(element::ISP_PLACEHOLDER).to_string(),
                |isp| app.store.resolve(isp.name_key()),
            );
            lines.push(selector_row(doc.text_or_key(element::ISP), value, focused));
        }
        FormField::Variant => {
            let value = app.store.resolve(view.variant.label_key());
            lines.push(selector_row(doc.text_or_key(element::VARIANT), value, focused));
        }
        FormField::Username => {
            lines.push(input_row(
                &view.username_label,
                &view.username,
                &view.username_placeholder,
                focused,
            ));
            if let Some(preview) = &view.preview_text {
                lines.push(note(preview, c.highlight));
            }
            if let Some(advisory) = &view.advisory_text {
                lines.push(note(&format!("⚠ {advisory}"), c.warning));
            }
        }
        FormField::Password => {
            let shown = if view.password_visible {
                view.password.clone()
            } else {
                "•".repeat(view.password.chars().count().min(MASK_MAX))
            };
            lines.push(input_row(
                doc.text_or_key(element::PASSWORD),
                &shown,
                doc.placeholder(element::PASSWORD).unwrap_or_default(),
                focused,
            ));
            if !view.password_hint_text.is_empty() {
                lines.push(note(&view.password_hint_text, c.muted));
            }
        }
        FormField::Name => {
            lines.push(input_row(
                doc.text_or_key(element::NAME),
                &view.name,
                doc.placeholder(element::NAME).unwrap_or_default(),
                focused,
            ));
        }
        FormField::Role => {
            lines.push(selector_row(
                doc.text_or_key(element::ROLE),
                view.role.clone(),
                focused,
            ));
        }
        FormField::ChangePassword => {
            lines.push(Line::from(""));
            lines.push(button(&view.change_password_label, focused, true));
        }
        FormField::Submit => {
            lines.push(Line::from(""));
            lines.push(button(&view.submit.label, focused, view.submit.enabled));
        }
        FormField::Log => {
            lines.push(button(doc.text_or_key(element::LOG), focused, true));
        }
    }
}

/// 标签列，按显示宽度补齐
fn label(text: &str, focused: bool) -> Vec<Span<'static>> {
    let c = colors();
    let prefix = if focused { "▶ " } else { "  " };
    let style = if focused {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let padding = LABEL_WIDTH.saturating_sub(text.width());
    vec![
        Span::styled(prefix, style),
        Span::styled(text.to_string(), style),
        Span::raw(" ".repeat(padding)),
        Span::styled(": ", Style::default().fg(c.muted)),
    ]
}

fn selector_row(text: &str, value: String, focused: bool) -> Line<'static> {
    let c = colors();
    let mut spans = label(text, focused);
    if focused {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            value,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Yellow)));
    } else {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(value, Style::default().fg(c.highlight)));
    }
    Line::from(spans)
}

fn input_row(text: &str, value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let c = colors();
    let mut spans = label(text, focused);
    if value.is_empty() && !focused {
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    } else if focused {
        spans.push(Span::styled(format!("{value}▎"), Style::default().fg(Color::Cyan)));
    } else {
        spans.push(Span::styled(value.to_string(), Style::default().fg(c.fg)));
    }
    Line::from(spans)
}

/// 字段下方的说明行
fn note(text: &str, color: Color) -> Line<'static> {
    let indent = " ".repeat(LABEL_WIDTH + 6);
    Line::from(vec![
        Span::raw(indent),
        Span::styled(text.to_string(), Style::default().fg(color)),
    ])
}

fn button(text: &str, focused: bool, enabled: bool) -> Line<'static> {
    let c = colors();
    let style = match (enabled, focused) {
        (false, _) => Style::default().fg(c.muted),
        (true, true) => Style::default()
            .bg(c.highlight)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(c.fg),
    };
    let prefix = if focused { "▶ " } else { "  " };
    Line::from(vec![
        Span::raw(prefix),
        Span::styled(format!("[ {text} ]"), style),
    ])
}
