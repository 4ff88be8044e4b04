//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 弹窗打开时任意确认键关闭
    if app.modal.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppMessage::CloseModal,
            _ => AppMessage::Noop,
        };
    }

    // 首个翻译表就绪前只允许退出和重新加载
    if !app.is_ready() {
        if DefaultKeymap::QUIT.matches(&key) {
            return AppMessage::Quit;
        }
        if DefaultKeymap::RELOAD.matches(&key) {
            return AppMessage::Reload;
        }
        return AppMessage::Noop;
    }

    if let Some(msg) = handle_global_keys(&key) {
        return msg;
    }

    handle_field_keys(key, app)
}

/// 全局快捷键（无论焦点在哪里）
fn handle_global_keys(key: &KeyEvent) -> Option<AppMessage> {
    let msg = if DefaultKeymap::QUIT.matches(key) {
        AppMessage::Quit
    } else if DefaultKeymap::HELP.matches(key) {
        AppMessage::ShowHelp
    } else if DefaultKeymap::RELOAD.matches(key) {
        AppMessage::Reload
    } else if DefaultKeymap::NEXT_FIELD.matches(key) {
        AppMessage::NextField
    } else if DefaultKeymap::PREV_FIELD.matches(key) || key.code == KeyCode::BackTab {
        AppMessage::PrevField
    } else if DefaultKeymap::SUBMIT.matches(key) {
        AppMessage::Form(FormMessage::Submit)
    } else if DefaultKeymap::TOGGLE_LOG.matches(key) {
        AppMessage::Form(FormMessage::ToggleLog)
    } else if DefaultKeymap::TOGGLE_PASSWORD.matches(key) {
        AppMessage::Form(FormMessage::TogglePassword)
    } else if DefaultKeymap::CHANGE_PASSWORD.matches(key) {
        AppMessage::Form(FormMessage::ChangePassword)
    } else if DefaultKeymap::CLEAR_INPUT.matches(key) {
        AppMessage::Form(FormMessage::Clear)
    } else {
        return None;
    };
    Some(msg)
}

/// 根据焦点字段处理按键
fn handle_field_keys(key: KeyEvent, app: &App) -> AppMessage {
    let focus = app.focus;

    match key.code {
        KeyCode::Up => AppMessage::PrevField,
        KeyCode::Down => AppMessage::NextField,
        KeyCode::Enter => AppMessage::Form(FormMessage::Confirm),

        KeyCode::Left if focus.is_selector() => AppMessage::Form(FormMessage::SelectPrev),
        KeyCode::Right if focus.is_selector() => AppMessage::Form(FormMessage::SelectNext),

        KeyCode::Backspace if focus.is_text_input() => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Char(c)
            if focus.is_text_input()
                && (key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT) =>
        {
            AppMessage::Form(FormMessage::Input(c))
        }

        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FormField, Modal};
    use crate::update::test_support::{app, ready_app};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn loading_screen_only_allows_quit_and_reload() {
        let app = app();
        assert!(matches!(
            handle_event(press(KeyCode::Char('a'), KeyModifiers::NONE), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('r'), KeyModifiers::ALT), &app),
            AppMessage::Reload
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Quit
        ));
    }

    #[test]
    fn characters_go_to_text_inputs_only() {
        let mut app = ready_app();
        app.focus = FormField::Username;
        assert!(matches!(
            handle_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT), &app),
            AppMessage::Form(FormMessage::Input('A'))
        ));

        app.focus = FormField::Isp;
        assert!(matches!(
            handle_event(press(KeyCode::Char('a'), KeyModifiers::NONE), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Right, KeyModifiers::NONE), &app),
            AppMessage::Form(FormMessage::SelectNext)
        ));
    }

    #[test]
    fn open_modal_swallows_other_keys() {
        let mut app = ready_app();
        app.modal = Some(Modal::Help);
        assert!(matches!(
            handle_event(press(KeyCode::Char('s'), KeyModifiers::ALT), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::CloseModal
        ));
    }
}
