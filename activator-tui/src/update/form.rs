//! 表单消息处理

use activator_core::services::{Effect, FormEvent};

use super::{request_language, Command};
use crate::message::FormMessage;
use crate::model::{App, FormField, Modal, ISP_OPTIONS};

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) -> Command {
    match msg {
        FormMessage::Input(c) => edit_text(app, |s| s.push(c)),
        FormMessage::Backspace => edit_text(app, |s| {
            s.pop();
        }),
        FormMessage::Clear => edit_text(app, String::clear),

        FormMessage::SelectPrev => select(app, false),
        FormMessage::SelectNext => select(app, true),

        FormMessage::Confirm => match app.focus {
            FormField::Submit => dispatch(app, FormEvent::Submit),
            FormField::ChangePassword => dispatch(app, FormEvent::ChangePassword),
            FormField::Log => dispatch(app, FormEvent::ToggleLog),
            _ => {
                app.focus = app.focus.next(|f| app.is_field_visible(f));
                Command::None
            }
        },
        FormMessage::Submit => dispatch(app, FormEvent::Submit),
        FormMessage::ToggleLog => dispatch(app, FormEvent::ToggleLog),
        FormMessage::TogglePassword => dispatch(app, FormEvent::TogglePasswordVisibility),
        FormMessage::ChangePassword => dispatch(app, FormEvent::ChangePassword),
    }
}

/// 把事件交给表单控制器，并把副作用转换为 Command 或弹窗
fn dispatch(app: &mut App, event: FormEvent) -> Command {
    match app.form.dispatch(event, app.store.table()) {
        Effect::None => Command::None,
        Effect::Activate(request) => Command::Activate(request),
        Effect::FetchDialLog => Command::FetchDialLog,
        Effect::OpenUrl(url) => {
            app.modal = Some(Modal::Link {
                url: url.to_string(),
            });
            Command::None
        }
        Effect::Notice(message) => {
            app.modal = Some(Modal::Notice { message });
            Command::None
        }
    }
}

/// 编辑当前焦点的输入框
fn edit_text(app: &mut App, edit: impl FnOnce(&mut String)) -> Command {
    let view = app.form.view();
    let (mut value, event): (String, fn(String) -> FormEvent) = match app.focus {
        FormField::Username => (view.username.clone(), FormEvent::UsernameInput),
        FormField::Password => (view.password.clone(), FormEvent::PasswordInput),
        FormField::Name => (view.name.clone(), FormEvent::NameInput),
        _ => return Command::None,
    };
    edit(&mut value);
    dispatch(app, event(value))
}

/// 切换当前焦点选择器的值
fn select(app: &mut App, forward: bool) -> Command {
    match app.focus {
        FormField::Language => {
            // 加载中不接受新的选择，避免选择器与实际语言不一致
            if app.language_loading {
                return Command::None;
            }
            let current = app.selected_language;
            app.selected_language = if forward { current.next() } else { current.prev() };
            let code = app.selected_language.code();
            request_language(app, code)
        }
        FormField::Isp => {
            let index = cycle(app.isp_index(), ISP_OPTIONS.len(), forward);
            dispatch(app, FormEvent::IspChanged(ISP_OPTIONS[index]))
        }
        FormField::Variant => {
            let current = app.form.view().variant;
            let variant = if forward { current.next() } else { current.prev() };
            dispatch(app, FormEvent::VariantChanged(variant))
        }
        FormField::Role => {
            if app.roles.is_empty() {
                return Command::None;
            }
            let index = cycle(app.role_index(), app.roles.len(), forward);
            let role = app.roles[index].clone();
            dispatch(app, FormEvent::RoleChanged(role))
        }
        _ => Command::None,
    }
}

fn cycle(index: usize, len: usize, forward: bool) -> usize {
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}
