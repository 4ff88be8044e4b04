//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::F(1));
    pub const RELOAD: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));

    // 字段切换
    pub const NEXT_FIELD: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const PREV_FIELD: KeyBinding = KeyBinding::new(KeyModifiers::SHIFT, KeyCode::BackTab);

    // 操作
    pub const SUBMIT: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const TOGGLE_LOG: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const TOGGLE_PASSWORD: KeyBinding = KeyBinding::alt(KeyCode::Char('v'));
    pub const CHANGE_PASSWORD: KeyBinding = KeyBinding::alt(KeyCode::Char('p'));
    pub const CLEAR_INPUT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
}
