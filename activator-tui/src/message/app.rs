//! 应用主消息枚举

use super::{BackendMessage, FormMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个字段
    NextField,

    /// 焦点移到上一个字段
    PrevField,

    /// 表单相关消息
    Form(FormMessage),

    /// 重新加载当前语言
    Reload,

    /// 显示帮助
    ShowHelp,

    /// 关闭弹窗
    CloseModal,

    /// 后台任务结果
    Backend(BackendMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
