//! 表单消息
//!
//! 输入类消息作用于当前焦点字段

/// 表单消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    // ========== 输入 ==========
    /// 输入字符
    Input(char),
    /// 删除一个字符
    Backspace,
    /// 清空当前输入框
    Clear,

    // ========== 选择器 ==========
    /// 上一个选项
    SelectPrev,
    /// 下一个选项
    SelectNext,

    // ========== 操作 ==========
    /// 确认当前字段（按钮执行，其余字段跳到下一个）
    Confirm,
    /// 提交激活
    Submit,
    /// 展开/收起日志
    ToggleLog,
    /// 显示/隐藏密码
    TogglePassword,
    /// 修改密码
    ChangePassword,
}
