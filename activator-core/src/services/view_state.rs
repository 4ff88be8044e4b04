//! 表单视图状态
//!
//! 单一的显式状态结构：用户输入、由翻译表解析出的文本，以及
//! 结果面板/日志面板的结构化内容（切换语言时据此重新渲染）。

use crate::account::{PasswordHint, UsernameFormatError};
use crate::types::{ChangePasswordAction, CmccVariant, IspProfile};

/// 提交状态机
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// 结果面板语气
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Info,
    Success,
    Error,
}

/// 域错误的提示来源（按优先级）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorTip {
    /// 门户返回的非空 `error_message`
    ServerMessage(String),
    /// `errorCodes.<code>` 命中
    CodeLookup(String),
    /// 通用兜底
    GenericFallback,
}

/// 结果面板的结构化内容
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultContent {
    #[default]
    Hidden,
    /// 请求进行中
    Activating,
    /// 本地拒绝（如未选运营商），值为翻译键
    Rejected(&'static str),
    Succeeded {
        account: String,
        iface: Option<String>,
        mac: Option<String>,
        ip: Option<String>,
    },
    Failed {
        code: Option<String>,
        tip: ErrorTip,
        account: String,
        iface: Option<String>,
    },
    /// 传输层失败（网络、超时、HTTP 状态、解析）
    RequestFailed,
}

/// 结果面板中的一行「标签：值」
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub label: String,
    pub value: String,
}

/// 已渲染的结果面板
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultPanel {
    pub content: ResultContent,
    pub visible: bool,
    pub tone: Tone,
    pub headline: String,
    pub lines: Vec<ResultLine>,
}

/// 日志面板的结构化内容
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogContent {
    #[default]
    Empty,
    Loading,
    /// 服务器原文（激活返回的日志或拨号日志接口的 `error`）
    Raw(String),
    /// 拨号日志文件
    DialLog { file: Option<String>, content: String },
    /// 翻译键（`noLog`、`loadLogFailed`）
    Message(&'static str),
}

/// 已渲染的日志面板
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogPanel {
    pub content: LogContent,
    pub visible: bool,
    /// 拨号日志请求进行中
    pub loading: bool,
    /// 本次会话已请求过拨号日志
    pub fetched: bool,
    pub text: String,
}

/// 提交按钮
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub enabled: bool,
    /// 忙碌指示
    pub loading: bool,
    pub label: String,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            enabled: true,
            loading: false,
            label: String::new(),
        }
    }
}

/// 表单视图
#[derive(Debug, Clone, Default)]
pub struct FormView {
    // === 输入 ===
    pub isp: Option<IspProfile>,
    pub variant: CmccVariant,
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: String,
    pub password_visible: bool,

    // === 随运营商变化 ===
    pub username_label: String,
    pub username_placeholder: String,
    /// 是否显示移动子选项
    pub show_variants: bool,
    /// 修改密码按钮行为，`None` 时隐藏按钮
    pub change_password: Option<ChangePasswordAction>,
    pub change_password_label: String,

    // === 推导结果 ===
    pub preview_account: Option<String>,
    /// 「完整账号：」+ 账号
    pub preview_text: Option<String>,
    pub password_hint: Option<PasswordHint>,
    pub password_hint_text: String,
    pub username_advisory: Option<UsernameFormatError>,
    pub advisory_text: Option<String>,

    // === 提交与结果 ===
    pub submit_state: SubmitState,
    pub submit: SubmitButton,
    pub result: ResultPanel,
    pub log: LogPanel,
}

impl FormView {
    /// 是否正在提交
    pub fn is_submitting(&self) -> bool {
        self.submit_state == SubmitState::Submitting
    }
}
