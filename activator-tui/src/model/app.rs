//! 应用主状态结构

use activator_core::i18n::BoundDocument;
use activator_core::{FormController, IspProfile, Language, TranslationStore};

use super::{form_document, FormField, Modal};

/// 运营商下拉框选项（含「未选择」）
pub const ISP_OPTIONS: [Option<IspProfile>; 6] = [
    None,
    Some(IspProfile::Cmcc),
    Some(IspProfile::Campus),
    Some(IspProfile::Unicom),
    Some(IspProfile::Telecom),
    Some(IspProfile::Direct),
];

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点字段
    pub focus: FormField,

    /// 翻译表与当前语言
    pub store: TranslationStore,

    /// 界面静态文本
    pub document: BoundDocument,

    /// 表单控制器
    pub form: FormController,

    /// 语言选择器当前值（加载完成前可能与已加载语言不同）
    pub selected_language: Language,

    /// 是否有语言表正在加载
    pub language_loading: bool,

    /// 首次加载失败（显示重试提示）
    pub load_failed: bool,

    /// 身份选项
    pub roles: Vec<String>,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 弹窗
    pub modal: Option<Modal>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(
        store: TranslationStore,
        form: FormController,
        roles: Vec<String>,
        language: Language,
    ) -> Self {
        Self {
            should_quit: false,
            focus: FormField::default(),
            store,
            document: form_document(),
            form,
            selected_language: language,
            language_loading: false,
            load_failed: false,
            roles,
            status_message: None,
            modal: None,
        }
    }

    /// 首个翻译表加载完成前界面不可交互
    pub fn is_ready(&self) -> bool {
        self.store.is_ready()
    }

    /// 字段当前是否可见
    pub fn is_field_visible(&self, field: FormField) -> bool {
        let view = self.form.view();
        match field {
            FormField::Variant => view.show_variants,
            FormField::ChangePassword => view.change_password.is_some(),
            _ => true,
        }
    }

    /// 当前运营商在选项中的位置
    pub fn isp_index(&self) -> usize {
        let isp = self.form.view().isp;
        ISP_OPTIONS.iter().position(|o| *o == isp).unwrap_or(0)
    }

    /// 当前身份在选项中的位置
    pub fn role_index(&self) -> usize {
        let role = &self.form.view().role;
        self.roles.iter().position(|r| r == role).unwrap_or(0)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
