//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//! 需要网络的操作不在这里执行，而是返回 Command 交给 Backend 层。
//!
//!     form.rs         表单消息（输入、选择器、按钮）
//!     backend.rs      后台任务结果
//!

mod backend;
mod form;

use activator_core::types::ActivationRequest;

use crate::message::AppMessage;
use crate::model::{App, Modal};

/// 需要 Backend 层执行的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    /// 加载语言表（带回退）
    LoadLanguage(String),
    /// 提交激活请求
    Activate(ActivationRequest),
    /// 获取拨号日志
    FetchDialLog,
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Command {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }
        AppMessage::NextField => {
            app.focus = app.focus.next(|f| app.is_field_visible(f));
        }
        AppMessage::PrevField => {
            app.focus = app.focus.prev(|f| app.is_field_visible(f));
        }
        AppMessage::Form(form_msg) => return form::update(app, form_msg),
        AppMessage::Reload => {
            let code = app.selected_language.code();
            return request_language(app, code);
        }
        AppMessage::ShowHelp => {
            app.modal = Some(Modal::Help);
        }
        AppMessage::CloseModal => {
            app.modal = None;
        }
        AppMessage::Backend(backend_msg) => backend::update(app, backend_msg),
        AppMessage::Noop => {}
    }
    Command::None
}

/// 发起语言加载，已有加载进行中时忽略
pub fn request_language(app: &mut App, code: &str) -> Command {
    if app.language_loading {
        return Command::None;
    }
    app.language_loading = true;
    app.load_failed = false;
    Command::LoadLanguage(code.to_string())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use activator_core::error::ClientError;
    use activator_core::traits::{ActivationApi, InMemoryPreferenceStore, TranslationApi};
    use activator_core::types::{ActivationRequest, ActivationResponse, DialLogResponse};
    use activator_core::{FormController, Language, TranslationStore, TranslationTable};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::message::{AppMessage, BackendMessage};
    use crate::model::App;

    /// 不应被调用的门户（update 层不发请求）
    pub struct OfflinePortal;

    fn offline() -> ClientError {
        ClientError::NetworkError {
            endpoint: "test".to_string(),
            detail: "offline".to_string(),
        }
    }

    #[async_trait]
    impl ActivationApi for OfflinePortal {
        async fn activate(&self, _: &ActivationRequest) -> Result<ActivationResponse, ClientError> {
            Err(offline())
        }

        async fn fetch_dial_log(&self) -> Result<DialLogResponse, ClientError> {
            Err(offline())
        }
    }

    #[async_trait]
    impl TranslationApi for OfflinePortal {
        async fn fetch_translations(&self, _: &str) -> Result<Value, ClientError> {
            Err(offline())
        }
    }

    pub fn zh() -> TranslationTable {
        TranslationTable::new(
            Language::Zh,
            json!({
                "pageTitle": "校园网激活",
                "activateButton": "立即激活",
                "activatingButton": "激活中...",
                "usernameLabelPhone": "手机号",
                "usernameLabelStudent": "学号",
                "changePasswordCMCC": "发送短信修改移动密码",
                "selectISP": "请选择运营商",
                "loadingLog": "正在加载日志...",
                "loadLogFailed": "日志加载失败"
            }),
        )
        .unwrap()
    }

    pub fn en() -> TranslationTable {
        TranslationTable::new(
            Language::En,
            json!({ "pageTitle": "Activation", "usernameLabelPhone": "Phone" }),
        )
        .unwrap()
    }

    pub fn app() -> App {
        let portal = Arc::new(OfflinePortal);
        let store = TranslationStore::new(portal.clone(), Arc::new(InMemoryPreferenceStore::new()));
        let form = FormController::new(portal, "student");
        App::new(
            store,
            form,
            vec!["student".to_string(), "teacher".to_string()],
            Language::Zh,
        )
    }

    /// 已完成首次加载的应用
    pub fn ready_app() -> App {
        let mut app = app();
        super::update(
            &mut app,
            AppMessage::Backend(BackendMessage::TranslationsLoaded(Some(zh()))),
        );
        app
    }
}
