//! 激活表单控制器
//!
//! 负责：
//! - 运营商/子选项/用户名变化时重新推导预览、密码预填与提示
//! - 提交状态机 idle → submitting → (succeeded | failed)
//! - 结果面板与日志面板的渲染
//!
//! 网络调用分成 `begin_*` / `finish_*` 两步，宿主事件循环可以把请求放进任务里执行；
//! [`FormController::submit`] 与 [`FormController::toggle_log`] 是两步的异步组合。

use std::sync::Arc;

use super::events::{Effect, FormEvent};
use super::view_state::{
    ErrorTip, FormView, LogContent, ResultContent, ResultLine, SubmitState, Tone,
};
use crate::account::{
    account_preview, change_password_action, check_username_format, derive_account,
    password_policy,
};
use crate::error::ClientError;
use crate::i18n::TranslationTable;
use crate::traits::ActivationApi;
use crate::types::{
    ActivationRequest, ActivationResponse, ChangePasswordAction, CmccVariant, DialLogResponse,
    IspProfile,
};

/// 缺失字段的占位
const PLACEHOLDER: &str = "-";
const GENERIC_TIP_KEY: &str = "unknownError";
const GENERIC_TIP: &str = "Unknown error";
const LOG_FILE_FALLBACK: &str = "日志文件";
const NO_LOG_FALLBACK: &str = "暂无日志记录";

/// 激活表单控制器
pub struct FormController {
    activation: Arc<dyn ActivationApi>,
    view: FormView,
    /// 进行中请求提交的账号
    submitted_account: Option<String>,
}

impl FormController {
    pub fn new(activation: Arc<dyn ActivationApi>, role: impl Into<String>) -> Self {
        let view = FormView {
            role: role.into(),
            ..FormView::default()
        };
        Self {
            activation,
            view,
            submitted_account: None,
        }
    }

    pub fn view(&self) -> &FormView {
        &self.view
    }

    /// 活动请求使用的客户端，供宿主自行调度请求
    pub fn activation_api(&self) -> Arc<dyn ActivationApi> {
        Arc::clone(&self.activation)
    }

    /// 分发事件
    pub fn dispatch(&mut self, event: FormEvent, table: &TranslationTable) -> Effect {
        match event {
            FormEvent::IspChanged(isp) => self.on_isp_changed(isp, table),
            FormEvent::VariantChanged(variant) => self.on_variant_changed(variant, table),
            FormEvent::UsernameInput(value) => self.on_username_input(value, table),
            FormEvent::PasswordInput(value) => self.view.password = value,
            FormEvent::NameInput(value) => self.view.name = value,
            FormEvent::RoleChanged(role) => self.view.role = role,
            FormEvent::TogglePasswordVisibility => {
                self.view.password_visible = !self.view.password_visible;
            }
            FormEvent::ChangePassword => return self.on_change_password(table),
            FormEvent::Submit => {
                return self
                    .begin_submit(table)
                    .map_or(Effect::None, Effect::Activate);
            }
            FormEvent::ToggleLog => {
                return if self.begin_log_toggle(table) {
                    Effect::FetchDialLog
                } else {
                    Effect::None
                };
            }
        }
        Effect::None
    }

    // === 输入处理 ===

    pub fn on_isp_changed(&mut self, isp: Option<IspProfile>, table: &TranslationTable) {
        self.view.isp = isp;
        self.view.show_variants = isp.is_some_and(IspProfile::has_variants);
        self.view.change_password = change_password_action(isp);
        self.render_isp_labels(table);
        self.recompute(table);
    }

    pub fn on_variant_changed(&mut self, variant: CmccVariant, table: &TranslationTable) {
        self.view.variant = variant;
        self.recompute(table);
    }

    pub fn on_username_input(&mut self, value: String, table: &TranslationTable) {
        self.view.username = value;
        self.recompute(table);
    }

    /// 修改密码：校园网打开统一身份认证，其他运营商显示说明
    pub fn on_change_password(&self, table: &TranslationTable) -> Effect {
        match self.view.change_password {
            Some(ChangePasswordAction::OpenUrl(url)) => Effect::OpenUrl(url),
            Some(ChangePasswordAction::Notice(key)) => Effect::Notice(table.resolve(key)),
            None => Effect::None,
        }
    }

    /// 重新推导预览、密码（先清空）与用户名提示
    fn recompute(&mut self, table: &TranslationTable) {
        let view = &mut self.view;

        view.preview_account = account_preview(&view.username, view.isp, view.variant);

        let policy = password_policy(&view.username, view.isp, view.variant);
        view.password = policy.prefill.unwrap_or_default();
        view.password_hint = policy.hint;

        view.username_advisory = view
            .isp
            .and_then(|isp| check_username_format(isp, &view.username).err());

        self.render_derived(table);
    }

    // === 提交 ===

    /// 开始提交
    ///
    /// 提交中重复调用被忽略。未选运营商时在本地拒绝，不产生请求。
    pub fn begin_submit(&mut self, table: &TranslationTable) -> Option<ActivationRequest> {
        if self.view.is_submitting() {
            log::debug!("Submission already in flight, ignoring");
            return None;
        }

        self.view.submit_state = SubmitState::Submitting;
        self.view.submit.enabled = false;
        self.view.submit.loading = true;
        self.set_result(ResultContent::Activating, table);
        self.render_submit_label(table);

        let Some(isp) = self.view.isp else {
            self.set_result(ResultContent::Rejected("selectISP"), table);
            self.unlock(SubmitState::Failed, table);
            return None;
        };

        let request = ActivationRequest {
            username: derive_account(&self.view.username, isp, self.view.variant),
            password: self.view.password.clone(),
            name: self.view.name.trim().to_string(),
            role: self.view.role.clone(),
            isp: isp.code().to_string(),
        };
        log::info!("Submitting activation for {}", request.username);
        self.submitted_account = Some(request.username.clone());
        Some(request)
    }

    /// 完成提交，渲染结果并恢复表单
    pub fn finish_submit(
        &mut self,
        result: Result<ActivationResponse, ClientError>,
        table: &TranslationTable,
    ) {
        let derived = self.submitted_account.take().unwrap_or_default();

        let state = match result {
            Ok(response) => {
                let state = if response.success {
                    log::info!("Activation succeeded: {derived}");
                    self.set_result(
                        ResultContent::Succeeded {
                            account: response.username.clone().unwrap_or(derived),
                            iface: response.iface.clone(),
                            mac: response.mac.clone(),
                            ip: response.ip.clone(),
                        },
                        table,
                    );
                    SubmitState::Succeeded
                } else {
                    let tip = classify_tip(&response, table);
                    log::warn!(
                        "Activation failed: code={:?} tip={tip:?}",
                        response.error_code
                    );
                    self.set_result(
                        ResultContent::Failed {
                            code: response.error_code.clone(),
                            tip,
                            account: response.username.clone().unwrap_or(derived),
                            iface: response.iface.clone(),
                        },
                        table,
                    );
                    SubmitState::Failed
                };

                let log_content = match response.log {
                    Some(log) if !log.is_empty() => LogContent::Raw(log),
                    _ => LogContent::Message("noLog"),
                };
                self.set_log(log_content, table);
                state
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Activation request failed: {e}");
                } else {
                    log::error!("Activation request failed: {e}");
                }
                self.set_result(ResultContent::RequestFailed, table);
                SubmitState::Failed
            }
        };

        self.unlock(state, table);
    }

    /// 提交并等待结果
    pub async fn submit(&mut self, table: &TranslationTable) -> SubmitState {
        let Some(request) = self.begin_submit(table) else {
            return self.view.submit_state;
        };
        let result = self.activation.activate(&request).await;
        self.finish_submit(result, table);
        self.view.submit_state
    }

    fn unlock(&mut self, state: SubmitState, table: &TranslationTable) {
        self.view.submit_state = state;
        self.view.submit.enabled = true;
        self.view.submit.loading = false;
        self.render_submit_label(table);
    }

    // === 日志面板 ===

    /// 切换日志面板，返回是否需要请求拨号日志
    ///
    /// 每个会话只请求一次，之后再次展开显示已有内容。请求进行中忽略切换。
    pub fn begin_log_toggle(&mut self, table: &TranslationTable) -> bool {
        let panel = &mut self.view.log;
        if panel.loading {
            log::debug!("Dial log fetch in flight, ignoring toggle");
            return false;
        }
        if panel.visible {
            panel.visible = false;
            return false;
        }

        panel.visible = true;
        if panel.fetched {
            return false;
        }

        panel.fetched = true;
        panel.loading = true;
        self.set_log(LogContent::Loading, table);
        true
    }

    /// 渲染拨号日志请求结果
    pub fn finish_log_fetch(
        &mut self,
        result: Result<DialLogResponse, ClientError>,
        table: &TranslationTable,
    ) {
        self.view.log.loading = false;

        let content = match result {
            Ok(response) => match response.log_content {
                Some(content) if response.success && !content.is_empty() => LogContent::DialLog {
                    file: response.log_file,
                    content,
                },
                _ => match response.error {
                    Some(error) if !error.is_empty() => LogContent::Raw(error),
                    _ => LogContent::Message("noLog"),
                },
            },
            Err(e) => {
                log::warn!("Failed to load dial log: {e}");
                // 失败不缓存，下次展开重新请求
                self.view.log.fetched = false;
                LogContent::Message("loadLogFailed")
            }
        };
        self.set_log(content, table);
    }

    /// 切换日志面板并在需要时等待拨号日志
    pub async fn toggle_log(&mut self, table: &TranslationTable) {
        if self.begin_log_toggle(table) {
            let result = self.activation.fetch_dial_log().await;
            self.finish_log_fetch(result, table);
        }
    }

    // === 渲染 ===

    /// 切换语言后重新解析所有动态文本
    ///
    /// 不修改用户输入，纯粹的重新标注保留已输入的密码。
    pub fn refresh(&mut self, table: &TranslationTable) {
        self.render_isp_labels(table);
        self.render_derived(table);
        self.render_submit_label(table);
        self.render_result(table);
        self.render_log(table);
    }

    fn render_isp_labels(&mut self, table: &TranslationTable) {
        let isp = self.view.isp;
        self.view.username_label = table.resolve(IspProfile::username_label_key(isp));
        self.view.username_placeholder = table.resolve(IspProfile::username_placeholder_key(isp));
        self.view.change_password_label = table.resolve("changePasswordButton");
    }

    fn render_derived(&mut self, table: &TranslationTable) {
        let view = &mut self.view;
        view.preview_text = view
            .preview_account
            .as_ref()
            .map(|account| format!("{}{account}", table.resolve("completeAccount")));
        view.password_hint_text = view
            .password_hint
            .map(|hint| table.resolve(hint.key()))
            .unwrap_or_default();
        view.advisory_text = view.username_advisory.map(|advisory| {
            table
                .error_message(advisory.code())
                .unwrap_or_else(|| advisory.code().to_string())
        });
    }

    fn render_submit_label(&mut self, table: &TranslationTable) {
        let key = if self.view.is_submitting() {
            "activatingButton"
        } else {
            "activateButton"
        };
        self.view.submit.label = table.resolve(key);
    }

    fn set_result(&mut self, content: ResultContent, table: &TranslationTable) {
        self.view.result.content = content;
        self.render_result(table);
    }

    fn render_result(&mut self, table: &TranslationTable) {
        let panel = &mut self.view.result;
        let line = |key: &str, value: Option<&str>| ResultLine {
            label: table.resolve(key),
            value: value.unwrap_or(PLACEHOLDER).to_string(),
        };

        let (visible, tone, headline, lines) = match &panel.content {
            ResultContent::Hidden => (false, Tone::Info, String::new(), Vec::new()),
            ResultContent::Activating => (true, Tone::Info, table.resolve("activating"), Vec::new()),
            ResultContent::Rejected(key) => (true, Tone::Error, table.resolve(key), Vec::new()),
            ResultContent::Succeeded {
                account,
                iface,
                mac,
                ip,
            } => (
                true,
                Tone::Success,
                table.resolve("successMessage"),
                vec![
                    line("accountLabel", Some(account.as_str())),
                    line("ifaceLabel", iface.as_deref()),
                    line("macLabel", mac.as_deref()),
                    line("ipLabel", ip.as_deref().filter(|ip| !ip.is_empty())),
                ],
            ),
            ResultContent::Failed {
                code,
                tip,
                account,
                iface,
            } => (
                true,
                Tone::Error,
                table.resolve("errorMessage"),
                vec![
                    line("errorCodeLabel", code.as_deref()),
                    line("tipLabel", Some(render_tip(tip, table).as_str())),
                    line("accountLabel", Some(account.as_str())),
                    line("ifaceLabel", iface.as_deref()),
                ],
            ),
            ResultContent::RequestFailed => {
                (true, Tone::Error, table.resolve("requestFailed"), Vec::new())
            }
        };

        panel.visible = visible;
        panel.tone = tone;
        panel.headline = headline;
        panel.lines = lines;
    }

    fn set_log(&mut self, content: LogContent, table: &TranslationTable) {
        self.view.log.content = content;
        self.render_log(table);
    }

    fn render_log(&mut self, table: &TranslationTable) {
        let panel = &mut self.view.log;
        panel.text = match &panel.content {
            LogContent::Empty => String::new(),
            LogContent::Loading => table.resolve("loadingLog"),
            LogContent::Raw(text) => text.clone(),
            LogContent::DialLog { file, content } => {
                let label = table
                    .lookup("log_file")
                    .unwrap_or_else(|| LOG_FILE_FALLBACK.to_string());
                let file = file.as_deref().unwrap_or(PLACEHOLDER);
                format!("【{label}：{file}】\n\n{content}")
            }
            LogContent::Message("noLog") => table
                .lookup("noLog")
                .unwrap_or_else(|| NO_LOG_FALLBACK.to_string()),
            LogContent::Message(key) => table.resolve(key),
        };
    }
}

/// 按优先级选择错误提示：服务器消息 → 错误码翻译 → 通用兜底
fn classify_tip(response: &ActivationResponse, table: &TranslationTable) -> ErrorTip {
    if let Some(message) = response.error_message.as_ref().filter(|m| !m.is_empty()) {
        return ErrorTip::ServerMessage(message.clone());
    }
    match response.error_code.as_deref() {
        Some(code) if table.error_message(code).is_some() => ErrorTip::CodeLookup(code.to_string()),
        _ => ErrorTip::GenericFallback,
    }
}

fn render_tip(tip: &ErrorTip, table: &TranslationTable) -> String {
    let generic = || {
        table
            .lookup(GENERIC_TIP_KEY)
            .unwrap_or_else(|| GENERIC_TIP.to_string())
    };
    match tip {
        ErrorTip::ServerMessage(message) => message.clone(),
        ErrorTip::CodeLookup(code) => table.error_message(code).unwrap_or_else(generic),
        ErrorTip::GenericFallback => generic(),
    }
}
