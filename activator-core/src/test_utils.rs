//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::error::{ClientError, CoreError, CoreResult};
use crate::i18n::TranslationTable;
use crate::traits::{ActivationApi, PreferenceStore, TranslationApi};
use crate::types::{ActivationRequest, ActivationResponse, DialLogResponse, Language};

/// 测试用中文翻译表
pub fn zh_table() -> Value {
    json!({
        "pageTitle": "校园网激活",
        "activateButton": "立即激活",
        "activatingButton": "激活中...",
        "activating": "正在激活，请稍候...",
        "selectISP": "请选择运营商",
        "successMessage": "✅ 激活成功",
        "errorMessage": "❌ 激活失败",
        "requestFailed": "请求失败，请检查网络",
        "accountLabel": "账号",
        "ifaceLabel": "接口",
        "macLabel": "MAC",
        "ipLabel": "IP",
        "errorCodeLabel": "错误码",
        "tipLabel": "提示",
        "completeAccount": "完整账号：",
        "loadingLog": "正在加载日志...",
        "noLog": "暂无日志",
        "loadLogFailed": "日志加载失败",
        "log_file": "日志文件",
        "usernameLabelPhone": "手机号",
        "usernameLabelStudent": "学号",
        "usernameLabelDirect": "账号",
        "usernamePlaceholderPhone": "请输入手机号",
        "usernamePlaceholderStudent": "请输入学号",
        "usernamePlaceholderDirect": "请输入完整账号",
        "passwordHintCDU": "校园网密码",
        "passwordHintCMCCNormal": "初始密码为手机号后六位",
        "passwordHintCMCCModified": "请输入修改后的密码",
        "passwordHintTelecom": "初始密码为手机号后八位",
        "passwordHintUnicom": "联通宽带密码",
        "passwordHintDirect": "请输入密码",
        "changePasswordButton": "修改密码",
        "changePasswordCMCC": "发送短信修改移动密码",
        "changePasswordUnicom": "拨打 10010 修改密码",
        "changePasswordTelecom": "拨打 10000 修改密码",
        "errorCodes": {
            "E01": "账号不存在",
            "INVALID_CMCC_MOBILE": "移动账号应为 11 位手机号"
        }
    })
}

/// 测试用英文翻译表（故意缺少部分键）
pub fn en_table() -> Value {
    json!({
        "activateButton": "Activate",
        "activatingButton": "Activating...",
        "usernameLabelPhone": "Phone",
        "usernamePlaceholderPhone": "Enter phone number",
        "passwordHintCMCCNormal": "Default password is the last 6 digits",
        "completeAccount": "Full account: ",
        "successMessage": "Activated",
        "accountLabel": "Account",
        "errorCodes": { "E01": "Account not found" }
    })
}

pub fn table(language: Language, root: Value) -> TranslationTable {
    TranslationTable::new(language, root).expect("test table must be an object")
}

// ===== MockTranslationApi =====

pub struct MockTranslationApi {
    tables: HashMap<String, Value>,
    calls: RwLock<Vec<String>>,
    fail_all: RwLock<bool>,
}

impl MockTranslationApi {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            calls: RwLock::new(Vec::new()),
            fail_all: RwLock::new(false),
        }
    }

    pub fn with_table(mut self, code: &str, table: Value) -> Self {
        self.tables.insert(code.to_string(), table);
        self
    }

    /// 之后的请求一律返回网络错误
    pub async fn fail_all(&self, fail: bool) {
        *self.fail_all.write().await = fail;
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl TranslationApi for MockTranslationApi {
    async fn fetch_translations(&self, code: &str) -> Result<Value, ClientError> {
        self.calls.write().await.push(code.to_string());
        if *self.fail_all.read().await {
            return Err(ClientError::NetworkError {
                endpoint: "i18n".to_string(),
                detail: "connection refused".to_string(),
            });
        }
        self.tables
            .get(code)
            .cloned()
            .ok_or_else(|| ClientError::HttpStatus {
                endpoint: "i18n".to_string(),
                status: 404,
                body: None,
            })
    }
}

// ===== MockActivationApi =====

pub struct MockActivationApi {
    activation: RwLock<Option<Result<ActivationResponse, ClientError>>>,
    dial_log: RwLock<Option<Result<DialLogResponse, ClientError>>>,
    requests: RwLock<Vec<ActivationRequest>>,
    dial_log_calls: RwLock<usize>,
}

impl MockActivationApi {
    pub fn new() -> Self {
        Self {
            activation: RwLock::new(None),
            dial_log: RwLock::new(None),
            requests: RwLock::new(Vec::new()),
            dial_log_calls: RwLock::new(0),
        }
    }

    pub async fn set_activation(&self, result: Result<ActivationResponse, ClientError>) {
        *self.activation.write().await = Some(result);
    }

    pub async fn set_dial_log(&self, result: Result<DialLogResponse, ClientError>) {
        *self.dial_log.write().await = Some(result);
    }

    pub async fn requests(&self) -> Vec<ActivationRequest> {
        self.requests.read().await.clone()
    }

    pub async fn dial_log_calls(&self) -> usize {
        *self.dial_log_calls.read().await
    }
}

fn unconfigured(endpoint: &str) -> ClientError {
    ClientError::NetworkError {
        endpoint: endpoint.to_string(),
        detail: "mock not configured".to_string(),
    }
}

#[async_trait]
impl ActivationApi for MockActivationApi {
    async fn activate(&self, request: &ActivationRequest) -> Result<ActivationResponse, ClientError> {
        self.requests.write().await.push(request.clone());
        self.activation
            .read()
            .await
            .clone()
            .unwrap_or_else(|| Err(unconfigured("activate")))
    }

    async fn fetch_dial_log(&self) -> Result<DialLogResponse, ClientError> {
        *self.dial_log_calls.write().await += 1;
        self.dial_log
            .read()
            .await
            .clone()
            .unwrap_or_else(|| Err(unconfigured("dial-logs")))
    }
}

// ===== FailingPreferenceStore =====

/// 读写都失败的偏好存储
pub struct FailingPreferenceStore;

impl PreferenceStore for FailingPreferenceStore {
    fn get_language(&self) -> CoreResult<Option<String>> {
        Err(CoreError::StorageError("unavailable".to_string()))
    }

    fn set_language(&self, _code: &str) -> CoreResult<()> {
        Err(CoreError::StorageError("read-only".to_string()))
    }
}
