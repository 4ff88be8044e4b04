use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::types::{ActivationRequest, ActivationResponse, DialLogResponse};

/// 激活门户 Trait
///
/// 对应门户的两个业务端点。每次调用只发送一次请求，不做重试。
#[async_trait]
pub trait ActivationApi: Send + Sync {
    /// 提交激活请求（`POST /activate`）
    ///
    /// 门户在失败时也会返回 JSON 体（`success: false`），因此只要响应体能解析，
    /// 无论 HTTP 状态码如何都返回 `Ok`。
    async fn activate(&self, request: &ActivationRequest) -> Result<ActivationResponse>;

    /// 获取最新拨号日志（`GET /api/dial-logs`）
    ///
    /// 非 2xx 状态码返回 [`ClientError::HttpStatus`](crate::ClientError::HttpStatus)。
    async fn fetch_dial_log(&self) -> Result<DialLogResponse>;
}

/// 翻译表获取 Trait
#[async_trait]
pub trait TranslationApi: Send + Sync {
    /// 获取指定语言代码的翻译表（`GET /static/i18n/<code>.json`）
    ///
    /// 返回原始 JSON 树，键结构由调用方解释。
    async fn fetch_translations(&self, code: &str) -> Result<Value>;
}
