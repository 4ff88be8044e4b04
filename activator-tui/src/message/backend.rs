//! 后台任务结果

use activator_core::error::ClientError;
use activator_core::types::{ActivationResponse, DialLogResponse};
use activator_core::TranslationTable;

/// 后台任务结果消息
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 语言表加载完成，`None` 表示连默认语言也失败
    TranslationsLoaded(Option<TranslationTable>),

    /// 激活请求完成
    ActivationFinished(Result<ActivationResponse, ClientError>),

    /// 拨号日志请求完成
    DialLogFetched(Result<DialLogResponse, ClientError>),
}
