//! Portal HTTP client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ActivationApi, TranslationApi};
use crate::types::{ActivationRequest, ActivationResponse, DialLogResponse};
use crate::utils::log_sanitizer::mask_secret;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）。拨号在服务端同步进行，可能持续一分钟以上。
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

const ACTIVATE_PATH: &str = "activate";
const DIAL_LOGS_PATH: &str = "api/dial-logs";
const I18N_PATH: &str = "static/i18n";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Portal base URL, e.g. `http://192.168.1.1:5000`
    pub base_url: String,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Whole-request timeout
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// HTTP implementation of [`ActivationApi`] and [`TranslationApi`]
pub struct HttpActivationClient {
    client: Client,
    base: Url,
}

impl HttpActivationClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base = normalize_base_url(&config.base_url)?;
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::InvalidConfig {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        log::info!("Portal client ready for {base}");
        Ok(Self { client, base })
    }

    /// Portal base URL (always ends with `/`)
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint_url(&self, path: &str) -> Result<Url> {
        self.base.join(path).map_err(|e| ClientError::InvalidConfig {
            detail: format!("Cannot build URL for '{path}': {e}"),
        })
    }
}

/// Parse the base URL and make sure its path ends with `/`, so that
/// `join` appends endpoint paths instead of replacing the last segment.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|e| ClientError::InvalidConfig {
        detail: format!("Invalid base URL '{raw}': {e}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidConfig {
            detail: format!("Unsupported URL scheme '{}'", url.scheme()),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Path of the translation table for a language code
fn translation_path(code: &str) -> String {
    format!("{I18N_PATH}/{code}.json")
}

#[async_trait]
impl ActivationApi for HttpActivationClient {
    async fn activate(&self, request: &ActivationRequest) -> Result<ActivationResponse> {
        let url = self.endpoint_url(ACTIVATE_PATH)?;
        log::info!(
            "Activating {} via {} (password {})",
            request.username,
            request.isp,
            mask_secret(&request.password)
        );

        let builder = self.client.post(url.clone()).json(request);
        let (status, body) =
            HttpUtils::execute_request(builder, ACTIVATE_PATH, "POST", url.as_str()).await?;
        if !(200..300).contains(&status) {
            // 门户在失败时仍返回结构化 JSON，按响应体解析
            log::warn!("[{ACTIVATE_PATH}] HTTP {status}, parsing body anyway");
        }

        HttpUtils::parse_json(&body, ACTIVATE_PATH)
    }

    async fn fetch_dial_log(&self) -> Result<DialLogResponse> {
        let url = self.endpoint_url(DIAL_LOGS_PATH)?;
        let builder = self.client.get(url.clone());
        let (status, body) =
            HttpUtils::execute_request(builder, DIAL_LOGS_PATH, "GET", url.as_str()).await?;
        HttpUtils::ensure_success(status, &body, DIAL_LOGS_PATH)?;
        HttpUtils::parse_json(&body, DIAL_LOGS_PATH)
    }
}

#[async_trait]
impl TranslationApi for HttpActivationClient {
    async fn fetch_translations(&self, code: &str) -> Result<Value> {
        let path = translation_path(code);
        let url = self.endpoint_url(&path)?;
        let builder = self.client.get(url.clone());
        let (status, body) =
            HttpUtils::execute_request(builder, I18N_PATH, "GET", url.as_str()).await?;
        HttpUtils::ensure_success(status, &body, I18N_PATH)?;
        HttpUtils::parse_json(&body, I18N_PATH)
    }
}
