//! Generic HTTP client tools
//!
//! Shared request processing for the portal endpoints: sending, logging and
//! reading the response. Each endpoint builds its own `RequestBuilder` and
//! decides how to interpret the status code.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `endpoint` - endpoint label (for logging and errors)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url` - full URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - any HTTP status, the caller decides
    /// * `Err(ClientError::Timeout)` / `Err(ClientError::NetworkError)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        endpoint: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ClientError> {
        log::debug!("[{endpoint}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{endpoint}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    endpoint: endpoint.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            } else {
                ClientError::NetworkError {
                    endpoint: endpoint.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{endpoint}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Reject non-2xx statuses
    ///
    /// Returns `ClientError::HttpStatus` carrying the body (if non-empty).
    pub fn ensure_success(status_code: u16, body: &str, endpoint: &str) -> Result<(), ClientError> {
        if (200..300).contains(&status_code) {
            return Ok(());
        }
        log::warn!("[{endpoint}] HTTP {status_code}");
        Err(ClientError::HttpStatus {
            endpoint: endpoint.to_string(),
            status: status_code,
            body: (!body.is_empty()).then(|| body.to_string()),
        })
    }

    /// Parse JSON response
    ///
    /// # Type Parameters
    /// * `T` - target type
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ClientError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, endpoint: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{endpoint}] JSON parse failed: {e}");
            log::error!("[{endpoint}] Raw response: {}", truncate_for_log(response_text));
            ClientError::ParseError {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
