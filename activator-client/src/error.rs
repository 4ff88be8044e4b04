use serde::{Deserialize, Serialize};

/// Unified error type for all portal requests.
///
/// Every variant names the `endpoint` it came from so log lines and status
/// messages can be traced back to a single call.
///
/// None of these variants is retried by the client: each user action maps to
/// exactly one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The portal answered with a non-success HTTP status.
    HttpStatus {
        /// Endpoint that produced the error.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        body: Option<String>,
    },

    /// Failed to parse the portal's response.
    ParseError {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The client configuration is unusable (bad base URL, TLS setup failure).
    InvalidConfig {
        /// What is wrong.
        detail: String,
    },
}

impl ClientError {
    /// 是否为预期行为（服务端明确拒绝、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::HttpStatus { status, .. } if (400..500).contains(status))
    }

    /// Whether the failure was a client-side timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { endpoint, detail } => {
                write!(f, "[{endpoint}] Network error: {detail}")
            }
            Self::Timeout { endpoint, detail } => {
                write!(f, "[{endpoint}] Request timeout: {detail}")
            }
            Self::HttpStatus { endpoint, status, .. } => {
                write!(f, "[{endpoint}] HTTP {status}")
            }
            Self::ParseError { endpoint, detail } => {
                write!(f, "[{endpoint}] Parse error: {detail}")
            }
            Self::InvalidConfig { detail } => {
                write!(f, "Invalid client configuration: {detail}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ClientError::NetworkError {
            endpoint: "activate".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[activate] Network error: connection refused");
    }

    #[test]
    fn display_http_status() {
        let e = ClientError::HttpStatus {
            endpoint: "dial-logs".to_string(),
            status: 404,
            body: Some("{\"error\":\"none\"}".to_string()),
        };
        assert_eq!(e.to_string(), "[dial-logs] HTTP 404");
    }

    #[test]
    fn display_invalid_config() {
        let e = ClientError::InvalidConfig {
            detail: "relative URL without a base".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid client configuration: relative URL without a base"
        );
    }

    #[test]
    fn client_side_statuses_are_expected() {
        let e = ClientError::HttpStatus {
            endpoint: "i18n".to_string(),
            status: 404,
            body: None,
        };
        assert!(e.is_expected());
    }

    #[test]
    fn server_side_statuses_are_not_expected() {
        let e = ClientError::HttpStatus {
            endpoint: "i18n".to_string(),
            status: 500,
            body: None,
        };
        assert!(!e.is_expected());
    }

    #[test]
    fn network_errors_are_not_expected() {
        let e = ClientError::NetworkError {
            endpoint: "activate".to_string(),
            detail: "reset".to_string(),
        };
        assert!(!e.is_expected());
        assert!(!e.is_timeout());
    }

    #[test]
    fn timeout_detected() {
        let e = ClientError::Timeout {
            endpoint: "activate".to_string(),
            detail: "deadline".to_string(),
        };
        assert!(e.is_timeout());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ClientError::ParseError {
            endpoint: "activate".to_string(),
            detail: "eof".to_string(),
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["code"], "ParseError");
        assert_eq!(json["endpoint"], "activate");
    }
}
