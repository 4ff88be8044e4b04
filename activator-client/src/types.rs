use serde::{Deserialize, Serialize};

use crate::utils::serde_helpers::string_or_number;

// ============ Activation ============

/// Body of `POST /activate`.
///
/// `username` is already the canonical account identifier (carrier prefix
/// and `@<isp>` suffix applied by the caller).
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivationRequest {
    /// Canonical account identifier.
    pub username: String,
    /// Dial password.
    pub password: String,
    /// Display name of the person activating.
    pub name: String,
    /// Role of the person activating.
    pub role: String,
    /// Carrier code (`cmccgx`, `cdu`, `10010`, `96301`, `direct`).
    pub isp: String,
}

impl std::fmt::Debug for ActivationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivationRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("isp", &self.isp)
            .finish()
    }
}

/// Response of `POST /activate`.
///
/// On success `iface`, `mac` and `ip` describe the dialed session; on failure
/// `error_code` and optionally `error_message` describe why. `log` carries the
/// dial transcript in both cases when the portal has one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub iface: Option<String>,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    /// Portal error codes are mostly numeric strings (`"691"`), some
    /// deployments send bare numbers.
    #[serde(default, deserialize_with = "string_or_number")]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub log: Option<String>,
}

// ============ Dial logs ============

/// Response of `GET /api/dial-logs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DialLogResponse {
    #[serde(default)]
    pub success: bool,
    /// Base name of the log file the content was read from.
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default)]
    pub log_content: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
