//! # activator-client
//!
//! HTTP client for the PPPoE activation portal.
//!
//! The portal exposes three endpoints that the activation form consumes:
//!
//! | Endpoint | Purpose |
//! |----------|---------|
//! | `POST /activate` | Dial a PPPoE session for the submitted account |
//! | `GET /api/dial-logs` | Fetch the latest dial log file |
//! | `GET /static/i18n/<lang>.json` | Fetch a translation table |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use activator_client::{ActivationApi, ActivationRequest, ClientConfig, HttpActivationClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpActivationClient::new(ClientConfig::new("http://192.168.1.1:5000"))?;
//!
//!     let request = ActivationRequest {
//!         username: "13800000000@cmccgx".to_string(),
//!         password: "000000".to_string(),
//!         name: "Alice".to_string(),
//!         role: "student".to_string(),
//!         isp: "cmccgx".to_string(),
//!     };
//!     let response = client.activate(&request).await?;
//!     println!("success = {}", response.success);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError). Requests are
//! sent exactly once; the client never retries on its own.

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{ClientConfig, HttpActivationClient};
pub use error::{ClientError, Result};
pub use traits::{ActivationApi, TranslationApi};
pub use types::{ActivationRequest, ActivationResponse, DialLogResponse};

pub use utils::log_sanitizer;
