//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use activator_client::ClientError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Language code outside the supported set
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Translation table has an unusable shape
    #[error("Invalid translation table for {language}: {reason}")]
    InvalidTranslationTable { language: String, reason: String },

    /// Local form validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Storage layer error (preference persistence)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Portal client error (converting from library)
    #[error("{0}")]
    Client(#[from] ClientError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, missing resource, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::UnsupportedLanguage(_) | Self::ValidationError(_) => true,
            Self::Client(e) => e.is_expected(),
            _ => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
