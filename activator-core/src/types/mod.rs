//! Type definition module

mod isp;
mod language;

pub use isp::{ChangePasswordAction, CmccVariant, IspProfile, CAMPUS_PASSWORD_PORTAL};
pub use language::Language;

// Re-export wire types from the portal client
pub use activator_client::{ActivationRequest, ActivationResponse, DialLogResponse};
