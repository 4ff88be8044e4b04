//! Form events and the side effects they ask the host to run

use crate::types::{ActivationRequest, CmccVariant, IspProfile};

/// Input events of the activation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    IspChanged(Option<IspProfile>),
    VariantChanged(CmccVariant),
    UsernameInput(String),
    PasswordInput(String),
    NameInput(String),
    RoleChanged(String),
    TogglePasswordVisibility,
    ChangePassword,
    Submit,
    ToggleLog,
}

/// Work the host performs after a dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Send the request, then call `finish_submit`
    Activate(ActivationRequest),
    /// Fetch the dial log, then call `finish_log_fetch`
    FetchDialLog,
    OpenUrl(&'static str),
    /// Show resolved text to the user
    Notice(String),
}
