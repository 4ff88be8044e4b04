//! PPPoE Activator Core Library
//!
//! Provides the logic behind the activation form, independent of any UI:
//! - Account derivation (carrier prefix/suffix, password prefill, username advisories)
//! - Translation store (language selection, table loading with fallback, dotted-key lookup)
//! - Form controller (input events, submission state machine, result and log rendering)
//!
//! Hosts inject the portal client through the `activator-client` traits and a
//! [`PreferenceStore`] for the remembered language, and implement
//! [`i18n::Document`] for their translatable elements.

pub mod account;
pub mod error;
pub mod i18n;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use i18n::{TranslationStore, TranslationTable};
pub use services::{FormController, FormView};
pub use traits::PreferenceStore;
pub use types::{CmccVariant, IspProfile, Language};
