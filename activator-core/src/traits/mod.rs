//! Storage layer abstraction trait definition

mod preference_store;

pub use preference_store::{InMemoryPreferenceStore, PreferenceStore};

// Portal client seams, re-exported so hosts only depend on core
pub use activator_client::{ActivationApi, TranslationApi};
