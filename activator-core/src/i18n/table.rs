//! Translation table and dotted-key resolution

use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::types::Language;

/// Subtree holding the localized text of portal error codes
pub const ERROR_CODES_KEY: &str = "errorCodes";

/// Resolve a dotted key against a translation tree.
///
/// Returns the key itself when any segment is missing or the leaf is not
/// displayable. Strings are returned as-is, `true` and non-zero numbers
/// render as their JSON text. Never fails.
pub fn resolve(key: &str, root: &Value) -> String {
    match lookup(key, root) {
        Some(text) => text,
        None => {
            log::warn!("Missing translation key: {key}");
            key.to_string()
        }
    }
}

/// Like [`resolve`] but reports absence instead of echoing the key.
pub fn lookup(key: &str, root: &Value) -> Option<String> {
    let mut node = root;
    for segment in key.split('.') {
        node = node.as_object()?.get(segment)?;
    }
    displayable(node)
}

fn displayable(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// A loaded translation table for one language
///
/// Tables are replaced wholesale on every load, never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationTable {
    language: Language,
    root: Value,
}

impl TranslationTable {
    /// Wrap a fetched JSON tree. The root must be an object.
    pub fn new(language: Language, root: Value) -> CoreResult<Self> {
        if !root.is_object() {
            return Err(CoreError::InvalidTranslationTable {
                language: language.code().to_string(),
                reason: format!("expected a JSON object at the root, got {}", kind(&root)),
            });
        }
        Ok(Self { language, root })
    }

    /// Table with no entries; every key resolves to itself
    #[must_use]
    pub fn empty(language: Language) -> Self {
        Self {
            language,
            root: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn resolve(&self, key: &str) -> String {
        resolve(key, &self.root)
    }

    pub fn lookup(&self, key: &str) -> Option<String> {
        lookup(key, &self.root)
    }

    /// Localized text of a portal error code, `None` when not translated
    pub fn error_message(&self, code: &str) -> Option<String> {
        self.root
            .get(ERROR_CODES_KEY)
            .and_then(|codes| codes.get(code))
            .and_then(displayable)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
