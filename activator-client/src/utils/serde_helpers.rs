//! Serde helpers for loosely typed portal fields.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional code that may arrive as a JSON string or number.
///
/// `null` and missing values become `None`; booleans, arrays and objects are
/// rejected.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::string_or_number")]
        code: Option<String>,
    }

    #[test]
    fn accepts_string() {
        let p: Probe = serde_json::from_str(r#"{"code":"MAC_FAIL"}"#).unwrap();
        assert_eq!(p.code.as_deref(), Some("MAC_FAIL"));
    }

    #[test]
    fn accepts_number() {
        let p: Probe = serde_json::from_str(r#"{"code":815}"#).unwrap();
        assert_eq!(p.code.as_deref(), Some("815"));
    }

    #[test]
    fn missing_is_none() {
        let p: Probe = serde_json::from_str("{}").unwrap();
        assert!(p.code.is_none());
    }

    #[test]
    fn rejects_object() {
        let result = serde_json::from_str::<Probe>(r#"{"code":{"a":1}}"#);
        assert!(result.is_err());
    }
}
