//! Helpers for loosely-typed text fields coming from the backend.

use serde::{Deserialize, Deserializer};

/// `deserialize_with` helper: `null` (or a missing field, with `#[serde(default)]`)
/// becomes an empty string.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Minimal shape check for an email address: `local@domain.tld`.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "null_as_empty")]
        name: String,
    }

    #[test]
    fn null_and_missing_become_empty() {
        let p: Probe = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(p.name, "");
        let p: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(p.name, "");
        let p: Probe = serde_json::from_str(r#"{"name": "Maler"}"#).unwrap();
        assert_eq!(p.name, "Maler");
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("anna@example.de"));
        assert!(!looks_like_email("anna.example.de"));
        assert!(!looks_like_email("@example.de"));
        assert!(!looks_like_email("anna@localhost"));
        assert!(!looks_like_email("an na@example.de"));
    }
}
