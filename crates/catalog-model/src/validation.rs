//! Shape-only format checks shared by every other component.
//!
//! None of these perform network verification. They gate client-side UX and
//! routing decisions; they are not a security boundary.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::Result;
use crate::ids::ObjectId;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?|ftp)://[^\s/?#]+([/?#]\S*)?$").expect("url pattern compiles")
});

/// Returns true iff `value` is a 24-character hexadecimal string (case-insensitive).
///
/// # Examples
///
/// ```
/// use catalog_model::validation::is_identifier;
///
/// assert!(is_identifier("507f1f77bcf86cd799439011"));
/// assert!(is_identifier("507F1F77BCF86CD799439011"));
/// assert!(!is_identifier("not-a-valid-id"));
/// ```
pub fn is_identifier(value: &str) -> bool {
    ObjectId::parse(value).is_ok()
}

/// Fails with `InvalidIdentifier` when `value` is absent or malformed.
pub fn require_identifier(value: Option<&str>) -> Result<ObjectId> {
    ObjectId::parse(value.unwrap_or_default())
}

pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

pub fn is_url(value: &str) -> bool {
    URL_PATTERN.is_match(value.trim())
}

/// True for null, whitespace-only text, an empty sequence, or an object with no keys.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Typed counterpart of [`is_empty`] for values that never left Rust.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl<T> Blank for [T] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Blank for BTreeMap<K, V> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Blank for HashMap<K, V, S> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for Value {
    fn is_blank(&self) -> bool {
        is_empty(self)
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Blank::is_blank)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::CatalogError;

    #[test]
    fn require_identifier_rejects_missing_and_malformed() {
        assert!(matches!(
            require_identifier(None),
            Err(CatalogError::InvalidIdentifier { .. })
        ));
        assert!(matches!(
            require_identifier(Some("not-a-valid-id")),
            Err(CatalogError::InvalidIdentifier { value }) if value == "not-a-valid-id"
        ));
        let id = require_identifier(Some("507f1f77bcf86cd799439011")).unwrap();
        assert_eq!(id.to_hex(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn identifier_requires_exact_length() {
        assert!(!is_identifier("507f1f77bcf86cd79943901"));
        assert!(!is_identifier(" 507f1f77bcf86cd799439011"));
        assert!(!is_identifier("12345"));
    }

    #[test]
    fn empty_values() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&json!("   ")));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!({})));
        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!(false)));
        assert!(!is_empty(&json!(["x"])));
        assert!(!is_empty(&json!({"a": null})));
    }

    #[test]
    fn blank_trait_matches_json_rules() {
        assert!("  ".is_blank());
        assert!(None::<String>.is_blank());
        assert!(Some(String::new()).is_blank());
        assert!(!Some("Acme".to_string()).is_blank());
        assert!(Vec::<u8>::new().is_blank());
        assert!(BTreeMap::<String, String>::new().is_blank());
    }

    #[test]
    fn email_shape() {
        assert!(is_email("buyer@example.com"));
        assert!(is_email("  sales.team@acme.co.uk "));
        assert!(!is_email("buyer@example"));
        assert!(!is_email("buyer example.com"));
        assert!(!is_email("@example.com"));
    }

    #[test]
    fn url_shape() {
        assert!(is_url("https://cdn.example.com/images/soy.png"));
        assert!(is_url("HTTP://localhost:8080/x?y=1"));
        assert!(!is_url("cdn.example.com/soy.png"));
        assert!(!is_url("https://"));
        assert!(!is_url("ftp:/broken"));
        assert!(!is_url("https://exa mple.com"));
    }
}
