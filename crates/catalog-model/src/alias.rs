//! Read-fallback rules for fields that travel under more than one name.
//!
//! | Concept      | Primary            | Deprecated (read order)        |
//! |--------------|--------------------|--------------------------------|
//! | manufacturer | `manufacturer`     | `manufacturerName`, `brand`    |
//! | unit price   | `pricePerUnit`     | `price`                        |
//! | stock        | `currentAvailable` | `countInStock`                 |
//! | food block   | flattened fields   | `foodProductData`              |
//!
//! Writers always mirror the resolved value into every name of the group.

use std::fmt::Debug;

use tracing::debug;

use crate::validation::Blank;

/// First non-blank of `manufacturer`, `manufacturerName`, `brand`.
pub fn resolve_manufacturer<'a>(
    manufacturer: Option<&'a str>,
    manufacturer_name: Option<&'a str>,
    brand: Option<&'a str>,
) -> Option<&'a str> {
    let resolved = [manufacturer, manufacturer_name, brand]
        .into_iter()
        .flatten()
        .find(|value| !value.is_blank());
    if let Some(value) = resolved {
        let disagreeing = [manufacturer, manufacturer_name, brand]
            .into_iter()
            .flatten()
            .any(|other| !other.is_blank() && other != value);
        if disagreeing {
            debug!(resolved = value, "manufacturer aliases disagree; keeping highest priority");
        }
    }
    resolved
}

/// The primary value when present, otherwise the deprecated one.
pub fn resolve_primary<T>(field: &'static str, primary: Option<T>, deprecated: Option<T>) -> Option<T>
where
    T: Copy + PartialEq + Debug,
{
    match (primary, deprecated) {
        (Some(value), Some(other)) if value != other => {
            debug!(field, ?value, ?other, "alias pair disagrees; keeping primary");
            Some(value)
        }
        (Some(value), _) => Some(value),
        (None, fallback) => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manufacturer_priority_order() {
        assert_eq!(
            resolve_manufacturer(Some("A"), Some("B"), Some("C")),
            Some("A")
        );
        assert_eq!(resolve_manufacturer(None, Some("B"), Some("C")), Some("B"));
        assert_eq!(resolve_manufacturer(Some("  "), None, Some("C")), Some("C"));
        assert_eq!(resolve_manufacturer(Some(""), Some(" "), None), None);
    }

    #[test]
    fn primary_wins_over_deprecated() {
        assert_eq!(resolve_primary("pricePerUnit", Some(4.5), Some(3.0)), Some(4.5));
        assert_eq!(resolve_primary("pricePerUnit", None, Some(3.0)), Some(3.0));
        assert_eq!(resolve_primary::<u32>("currentAvailable", None, None), None);
    }
}
