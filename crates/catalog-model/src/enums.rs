//! The product-type discriminator.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Which variant block is meaningful for a product.
///
/// The set is closed, but the wire text is not: labels are matched
/// case-insensitively, with or without the " Product" suffix, and anything
/// unrecognised reads as [`ProductType::Other`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductType {
    Food,
    Beverage,
    Natural,
    Healthy,
    Packaging,
    #[default]
    Other,
}

impl ProductType {
    pub const ALL: [ProductType; 6] = [
        ProductType::Food,
        ProductType::Beverage,
        ProductType::Natural,
        ProductType::Healthy,
        ProductType::Packaging,
        ProductType::Other,
    ];

    /// Wire label, e.g. "Food Product".
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Food => "Food Product",
            ProductType::Beverage => "Beverage Product",
            ProductType::Natural => "Natural Product",
            ProductType::Healthy => "Healthy Product",
            ProductType::Packaging => "Packaging Product",
            ProductType::Other => "Other Product",
        }
    }

    /// Key of the nested attribute block for this type, e.g. "foodProductData".
    pub fn block_key(&self) -> &'static str {
        match self {
            ProductType::Food => "foodProductData",
            ProductType::Beverage => "beverageProductData",
            ProductType::Natural => "naturalProductData",
            ProductType::Healthy => "healthyProductData",
            ProductType::Packaging => "packagingProductData",
            ProductType::Other => "otherProductData",
        }
    }

    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        let base = normalized
            .strip_suffix("products")
            .or_else(|| normalized.strip_suffix("product"))
            .unwrap_or(&normalized)
            .trim();

        match base {
            "food" => ProductType::Food,
            "beverage" | "beverages" | "drink" | "drinks" => ProductType::Beverage,
            "natural" | "organic" | "natural/organic" | "natural & organic"
            | "natural and organic" => ProductType::Natural,
            "healthy" | "health" => ProductType::Healthy,
            "packaging" => ProductType::Packaging,
            _ => ProductType::Other,
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ProductType {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl Serialize for ProductType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProductType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_label(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_with_and_without_suffix() {
        assert_eq!(ProductType::from_label("Food Product"), ProductType::Food);
        assert_eq!(ProductType::from_label("food"), ProductType::Food);
        assert_eq!(ProductType::from_label("  BEVERAGE product "), ProductType::Beverage);
        assert_eq!(ProductType::from_label("Natural/Organic"), ProductType::Natural);
        assert_eq!(ProductType::from_label("Healthy Products"), ProductType::Healthy);
        assert_eq!(ProductType::from_label("Packaging"), ProductType::Packaging);
    }

    #[test]
    fn unknown_labels_read_as_other() {
        assert_eq!(ProductType::from_label("Machinery"), ProductType::Other);
        assert_eq!(ProductType::from_label(""), ProductType::Other);
    }

    #[test]
    fn wire_labels_round_trip() {
        for product_type in ProductType::ALL {
            assert_eq!(ProductType::from_label(product_type.as_str()), product_type);
        }
    }
}
