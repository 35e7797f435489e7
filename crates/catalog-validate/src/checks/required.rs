//! Required text fields must be present and non-blank.

use catalog_model::{Blank, Product, ValidationIssue};

pub fn check(product: &Product) -> Vec<ValidationIssue> {
    [
        ("name", product.name.as_str()),
        ("category", product.category.as_str()),
        ("description", product.description.as_str()),
        ("unitType", product.unit_type.as_str()),
        ("leadTimeUnit", product.lead_time.unit.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_blank())
    .map(|(field, _)| ValidationIssue::error(field, format!("{field} is required")))
    .collect()
}
