//! Price, minimum order quantity and daily capacity.

use catalog_model::{Product, ValidationIssue};

pub fn check(product: &Product) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if !product.price_per_unit.is_finite() || product.price_per_unit < 0.0 {
        issues.push(ValidationIssue::error(
            "pricePerUnit",
            format!("price {} must be a non-negative number", product.price_per_unit),
        ));
    }
    if product.minimum_order_quantity == 0 {
        issues.push(ValidationIssue::error(
            "minimumOrderQuantity",
            "minimum order quantity must be at least 1",
        ));
    }
    if product.daily_capacity == 0 {
        issues.push(ValidationIssue::error(
            "dailyCapacity",
            "daily capacity must be at least 1",
        ));
    }

    // Only meaningful once both are set.
    if product.daily_capacity > 0 && product.minimum_order_quantity > product.daily_capacity {
        issues.push(ValidationIssue::warning(
            "minimumOrderQuantity",
            format!(
                "minimum order quantity {} exceeds daily capacity {}",
                product.minimum_order_quantity, product.daily_capacity
            ),
        ));
    }

    issues
}
