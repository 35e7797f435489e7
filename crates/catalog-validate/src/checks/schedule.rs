//! Lead time checks.

use catalog_model::{Blank, Product, ValidationIssue, ValidationOptions};

pub fn check(product: &Product, options: &ValidationOptions) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let lead_time = &product.lead_time;

    // Blank units are reported by the required-field check.
    if !lead_time.unit.is_blank() && !options.allows_lead_time_unit(&lead_time.unit) {
        issues.push(ValidationIssue::error(
            "leadTimeUnit",
            format!(
                "lead time unit {:?} is not one of: {}",
                lead_time.unit,
                options.allowed_lead_time_units.join(", ")
            ),
        ));
    }

    if let Some(max) = options.max_lead_time
        && lead_time.value > max
    {
        issues.push(ValidationIssue::error(
            "leadTime",
            format!("lead time {} exceeds the maximum of {max}", lead_time.value),
        ));
    }

    issues
}
