//! Validation check modules.
//!
//! Each module inspects one aspect of the record.

mod capacity;
mod media;
mod required;
mod schedule;
mod variant;

use catalog_model::{Product, ValidationOptions};

use crate::report::ValidationReport;

/// Run all validation checks on a product.
pub fn run_all(product: &Product, options: &ValidationOptions) -> ValidationReport {
    let mut report = ValidationReport::new();

    // 1. Required text fields
    for issue in required::check(product) {
        report.add(issue);
    }

    // 2. Price, order quantity and capacity
    for issue in capacity::check(product) {
        report.add(issue);
    }

    // 3. Lead time unit and bound
    for issue in schedule::check(product, options) {
        report.add(issue);
    }

    // 4. Primary image and gallery
    for issue in media::check(product, options) {
        report.add(issue);
    }

    // 5. Category attribute block
    for issue in variant::check(product, options) {
        report.add(issue);
    }

    report
}
