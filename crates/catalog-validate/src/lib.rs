//! Completeness validation for canonical product records.
//!
//! Adapters never reject a record; this crate is where missing or
//! inconsistent data is reported before a submission is attempted.

mod checks;
mod report;

pub use report::ValidationReport;

use catalog_model::{Product, ValidationOptions};
use tracing::debug;

/// Runs every check against `product`.
pub fn validate_product(product: &Product, options: &ValidationOptions) -> ValidationReport {
    let report = checks::run_all(product, options);
    debug!(
        product = %product.name,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated product"
    );
    report
}
