//! Image reference checks.
//!
//! Relative references (upload keys, file names) are accepted as-is; anything
//! that carries a scheme must be a well-formed URL.

use catalog_model::{Blank, Product, ValidationIssue, ValidationOptions, is_url};

pub fn check(product: &Product, options: &ValidationOptions) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if product.image.is_blank() {
        if options.require_image {
            issues.push(ValidationIssue::error("image", "a primary image is required"));
        }
    } else if !is_acceptable_reference(&product.image) {
        issues.push(ValidationIssue::error(
            "image",
            format!("{:?} is not a valid URL", product.image),
        ));
    }

    for (index, image) in product.images.iter().enumerate() {
        if image.is_blank() || !is_acceptable_reference(image) {
            issues.push(ValidationIssue::warning(
                "images",
                format!("gallery entry {index} ({image:?}) is not a usable image reference"),
            ));
        }
    }

    issues
}

fn is_acceptable_reference(value: &str) -> bool {
    !value.contains("://") || is_url(value)
}
