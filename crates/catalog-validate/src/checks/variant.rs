//! Category attribute block checks.

use catalog_model::{Product, ValidationIssue, ValidationOptions, VariantBlock};

pub fn check(product: &Product, options: &ValidationOptions) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let block_key = product.product_type.block_key();

    let Some(block) = &product.variant else {
        if options.require_variant_block {
            issues.push(ValidationIssue::error(
                block_key,
                format!("{} requires its attribute block", product.product_type),
            ));
        }
        return issues;
    };

    if block.product_type() != product.product_type {
        issues.push(ValidationIssue::error(
            "productType",
            format!(
                "attribute block is for {} but the product is {}",
                block.product_type(),
                product.product_type
            ),
        ));
        return issues;
    }

    if let VariantBlock::Food(food) = block {
        if options.require_food_ingredients && food.ingredients().is_empty() {
            issues.push(ValidationIssue::error(
                "ingredients",
                "food products must list at least one ingredient",
            ));
        }
        if let (Some(start), Some(end)) = (food.shelf_life_start_date, food.shelf_life_end_date)
            && start > end
        {
            issues.push(ValidationIssue::error(
                "shelfLifeEndDate",
                format!("shelf life ends ({end}) before it starts ({start})"),
            ));
        }
    }

    if let VariantBlock::Beverage(beverage) = block
        && let Some(alcohol) = beverage.alcohol_content
        && !(0.0..=100.0).contains(&alcohol)
    {
        issues.push(ValidationIssue::warning(
            "alcoholContent",
            format!("alcohol content {alcohol} is outside 0-100%"),
        ));
    }

    issues
}
