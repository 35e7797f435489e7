//! Food-specific form adaptation.
//!
//! Food attributes are copied verbatim: blank strings stay blank and nothing
//! is defaulted, because completeness is the validator's job. Only list
//! fields are normalized (to a possibly empty sequence) and shelf-life dates
//! are coerced from text during deserialization.

use catalog_model::{FoodAttributes, ProductType, VariantBlock};

use crate::form::ProductForm;
use crate::registry::VariantAdapter;

pub struct FoodAdapter;

/// Food attributes of a form: the nested legacy block overlaid by the
/// flattened fields, lists normalized.
pub fn food_attributes(form: &ProductForm) -> FoodAttributes {
    let mut block = form.food_product_data.clone().unwrap_or_default();
    block.overlay(&form.food);
    block.normalize_lists();
    block
}

impl VariantAdapter for FoodAdapter {
    fn product_type(&self) -> Option<ProductType> {
        Some(ProductType::Food)
    }

    fn description(&self) -> &'static str {
        "Food attributes (flattened form fields)"
    }

    /// Always yields a block for Food so the lists are never missing.
    fn block_from_form(&self, form: &ProductForm, _: ProductType) -> Option<VariantBlock> {
        Some(VariantBlock::Food(food_attributes(form)))
    }

    fn block_into_form(&self, block: &VariantBlock, form: &mut ProductForm) {
        if let VariantBlock::Food(attrs) = block {
            form.food = attrs.clone();
            form.food_product_data = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    fn form(value: serde_json::Value) -> ProductForm {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn scalar_ingredient_becomes_list() {
        let attrs = food_attributes(&form(json!({"ingredients": "Salt"})));
        assert_eq!(attrs.ingredients, Some(vec!["Salt".to_string()]));
    }

    #[test]
    fn absent_lists_become_empty() {
        let attrs = food_attributes(&form(json!({"productType": "Food Product"})));
        assert_eq!(attrs.ingredients, Some(vec![]));
        assert_eq!(attrs.allergens, Some(vec![]));
        assert_eq!(attrs.flavor_type, Some(vec![]));
        assert_eq!(attrs.usage, Some(vec![]));
    }

    #[test]
    fn blank_scalars_are_kept_verbatim() {
        let attrs = food_attributes(&form(json!({"foodType": "", "storageInstruction": "  "})));
        assert_eq!(attrs.food_type.as_deref(), Some(""));
        assert_eq!(attrs.storage_instruction.as_deref(), Some("  "));
        assert!(attrs.packaging_type.is_none());
    }

    #[test]
    fn shelf_life_dates_are_coerced_or_dropped() {
        let attrs = food_attributes(&form(json!({
            "shelfLifeStartDate": "2026-01-15",
            "shelfLifeEndDate": "sometime next year"
        })));
        assert_eq!(attrs.shelf_life_start_date, NaiveDate::from_ymd_opt(2026, 1, 15));
        assert_eq!(attrs.shelf_life_end_date, None);
    }

    #[test]
    fn flattened_fields_win_over_nested_block() {
        let attrs = food_attributes(&form(json!({
            "foodType": "Sauce",
            "foodProductData": {"foodType": "Condiment", "allergens": ["Soy"]}
        })));
        assert_eq!(attrs.food_type.as_deref(), Some("Sauce"));
        assert_eq!(attrs.allergens, Some(vec!["Soy".to_string()]));
    }
}
