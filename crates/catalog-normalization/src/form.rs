//! The editable form shape.

use catalog_model::lenient;
use catalog_model::{
    BeverageAttributes, FoodAttributes, HealthyAttributes, LegacyId, NaturalAttributes, ObjectId,
    OtherAttributes, PackagingAttributes, ProductType,
};
use serde::{Deserialize, Serialize};

/// What an edit screen binds its inputs to.
///
/// Tolerant on input: any field may be missing or mistyped. Food forms carry
/// their attributes flattened at the top level; the other categories use the
/// nested `<type>ProductData` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[serde(rename = "_id", default, deserialize_with = "lenient::object_id", skip_serializing_if = "Option::is_none")]
    pub server_id: Option<ObjectId>,
    #[serde(rename = "id", default, deserialize_with = "lenient::legacy_id", skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<LegacyId>,
    #[serde(default, deserialize_with = "lenient::object_id", skip_serializing_if = "Option::is_none")]
    pub owner: Option<ObjectId>,

    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price_per_unit: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub unit_type: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub minimum_order_quantity: Option<u32>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub daily_capacity: Option<u32>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub current_available: Option<u32>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub count_in_stock: Option<u32>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub lead_time: Option<u32>,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub lead_time_unit: String,
    #[serde(default, deserialize_with = "lenient::flag_or_false")]
    pub sustainable: bool,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::text_list_or_empty")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "lenient::product_type")]
    pub product_type: Option<ProductType>,

    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub manufacturer: String,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub manufacturer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(flatten)]
    pub food: FoodAttributes,
    #[serde(default, deserialize_with = "lenient::block", skip_serializing_if = "Option::is_none")]
    pub food_product_data: Option<FoodAttributes>,
    #[serde(default, deserialize_with = "lenient::block", skip_serializing_if = "Option::is_none")]
    pub beverage_product_data: Option<BeverageAttributes>,
    #[serde(default, deserialize_with = "lenient::block", skip_serializing_if = "Option::is_none")]
    pub natural_product_data: Option<NaturalAttributes>,
    #[serde(default, deserialize_with = "lenient::block", skip_serializing_if = "Option::is_none")]
    pub healthy_product_data: Option<HealthyAttributes>,
    #[serde(default, deserialize_with = "lenient::block", skip_serializing_if = "Option::is_none")]
    pub packaging_product_data: Option<PackagingAttributes>,
    #[serde(default, deserialize_with = "lenient::block", skip_serializing_if = "Option::is_none")]
    pub other_product_data: Option<OtherAttributes>,
}

impl ProductForm {
    /// The selected product type, or the type implied by the attribute fields present.
    pub fn effective_product_type(&self) -> ProductType {
        if let Some(product_type) = self.product_type {
            return product_type;
        }
        if self.food_product_data.is_some() || self.food.has_food_markers() {
            ProductType::Food
        } else if self.beverage_product_data.is_some() {
            ProductType::Beverage
        } else if self.natural_product_data.is_some() {
            ProductType::Natural
        } else if self.healthy_product_data.is_some() {
            ProductType::Healthy
        } else if self.packaging_product_data.is_some() {
            ProductType::Packaging
        } else {
            ProductType::Other
        }
    }
}
