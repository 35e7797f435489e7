//! The API document shape: what goes over the wire and what comes back.
//!
//! Every field is optional and every alias name has its own slot, so a
//! partial server response parses into the same type as a full record.
//! Food attributes appear twice: flattened at the top level and nested under
//! `foodProductData` for readers of the older nested layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::alias::{resolve_manufacturer, resolve_primary};
use crate::enums::ProductType;
use crate::ids::{LegacyId, ObjectId};
use crate::lenient;
use crate::product::{LeadTime, Product, ProductionTracking};
use crate::variant::{
    BeverageAttributes, FoodAttributes, HealthyAttributes, NaturalAttributes, OtherAttributes,
    PackagingAttributes, VariantBlock,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    #[serde(rename = "_id", default, deserialize_with = "lenient::object_id", skip_serializing_if = "Option::is_none")]
    pub server_id: Option<ObjectId>,
    #[serde(rename = "id", default, deserialize_with = "lenient::legacy_id", skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<LegacyId>,
    #[serde(default, deserialize_with = "lenient::object_id", skip_serializing_if = "Option::is_none")]
    pub owner: Option<ObjectId>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::count", skip_serializing_if = "Option::is_none")]
    pub minimum_order_quantity: Option<u32>,
    #[serde(default, deserialize_with = "lenient::count", skip_serializing_if = "Option::is_none")]
    pub daily_capacity: Option<u32>,
    #[serde(default, deserialize_with = "lenient::count", skip_serializing_if = "Option::is_none")]
    pub current_available: Option<u32>,
    #[serde(default, deserialize_with = "lenient::count", skip_serializing_if = "Option::is_none")]
    pub count_in_stock: Option<u32>,
    #[serde(default, deserialize_with = "lenient::count", skip_serializing_if = "Option::is_none")]
    pub lead_time: Option<u32>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub lead_time_unit: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub sustainable: Option<bool>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::product_type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub manufacturer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub production_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub last_produced_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::big_count", skip_serializing_if = "Option::is_none")]
    pub units_produced: Option<u64>,

    /// Food attributes at the top level (the primary Food layout).
    #[serde(flatten)]
    pub food_fields: FoodAttributes,
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

fn overlay<T: Clone>(target: &mut Option<T>, patch: &Option<T>) {
    if patch.is_some() {
        target.clone_from(patch);
    }
}

fn overlay_block<T: Clone>(target: &mut Option<T>, patch: &Option<T>, merge: impl Fn(&mut T, &T)) {
    let Some(incoming) = patch else {
        return;
    };
    match target {
        Some(existing) => merge(existing, incoming),
        None => *target = Some(incoming.clone()),
    }
}

impl ProductDocument {
    /// The explicit discriminator, or the type of the first nested block present.
    pub fn effective_product_type(&self) -> ProductType {
        if let Some(product_type) = self.product_type {
            return product_type;
        }
        let has_food = self.food_product_data.is_some() || self.food_fields.has_food_markers();
        let inferred = if has_food {
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
        };
        debug!(%inferred, "productType absent; inferred from attribute blocks");
        inferred
    }

    /// Food attributes with the flattened fields taking precedence over the nested block.
    pub fn resolved_food(&self) -> Option<FoodAttributes> {
        match (&self.food_product_data, self.food_fields.is_unset()) {
            (None, true) => None,
            (nested, _) => {
                let mut block = nested.clone().unwrap_or_default();
                block.overlay(&self.food_fields);
                Some(block)
            }
        }
    }

    fn take_variant(&mut self, product_type: ProductType) -> Option<VariantBlock> {
        let block = match product_type {
            ProductType::Food => Some(VariantBlock::Food(self.resolved_food().unwrap_or_default())),
            ProductType::Beverage => self.beverage_product_data.take().map(VariantBlock::Beverage),
            ProductType::Natural => self.natural_product_data.take().map(VariantBlock::Natural),
            ProductType::Healthy => self.healthy_product_data.take().map(VariantBlock::Healthy),
            ProductType::Packaging => {
                self.packaging_product_data.take().map(VariantBlock::Packaging)
            }
            ProductType::Other => self.other_product_data.take().map(VariantBlock::Other),
        };
        let inactive = self.inactive_block_keys(product_type);
        if !inactive.is_empty() {
            debug!(%product_type, ?inactive, "dropping attribute blocks of inactive product types");
        }
        block.map(VariantBlock::normalized)
    }

    fn inactive_block_keys(&self, active: ProductType) -> Vec<&'static str> {
        let present = [
            (ProductType::Food, self.food_product_data.is_some()),
            (ProductType::Beverage, self.beverage_product_data.is_some()),
            (ProductType::Natural, self.natural_product_data.is_some()),
            (ProductType::Healthy, self.healthy_product_data.is_some()),
            (ProductType::Packaging, self.packaging_product_data.is_some()),
            (ProductType::Other, self.other_product_data.is_some()),
        ];
        present
            .into_iter()
            .filter(|(kind, present)| *present && *kind != active)
            .map(|(kind, _)| kind.block_key())
            .collect()
    }

    /// Resolves every alias group and mirrors the winner into all of its names.
    ///
    /// Applied to a partial response before [`ProductDocument::overlay`], so that a
    /// response carrying only a deprecated name still updates the whole group.
    #[must_use]
    pub fn reconciled(&self) -> ProductDocument {
        let mut doc = self.clone();

        let manufacturer = resolve_manufacturer(
            doc.manufacturer.as_deref(),
            doc.manufacturer_name.as_deref(),
            doc.brand.as_deref(),
        )
        .map(str::to_string);
        doc.manufacturer.clone_from(&manufacturer);
        doc.manufacturer_name.clone_from(&manufacturer);
        doc.brand = manufacturer;

        let price = resolve_primary("pricePerUnit", doc.price_per_unit, doc.price);
        doc.price_per_unit = price;
        doc.price = price;

        let stock = resolve_primary("currentAvailable", doc.current_available, doc.count_in_stock);
        doc.current_available = stock;
        doc.count_in_stock = stock;

        if let Some(food) = doc.resolved_food() {
            doc.food_fields = food.clone();
            doc.food_product_data = Some(food);
        }
        doc
    }

    /// Copies every field `patch` carries onto `self`; absent fields are left alone.
    ///
    /// Nested attribute blocks merge field by field.
    pub fn overlay(&mut self, patch: &ProductDocument) {
        overlay(&mut self.server_id, &patch.server_id);
        overlay(&mut self.legacy_id, &patch.legacy_id);
        overlay(&mut self.owner, &patch.owner);
        overlay(&mut self.name, &patch.name);
        overlay(&mut self.category, &patch.category);
        overlay(&mut self.description, &patch.description);
        overlay(&mut self.price_per_unit, &patch.price_per_unit);
        overlay(&mut self.price, &patch.price);
        overlay(&mut self.unit_type, &patch.unit_type);
        overlay(&mut self.minimum_order_quantity, &patch.minimum_order_quantity);
        overlay(&mut self.daily_capacity, &patch.daily_capacity);
        overlay(&mut self.current_available, &patch.current_available);
        overlay(&mut self.count_in_stock, &patch.count_in_stock);
        overlay(&mut self.lead_time, &patch.lead_time);
        overlay(&mut self.lead_time_unit, &patch.lead_time_unit);
        overlay(&mut self.sustainable, &patch.sustainable);
        overlay(&mut self.image, &patch.image);
        overlay(&mut self.images, &patch.images);
        overlay(&mut self.product_type, &patch.product_type);
        overlay(&mut self.manufacturer, &patch.manufacturer);
        overlay(&mut self.manufacturer_name, &patch.manufacturer_name);
        overlay(&mut self.brand, &patch.brand);
        overlay(&mut self.sku, &patch.sku);
        overlay(&mut self.created_at, &patch.created_at);
        overlay(&mut self.updated_at, &patch.updated_at);
        overlay(&mut self.production_status, &patch.production_status);
        overlay(&mut self.last_produced_at, &patch.last_produced_at);
        overlay(&mut self.units_produced, &patch.units_produced);

        self.food_fields.overlay(&patch.food_fields);
        overlay_block(&mut self.food_product_data, &patch.food_product_data, FoodAttributes::overlay);
        overlay_block(
            &mut self.beverage_product_data,
            &patch.beverage_product_data,
            BeverageAttributes::overlay,
        );
        overlay_block(
            &mut self.natural_product_data,
            &patch.natural_product_data,
            NaturalAttributes::overlay,
        );
        overlay_block(
            &mut self.healthy_product_data,
            &patch.healthy_product_data,
            HealthyAttributes::overlay,
        );
        overlay_block(
            &mut self.packaging_product_data,
            &patch.packaging_product_data,
            PackagingAttributes::overlay,
        );
        overlay_block(
            &mut self.other_product_data,
            &patch.other_product_data,
            OtherAttributes::overlay,
        );
        trace!("overlaid partial product document");
    }
}

impl From<ProductDocument> for Product {
    /// Applies the read-fallback rule of every alias group.
    fn from(mut doc: ProductDocument) -> Self {
        let product_type = doc.effective_product_type();
        let variant = doc.take_variant(product_type);

        let manufacturer = resolve_manufacturer(
            doc.manufacturer.as_deref(),
            doc.manufacturer_name.as_deref(),
            doc.brand.as_deref(),
        )
        .map(str::to_string);
        let price_per_unit = resolve_primary("pricePerUnit", doc.price_per_unit, doc.price);
        let current_available =
            resolve_primary("currentAvailable", doc.current_available, doc.count_in_stock);

        let production = ProductionTracking {
            status: doc.production_status,
            last_produced_at: doc.last_produced_at,
            units_produced: doc.units_produced,
        };

        Product {
            server_id: doc.server_id,
            legacy_id: doc.legacy_id,
            owner: doc.owner,
            name: doc.name.unwrap_or_default(),
            category: doc.category.unwrap_or_default(),
            description: doc.description.unwrap_or_default(),
            price_per_unit: price_per_unit.unwrap_or_default(),
            unit_type: doc.unit_type.unwrap_or_default(),
            minimum_order_quantity: doc.minimum_order_quantity.unwrap_or_default(),
            daily_capacity: doc.daily_capacity.unwrap_or_default(),
            current_available: current_available.unwrap_or_default(),
            lead_time: LeadTime {
                value: doc.lead_time.unwrap_or_default(),
                unit: doc.lead_time_unit.unwrap_or_default(),
            },
            sustainable: doc.sustainable.unwrap_or_default(),
            image: doc.image.unwrap_or_default(),
            images: doc.images.unwrap_or_default(),
            product_type,
            manufacturer,
            sku: doc.sku,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
            production: (!production.is_empty()).then_some(production),
            variant,
        }
    }
}

impl From<Product> for ProductDocument {
    /// Mirrors every alias group into all of its names.
    fn from(product: Product) -> Self {
        let production = product.production.unwrap_or_default();
        let mut doc = ProductDocument {
            server_id: product.server_id,
            legacy_id: product.legacy_id,
            owner: product.owner,
            name: Some(product.name),
            category: Some(product.category),
            description: Some(product.description),
            price_per_unit: Some(product.price_per_unit),
            price: Some(product.price_per_unit),
            unit_type: Some(product.unit_type),
            minimum_order_quantity: Some(product.minimum_order_quantity),
            daily_capacity: Some(product.daily_capacity),
            current_available: Some(product.current_available),
            count_in_stock: Some(product.current_available),
            lead_time: Some(product.lead_time.value),
            lead_time_unit: Some(product.lead_time.unit),
            sustainable: Some(product.sustainable),
            image: Some(product.image),
            images: Some(product.images),
            product_type: Some(product.product_type),
            manufacturer: product.manufacturer.clone(),
            manufacturer_name: product.manufacturer.clone(),
            brand: product.manufacturer,
            sku: product.sku,
            created_at: product.created_at,
            updated_at: product.updated_at,
            production_status: production.status,
            last_produced_at: production.last_produced_at,
            units_produced: production.units_produced,
            ..ProductDocument::default()
        };
        match product.variant {
            Some(VariantBlock::Food(block)) => {
                doc.food_fields = block.clone();
                doc.food_product_data = Some(block);
            }
            Some(VariantBlock::Beverage(block)) => doc.beverage_product_data = Some(block),
            Some(VariantBlock::Natural(block)) => doc.natural_product_data = Some(block),
            Some(VariantBlock::Healthy(block)) => doc.healthy_product_data = Some(block),
            Some(VariantBlock::Packaging(block)) => doc.packaging_product_data = Some(block),
            Some(VariantBlock::Other(block)) => doc.other_product_data = Some(block),
            None => {}
        }
        doc
    }
}
