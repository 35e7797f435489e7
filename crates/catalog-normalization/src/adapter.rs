//! Form ⇄ canonical conversion and variant-block merging.
//!
//! All functions are pure and tolerant: missing optional input stays absent,
//! nothing here returns an error.

use catalog_model::alias::{resolve_manufacturer, resolve_primary};
use catalog_model::{LeadTime, Product};
use tracing::debug;

use crate::form::ProductForm;
use crate::registry::{AdapterRegistry, default_registry};

/// Form → canonical using the default adapter registry.
///
/// Every manufacturer alias resolves to the first non-blank of `manufacturer`,
/// `manufacturerName`, `brand`; the price and stock pairs prefer
/// `pricePerUnit` and `currentAvailable`.
pub fn product_from_form(form: &ProductForm) -> Product {
    product_from_form_with(default_registry(), form)
}

pub fn product_from_form_with(registry: &AdapterRegistry, form: &ProductForm) -> Product {
    let product_type = form.effective_product_type();
    let variant = registry
        .get(product_type)
        .block_from_form(form, product_type);

    let manufacturer = resolve_manufacturer(
        Some(form.manufacturer.as_str()),
        form.manufacturer_name.as_deref(),
        form.brand.as_deref(),
    )
    .map(str::to_string);

    Product {
        server_id: form.server_id,
        legacy_id: form.legacy_id,
        owner: form.owner,
        name: form.name.clone(),
        category: form.category.clone(),
        description: form.description.clone(),
        price_per_unit: resolve_primary("pricePerUnit", form.price_per_unit, form.price)
            .unwrap_or_default(),
        unit_type: form.unit_type.clone(),
        minimum_order_quantity: form.minimum_order_quantity.unwrap_or_default(),
        daily_capacity: form.daily_capacity.unwrap_or_default(),
        current_available: resolve_primary(
            "currentAvailable",
            form.current_available,
            form.count_in_stock,
        )
        .unwrap_or_default(),
        lead_time: LeadTime::new(form.lead_time.unwrap_or_default(), form.lead_time_unit.clone()),
        sustainable: form.sustainable,
        image: form.image.clone(),
        images: form.images.clone(),
        product_type,
        manufacturer,
        sku: form.sku.clone(),
        created_at: None,
        updated_at: None,
        production: None,
        variant,
    }
}

/// Canonical → form, for pre-populating an edit screen.
///
/// Every required input gets a defined value and every alias slot is filled
/// from the resolved canonical value. A Food record without a block comes back
/// from the form with an empty normalized Food block.
pub fn form_from_product(product: &Product) -> ProductForm {
    form_from_product_with(default_registry(), product)
}

pub fn form_from_product_with(registry: &AdapterRegistry, product: &Product) -> ProductForm {
    let mut form = ProductForm {
        server_id: product.server_id,
        legacy_id: product.legacy_id,
        owner: product.owner,
        name: product.name.clone(),
        category: product.category.clone(),
        description: product.description.clone(),
        price_per_unit: Some(product.price_per_unit),
        price: Some(product.price()),
        unit_type: product.unit_type.clone(),
        minimum_order_quantity: Some(product.minimum_order_quantity),
        daily_capacity: Some(product.daily_capacity),
        current_available: Some(product.current_available),
        count_in_stock: Some(product.count_in_stock()),
        lead_time: Some(product.lead_time.value),
        lead_time_unit: product.lead_time.unit.clone(),
        sustainable: product.sustainable,
        image: product.image.clone(),
        images: product.images.clone(),
        product_type: Some(product.product_type),
        manufacturer: product.manufacturer.clone().unwrap_or_default(),
        manufacturer_name: product.manufacturer_name().map(str::to_string),
        brand: product.brand().map(str::to_string),
        sku: product.sku.clone(),
        ..ProductForm::default()
    };
    if let Some(block) = &product.variant {
        registry
            .get(block.product_type())
            .block_into_form(block, &mut form);
    }
    form
}

/// Copies the variant block present on `source` onto a copy of `target`.
///
/// Every other field of `target` is kept. The discriminator follows the
/// copied block so the record never carries a block of an inactive type.
/// When `source` has no block, `target` is returned unchanged.
pub fn merge_variant_blocks(source: &Product, target: &Product) -> Product {
    let mut merged = target.clone();
    if let Some(block) = &source.variant {
        if merged.product_type != block.product_type() {
            debug!(
                from = %merged.product_type,
                to = %block.product_type(),
                "merged block switches the product type"
            );
        }
        merged.set_variant(block.clone());
    }
    merged
}
