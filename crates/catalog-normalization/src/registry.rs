//! Variant adapter trait and registry.
//!
//! The [`VariantAdapter`] trait converts the category-specific part of a form
//! to and from a canonical [`VariantBlock`]. Food has its own adapter; every
//! other category goes through [`GenericAdapter`], which simply carries the
//! nested block of the active type.
//!
//! # Example
//!
//! ```
//! use catalog_model::ProductType;
//! use catalog_normalization::registry::default_registry;
//!
//! let adapter = default_registry().get(ProductType::Food);
//! assert_eq!(adapter.product_type(), Some(ProductType::Food));
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use catalog_model::{ProductType, VariantBlock};
use tracing::debug;

use crate::food::FoodAdapter;
use crate::form::ProductForm;

/// Category-specific half of the form ⇄ canonical conversion.
pub trait VariantAdapter: Send + Sync {
    /// The product type this adapter is registered for; `None` for the fallback.
    fn product_type(&self) -> Option<ProductType>;

    /// Returns a human-readable description of the adapter.
    fn description(&self) -> &'static str {
        "Variant adapter"
    }

    /// Builds the canonical block for `product_type` from a form.
    ///
    /// Returns `None` when the form carries no attributes for that type.
    fn block_from_form(&self, form: &ProductForm, product_type: ProductType)
    -> Option<VariantBlock>;

    /// Writes a canonical block back into the form fields an edit screen reads.
    fn block_into_form(&self, block: &VariantBlock, form: &mut ProductForm);
}

/// Registry of variant adapters indexed by product type.
///
/// Lookups for unregistered types return the fallback adapter.
pub struct AdapterRegistry {
    adapters: HashMap<ProductType, Box<dyn VariantAdapter>>,
    fallback: Box<dyn VariantAdapter>,
}

impl AdapterRegistry {
    pub fn new(fallback: Box<dyn VariantAdapter>) -> Self {
        Self {
            adapters: HashMap::new(),
            fallback,
        }
    }

    /// Registers an adapter, replacing any previous one for the same type.
    /// Adapters without a product type are ignored.
    pub fn register(&mut self, adapter: Box<dyn VariantAdapter>) {
        if let Some(product_type) = adapter.product_type() {
            debug!(%product_type, adapter = adapter.description(), "registered variant adapter");
            self.adapters.insert(product_type, adapter);
        }
    }

    pub fn get(&self, product_type: ProductType) -> &dyn VariantAdapter {
        self.adapters
            .get(&product_type)
            .map(|adapter| adapter.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }

    /// Number of specialised adapters (excluding the fallback).
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

/// Carries the nested `<type>ProductData` block of the active type unchanged
/// apart from list normalization. Never fabricates a block.
pub struct GenericAdapter;

impl VariantAdapter for GenericAdapter {
    fn product_type(&self) -> Option<ProductType> {
        None
    }

    fn description(&self) -> &'static str {
        "Nested attribute block passthrough"
    }

    fn block_from_form(
        &self,
        form: &ProductForm,
        product_type: ProductType,
    ) -> Option<VariantBlock> {
        let block = match product_type {
            ProductType::Food => form.food_product_data.clone().map(VariantBlock::Food),
            ProductType::Beverage => form.beverage_product_data.clone().map(VariantBlock::Beverage),
            ProductType::Natural => form.natural_product_data.clone().map(VariantBlock::Natural),
            ProductType::Healthy => form.healthy_product_data.clone().map(VariantBlock::Healthy),
            ProductType::Packaging => {
                form.packaging_product_data.clone().map(VariantBlock::Packaging)
            }
            ProductType::Other => form.other_product_data.clone().map(VariantBlock::Other),
        };
        if block.is_none() {
            debug!(%product_type, "form carries no attribute block for its product type");
        }
        block.map(VariantBlock::normalized)
    }

    fn block_into_form(&self, block: &VariantBlock, form: &mut ProductForm) {
        match block.clone() {
            VariantBlock::Food(attrs) => form.food_product_data = Some(attrs),
            VariantBlock::Beverage(attrs) => form.beverage_product_data = Some(attrs),
            VariantBlock::Natural(attrs) => form.natural_product_data = Some(attrs),
            VariantBlock::Healthy(attrs) => form.healthy_product_data = Some(attrs),
            VariantBlock::Packaging(attrs) => form.packaging_product_data = Some(attrs),
            VariantBlock::Other(attrs) => form.other_product_data = Some(attrs),
        }
    }
}

static DEFAULT_REGISTRY: OnceLock<AdapterRegistry> = OnceLock::new();

/// Registry with the Food adapter registered and [`GenericAdapter`] as fallback.
pub fn default_registry() -> &'static AdapterRegistry {
    DEFAULT_REGISTRY.get_or_init(|| {
        let mut registry = AdapterRegistry::new(Box::new(GenericAdapter));
        registry.register(Box::new(FoodAdapter));
        registry
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_types_use_fallback() {
        let registry = default_registry();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(ProductType::Beverage).product_type(), None);
        assert_eq!(
            registry.get(ProductType::Food).product_type(),
            Some(ProductType::Food)
        );
    }

    #[test]
    fn registry_without_specialisations_is_empty() {
        let mut registry = AdapterRegistry::new(Box::new(GenericAdapter));
        assert!(registry.is_empty());

        registry.register(Box::new(GenericAdapter));
        assert!(registry.is_empty());

        registry.register(Box::new(FoodAdapter));
        assert!(!registry.is_empty());
        assert_eq!(
            registry.get(ProductType::Other).description(),
            GenericAdapter.description()
        );
        assert_ne!(
            registry.get(ProductType::Food).description(),
            registry.get(ProductType::Other).description()
        );
    }

    #[test]
    fn generic_adapter_does_not_fabricate() {
        let form = ProductForm::default();
        assert!(
            GenericAdapter
                .block_from_form(&form, ProductType::Packaging)
                .is_none()
        );
    }
}
