//! The creation shape sent when a product is first submitted.

use catalog_model::{Product, ProductDocument};
use serde::Serialize;

/// A product document with every server-assigned field removed.
///
/// Only [`to_creation`] builds one, so a value of this type never carries an
/// `_id`, legacy `id`, `sku`, creation/update timestamp or production counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CreationShape(ProductDocument);

impl CreationShape {
    pub fn as_document(&self) -> &ProductDocument {
        &self.0
    }

    pub fn into_document(self) -> ProductDocument {
        self.0
    }
}

/// Canonical → creation. Keeps both names of every alias pair.
pub fn to_creation(product: &Product) -> CreationShape {
    let mut doc = ProductDocument::from(product.clone());
    doc.server_id = None;
    doc.legacy_id = None;
    doc.sku = None;
    doc.created_at = None;
    doc.updated_at = None;
    doc.production_status = None;
    doc.last_produced_at = None;
    doc.units_produced = None;
    CreationShape(doc)
}
