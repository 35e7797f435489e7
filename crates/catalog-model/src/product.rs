//! The canonical product record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::ProductDocument;
use crate::enums::ProductType;
use crate::ids::{LegacyId, ObjectId};
use crate::variant::{FoodAttributes, VariantBlock};

/// How long an order takes to ship, e.g. 3 "days".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadTime {
    pub value: u32,
    pub unit: String,
}

impl LeadTime {
    pub fn new(value: u32, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// Server-maintained production counters. Never sent on creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionTracking {
    pub status: Option<String>,
    pub last_produced_at: Option<DateTime<Utc>>,
    pub units_produced: Option<u64>,
}

impl ProductionTracking {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.last_produced_at.is_none() && self.units_produced.is_none()
    }
}

/// The single product representation used everywhere outside the edit forms.
///
/// Each alias group is stored once; the deprecated names are derived on
/// serialization (see [`crate::alias`]), so both names of a pair can never
/// disagree. At most one [`VariantBlock`] is carried and, when present, its
/// kind matches `product_type`. Food records coming out of the adapters always
/// carry their Food block, empty lists included, since the form exposes the
/// Food fields flat and cannot express their absence.
///
/// Serializes and deserializes through [`ProductDocument`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProductDocument", into = "ProductDocument")]
pub struct Product {
    /// `_id`; present once the server has stored the record.
    pub server_id: Option<ObjectId>,
    /// Numeric client-side `id` from older records.
    pub legacy_id: Option<LegacyId>,
    /// Owning manufacturer account.
    pub owner: Option<ObjectId>,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Also exposed as `price`.
    pub price_per_unit: f64,
    pub unit_type: String,
    pub minimum_order_quantity: u32,
    pub daily_capacity: u32,
    /// Also exposed as `countInStock`.
    pub current_available: u32,
    pub lead_time: LeadTime,
    pub sustainable: bool,
    /// Primary image reference (URL or storage path).
    pub image: String,
    pub images: Vec<String>,
    pub product_type: ProductType,
    /// Also exposed as `manufacturerName` and `brand`.
    pub manufacturer: Option<String>,
    pub sku: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub production: Option<ProductionTracking>,
    pub variant: Option<VariantBlock>,
}

impl Product {
    /// Deprecated alias of [`Product::price_per_unit`].
    pub fn price(&self) -> f64 {
        self.price_per_unit
    }

    /// Deprecated alias of [`Product::current_available`].
    pub fn count_in_stock(&self) -> u32 {
        self.current_available
    }

    /// Deprecated alias of [`Product::manufacturer`].
    pub fn manufacturer_name(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    /// Deprecated alias of [`Product::manufacturer`].
    pub fn brand(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    /// True when the record carries a server-assigned identifier.
    pub fn is_persisted(&self) -> bool {
        self.server_id.is_some()
    }

    pub fn food(&self) -> Option<&FoodAttributes> {
        self.variant.as_ref().and_then(VariantBlock::as_food)
    }

    /// Replaces the active block and keeps the discriminator in step with it.
    pub fn set_variant(&mut self, block: VariantBlock) {
        self.product_type = block.product_type();
        self.variant = Some(block.normalized());
    }
}
