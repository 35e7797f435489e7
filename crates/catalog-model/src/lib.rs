//! Catalog data model.
//!
//! - **validation**: shape-only checks (identifier, email, URL, emptiness)
//! - **ids**: server and legacy record identifiers
//! - **variant**: per-category attribute blocks
//! - **product**: the canonical product record
//! - **document**: the API document shape and its alias reconciliation
//! - **alias**: ordered read-fallback rules for aliased fields

pub mod alias;
pub mod document;
pub mod enums;
pub mod error;
pub mod ids;
pub mod issue;
pub mod lenient;
pub mod options;
pub mod product;
pub mod validation;
pub mod variant;

pub use document::ProductDocument;
pub use enums::ProductType;
pub use error::{CatalogError, Result};
pub use ids::{LegacyId, ObjectId};
pub use issue::{IssueSeverity, ValidationIssue};
pub use options::ValidationOptions;
pub use product::{LeadTime, Product, ProductionTracking};
pub use validation::{is_email, is_empty, is_identifier, is_url, require_identifier, Blank};
pub use variant::{
    BeverageAttributes, FoodAttributes, HealthyAttributes, NaturalAttributes, OtherAttributes,
    PackagingAttributes, VariantBlock,
};
