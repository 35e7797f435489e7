//! Product shape adapters.
//!
//! - **form**: the tolerant, UI-facing form shape
//! - **adapter**: form ⇄ canonical conversion and variant-block merging
//! - **registry**: per-category variant adapters (Food specialised, others generic)
//! - **creation**: canonical → creation shape
//! - **sync**: merging partial server responses into a canonical record
//! - **identity**: owner attachment and create-vs-update routing

pub mod adapter;
pub mod creation;
pub mod food;
pub mod form;
pub mod identity;
pub mod registry;
pub mod sync;

pub use adapter::{form_from_product, merge_variant_blocks, product_from_form};
pub use creation::{CreationShape, to_creation};
pub use form::ProductForm;
pub use identity::{SubmissionPlan, attach_owner, plan_submission, require_persisted};
pub use sync::{sync_from_json, sync_from_response};
