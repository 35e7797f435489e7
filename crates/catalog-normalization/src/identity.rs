//! Owner attachment and create-vs-update routing.

use catalog_model::{CatalogError, ObjectId, Product, Result, require_identifier};
use tracing::debug;

use crate::creation::{CreationShape, to_creation};

/// Returns a copy of `record` owned by `owner_id`.
///
/// Fails with [`CatalogError::InvalidIdentifier`] when `owner_id` is not a
/// 24-character hex id; `record` itself is never modified, so the caller can
/// retry with a corrected id.
pub fn attach_owner(record: &Product, owner_id: &str) -> Result<Product> {
    let owner = require_identifier(Some(owner_id))?;
    let mut owned = record.clone();
    owned.owner = Some(owner);
    Ok(owned)
}

/// The server id of a record that is meant to be updated.
///
/// Fails with [`CatalogError::InvalidIdentifier`] for a record that was never
/// persisted (no `_id`, possibly only a legacy numeric `id`).
pub fn require_persisted(product: &Product) -> Result<ObjectId> {
    product.server_id.ok_or_else(|| CatalogError::InvalidIdentifier {
        value: product
            .legacy_id
            .map(|id| id.get().to_string())
            .unwrap_or_default(),
    })
}

/// What to send for a product: a creation shape or a full update.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionPlan {
    Create(CreationShape),
    Update { id: ObjectId, product: Product },
}

/// Update when the record has a valid server id, create otherwise.
pub fn plan_submission(product: &Product) -> SubmissionPlan {
    match require_persisted(product) {
        Ok(id) => SubmissionPlan::Update {
            id,
            product: product.clone(),
        },
        Err(error) => {
            debug!(%error, "record is not persisted; submitting as new");
            SubmissionPlan::Create(to_creation(product))
        }
    }
}
