//! Folding server responses back into the canonical record.

use catalog_model::{Product, ProductDocument};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Merges a partial response into `prior` (or an empty record).
///
/// Fields the response carries overwrite the prior values, with every alias
/// group mirrored; fields it omits keep their prior values. Applying the same
/// response twice yields the same record as applying it once.
pub fn sync_from_response(response: &ProductDocument, prior: Option<&Product>) -> Product {
    let mut doc = prior
        .cloned()
        .map(ProductDocument::from)
        .unwrap_or_default();
    let patch = response.reconciled();

    if let (Some(prior), Some(next)) = (prior, patch.product_type)
        && prior.product_type != next
    {
        debug!(from = %prior.product_type, to = %next, "response changes the product type");
    }

    doc.overlay(&patch);
    Product::from(doc)
}

/// Like [`sync_from_response`] for a raw JSON body.
///
/// A body that is not a JSON object carries no fields and leaves `prior` as is.
pub fn sync_from_json(response: &Value, prior: Option<&Product>) -> Product {
    let patch = match ProductDocument::deserialize(response) {
        Ok(patch) => patch,
        Err(error) => {
            warn!(%error, "response body is not a product object; ignoring it");
            ProductDocument::default()
        }
    };
    sync_from_response(&patch, prior)
}
