use thiserror::Error;

use crate::issue::ValidationIssue;

/// Errors surfaced by the catalog core.
///
/// Adapters never fail on missing optional data; only identifier checks and
/// the explicit completeness validator produce errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// A 24-character hexadecimal identifier was required but absent or malformed.
    #[error("invalid identifier: {value:?} is not a 24-character hex id")]
    InvalidIdentifier { value: String },

    /// A product is missing data required for submission.
    #[error("validation failed with {} blocking issue(s)", .issues.len())]
    ValidationFailure { issues: Vec<ValidationIssue> },
}

impl CatalogError {
    pub(crate) fn invalid_identifier(value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
