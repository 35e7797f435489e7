use catalog_model::{CatalogError, IssueSeverity, ValidationIssue};
use serde::Serialize;

/// Issues found on one product, in check order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn error_count(&self) -> usize {
        self.count(IssueSeverity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(IssueSeverity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues reported against `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.issues.iter().filter(move |issue| issue.field == field)
    }

    /// `Ok` with the remaining warnings, or the blocking issues as an error.
    pub fn into_result(self) -> Result<Vec<ValidationIssue>, CatalogError> {
        if !self.has_errors() {
            return Ok(self.issues);
        }
        let issues = self
            .issues
            .into_iter()
            .filter(ValidationIssue::is_blocking)
            .collect();
        Err(CatalogError::ValidationFailure { issues })
    }

    fn count(&self, severity: IssueSeverity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}
