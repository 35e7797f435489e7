//! Configuration options for submission validation.

use serde::{Deserialize, Serialize};

/// Lead-time units accepted when no explicit list is configured.
pub const DEFAULT_LEAD_TIME_UNITS: [&str; 4] = ["hours", "days", "weeks", "months"];

/// Options controlling the completeness validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Treat a missing primary image as an error.
    pub require_image: bool,

    /// Require the attribute block of the active product type.
    /// Default: false ("Other" products frequently carry none).
    pub require_variant_block: bool,

    /// Require at least one ingredient on Food products.
    pub require_food_ingredients: bool,

    /// Accepted lead-time units, compared case-insensitively.
    pub allowed_lead_time_units: Vec<String>,

    /// Upper bound for the lead-time value, if any.
    pub max_lead_time: Option<u32>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            require_image: true,
            require_variant_block: false,
            require_food_ingredients: true,
            allowed_lead_time_units: DEFAULT_LEAD_TIME_UNITS
                .iter()
                .map(|unit| (*unit).to_string())
                .collect(),
            max_lead_time: None,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every requirement flag switched on; units and the lead-time bound keep
    /// their defaults.
    pub fn strict() -> Self {
        Self {
            require_image: true,
            require_variant_block: true,
            require_food_ingredients: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_require_image(mut self, enable: bool) -> Self {
        self.require_image = enable;
        self
    }

    #[must_use]
    pub fn with_max_lead_time(mut self, max: Option<u32>) -> Self {
        self.max_lead_time = max;
        self
    }

    pub fn allows_lead_time_unit(&self, unit: &str) -> bool {
        let unit = unit.trim();
        self.allowed_lead_time_units
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_enables_every_requirement() {
        let strict = ValidationOptions::strict();
        assert!(strict.require_image);
        assert!(strict.require_variant_block);
        assert!(strict.require_food_ingredients);
        assert_eq!(
            strict.allowed_lead_time_units,
            ValidationOptions::default().allowed_lead_time_units
        );
        assert_eq!(strict.max_lead_time, None);
    }

    #[test]
    fn strict_ignores_relaxed_defaults() {
        let relaxed = ValidationOptions::default().with_require_image(false);
        assert!(!relaxed.require_image);
        assert!(!relaxed.require_variant_block);
        assert!(ValidationOptions::strict().require_image);
    }
}
