//! Tool configuration loaded from TOML.
//!
//! ```toml
//! [validation]
//! require_image = false
//! allowed_lead_time_units = ["days", "weeks"]
//! max_lead_time = 90
//!
//! [output]
//! pretty = true
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use catalog_model::ValidationOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub validation: ValidationOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Indent JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl CatalogConfig {
    /// Parse a configuration file. Missing sections keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// The file at `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: CatalogConfig = toml::from_str("").unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert!(config.output.pretty);
        assert!(config.validation.require_image);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: CatalogConfig = toml::from_str(
            "[validation]\nrequire_image = false\nmax_lead_time = 30\n\n[output]\npretty = false\n",
        )
        .unwrap();
        assert!(!config.validation.require_image);
        assert!(config.validation.require_food_ingredients);
        assert_eq!(config.validation.max_lead_time, Some(30));
        assert!(config.validation.allows_lead_time_unit("weeks"));
        assert!(!config.output.pretty);
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(toml::from_str::<CatalogConfig>("[server]\nurl = \"x\"\n").is_err());
    }
}
