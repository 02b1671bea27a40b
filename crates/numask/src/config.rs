//! Field configuration loaded from TOML.
//!
//! Applications can declare which of their fields take integers and which take
//! doubles in a configuration file instead of wiring each field in code:
//!
//! ```toml
//! [fields.quantity]
//! mode = "integer"
//!
//! [fields.price]
//! mode = "double"
//! ```
//!
//! ```
//! use numask::config::MaskConfig;
//! use numask::filter::InputMode;
//!
//! let config = MaskConfig::from_toml_str(r#"
//! [fields.quantity]
//! mode = "integer"
//! "#)?;
//! assert_eq!(config.mode_for("quantity"), Some(InputMode::Integer));
//! assert_eq!(config.mode_for("missing"), None);
//! # Ok::<(), numask::Error>(())
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use numask_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::filter::{InputMode, NumericFilter};

/// Settings for one masked field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    /// Kind of number the field accepts.
    pub mode: InputMode,
}

impl FieldConfig {
    /// Create field settings for a mode.
    pub fn new(mode: InputMode) -> Self {
        Self { mode }
    }

    /// The filter these settings describe.
    pub fn filter(&self) -> NumericFilter {
        NumericFilter::new(self.mode)
    }
}

/// Masking configuration for a set of named fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Field settings by field name.
    #[serde(default)]
    pub fields: BTreeMap<String, FieldConfig>,
}

impl MaskConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        tracing::debug!(
            target: targets::CONFIG,
            fields = config.fields.len(),
            "parsed mask configuration"
        );
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|err| Error::config_io(path, err))?;
        Self::from_toml_str(&source)
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Add or replace the settings of a field (builder pattern).
    pub fn with_field(mut self, name: impl Into<String>, mode: InputMode) -> Self {
        self.fields.insert(name.into(), FieldConfig::new(mode));
        self
    }

    /// Get the settings of a field.
    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.get(name)
    }

    /// Get the mode of a field.
    pub fn mode_for(&self, name: &str) -> Option<InputMode> {
        self.field(name).map(|field| field.mode)
    }

    /// Build the filter for a field.
    pub fn filter_for(&self, name: &str) -> Option<NumericFilter> {
        self.field(name).map(FieldConfig::filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::InputFilter;

    const SAMPLE: &str = r#"
[fields.quantity]
mode = "integer"

[fields.price]
mode = "double"
"#;

    #[test]
    fn test_parse() {
        let config = MaskConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.fields.len(), 2);
        assert_eq!(config.mode_for("quantity"), Some(InputMode::Integer));
        assert_eq!(config.mode_for("price"), Some(InputMode::Double));
        assert_eq!(config.mode_for("name"), None);
    }

    #[test]
    fn test_filter_for() {
        let config = MaskConfig::from_toml_str(SAMPLE).unwrap();
        let filter = config.filter_for("quantity").unwrap();
        assert!(filter.should_accept("12"));
        assert!(!filter.should_accept("1.2"));
        assert!(config.filter_for("name").is_none());
    }

    #[test]
    fn test_empty_document() {
        let config = MaskConfig::from_toml_str("").unwrap();
        assert!(config.fields.is_empty());
    }

    #[test]
    fn test_unknown_mode_is_an_error() {
        let result = MaskConfig::from_toml_str("[fields.x]\nmode = \"hex\"\n");
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let result = MaskConfig::from_toml_str("[fields.x]\nmode = \"double\"\nlocale = \"de\"\n");
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = MaskConfig::new()
            .with_field("age", InputMode::Integer)
            .with_field("weight", InputMode::Double);
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("[fields.age]"));
        assert_eq!(MaskConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let result = MaskConfig::load("/nonexistent/numask.toml");
        match result {
            Err(Error::ConfigIo { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/numask.toml"));
            }
            other => panic!("expected ConfigIo, got {other:?}"),
        }
    }
}
