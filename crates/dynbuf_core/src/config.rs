//! # Array Configuration
//!
//! Sizing parameters, loaded once from TOML. Defaults reproduce the
//! documented construction rules, so a missing file or an empty table is
//! always valid.
//!
//! ```toml
//! initial_capacity = 4
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ArrayError, ArrayResult};

/// Configuration for array construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArrayConfig {
    /// Slots allocated by an empty array, and the minimum capacity of an
    /// array built from values.
    ///
    /// Default: 4. Must be at least 1.
    pub initial_capacity: usize,
}

impl ArrayConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

    /// Creates a config with the given initial capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidConfig`] if `initial_capacity` is zero.
    pub fn new(initial_capacity: usize) -> ArrayResult<Self> {
        let config = Self { initial_capacity };
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidConfig`] describing the first bad value.
    pub fn validate(&self) -> ArrayResult<()> {
        if self.initial_capacity == 0 {
            return Err(ArrayError::InvalidConfig(
                "initial_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidConfig`] on malformed TOML, unknown keys
    /// or invalid values.
    pub fn from_toml_str(text: &str) -> ArrayResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| ArrayError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidConfig`] if the file cannot be read or
    /// fails [`ArrayConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ArrayResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ArrayError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity_is_four() {
        assert_eq!(ArrayConfig::default().initial_capacity, 4);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ArrayConfig::from_toml_str("").unwrap();
        assert_eq!(config, ArrayConfig::default());
    }

    #[test]
    fn test_toml_override() {
        let config = ArrayConfig::from_toml_str("initial_capacity = 16").unwrap();
        assert_eq!(config.initial_capacity, 16);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = ArrayConfig::from_toml_str("initial_capacity = 0").unwrap_err();
        assert!(matches!(err, ArrayError::InvalidConfig(_)));
        assert!(ArrayConfig::new(0).is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ArrayConfig::from_toml_str("growth = 3").unwrap_err();
        assert!(matches!(err, ArrayError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ArrayConfig::load("/nonexistent/dynbuf.toml").unwrap_err();
        assert_eq!(err.code(), -6);
    }
}
