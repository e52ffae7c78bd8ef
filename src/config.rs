//! Game configuration with explicit, documented defaults.
//!
//! Partial configurations resolve field by field: use the provided
//! value or fall back to the default. No generic merge machinery.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Default number of columns.
pub const DEFAULT_WIDTH: usize = 3;
/// Default number of rows.
pub const DEFAULT_HEIGHT: usize = 3;

/// Board dimensions for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of columns. Defaults to 3.
    width: usize,
    /// Number of rows. Defaults to 3.
    height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Creates a configuration with explicit dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Resolves a partial configuration: provided value or default,
    /// per field.
    pub fn merge(partial: PartialConfig) -> Self {
        let defaults = Self::default();
        Self {
            width: partial.width.unwrap_or(defaults.width),
            height: partial.height.unwrap_or(defaults.height),
        }
    }

    /// Checks that both dimensions are positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Optional overrides for [`GameConfig`]; unset fields fall back to
/// the defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PartialConfig {
    /// Number of columns, if overridden.
    pub width: Option<usize>,
    /// Number of rows, if overridden.
    pub height: Option<usize>,
}

/// Invalid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Width and height must both be positive.
    #[display("board dimensions must be positive, got {width}x{height}")]
    ZeroDimension {
        /// Configured number of columns.
        width: usize,
        /// Configured number of rows.
        height: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_three_by_three() {
        let config = GameConfig::default();
        assert_eq!(*config.width(), 3);
        assert_eq!(*config.height(), 3);
    }

    #[test]
    fn test_merge_uses_provided_values() {
        let config = GameConfig::merge(PartialConfig {
            width: Some(5),
            height: None,
        });
        assert_eq!(*config.width(), 5);
        assert_eq!(*config.height(), DEFAULT_HEIGHT);
    }

    #[test]
    fn test_merge_of_empty_partial_is_default() {
        assert_eq!(GameConfig::merge(PartialConfig::default()), GameConfig::default());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let config = GameConfig::new(0, 3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroDimension { width: 0, height: 3 })
        ));
    }

    #[test]
    fn test_partial_config_deserializes_missing_fields() {
        let partial: PartialConfig = serde_json::from_str(r#"{"width": 4}"#).unwrap();
        assert_eq!(partial.width, Some(4));
        assert_eq!(partial.height, None);
    }
}
