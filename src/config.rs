//! Fleet configuration
//!
//! Loaded from a TOML file. Every field has a default, so an empty file is a
//! valid configuration.

use crate::bounds::EdgeMode;
use crate::error::Result;
use crate::render::RenderConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FleetConfig {
    /// What happens when a rover steps off the grid (`clamp` or `wrap`)
    pub edge_policy: EdgeMode,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl FleetConfig {
    /// Load configuration from a TOML file
    ///
    /// # Example
    /// ```no_run
    /// use rover_fleet::FleetConfig;
    ///
    /// let config = FleetConfig::from_file("fleet.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        contents.parse()
    }
}

impl FromStr for FleetConfig {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: FleetConfig = "".parse().unwrap();
        assert_eq!(config, FleetConfig::default());
        assert_eq!(config.edge_policy, EdgeMode::Clamp);
        assert_eq!(config.render.empty_cell, "~");
    }

    #[test]
    fn overrides_are_applied() {
        let config: FleetConfig = r#"
            edge_policy = "wrap"

            [render]
            empty_cell = "."
            separator = " "
            max_cells = 64

            [logging]
            level = "debug"
        "#
        .parse()
        .unwrap();
        assert_eq!(config.edge_policy, EdgeMode::Wrap);
        assert_eq!(config.render.empty_cell, ".");
        assert_eq!(config.render.separator, " ");
        assert_eq!(config.render.max_cells, 64);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!("edge_policy = \"bounce\"".parse::<FleetConfig>().is_err());
    }
}
