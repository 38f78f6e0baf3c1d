//! tagnet configuration loading from `.tagnetrc.toml`.
//!
//! Configuration is optional. When present in the working directory it
//! supplies defaults for the export flags; command-line flags always win.
//!
//! # Example Configuration
//!
//! ```toml
//! [export]
//! format = "cytoscape"
//! type = "mentions"
//! output = "mentions.net"
//!
//! [output]
//! color = false
//! ```

use serde::Deserialize;
use std::path::Path;
use tagnet_core::{ExportFormat, Relation};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = ".tagnetrc.toml";

/// Root configuration structure loaded from `.tagnetrc.toml`.
///
/// All sections are optional and will use defaults if not specified.
#[derive(Debug, Deserialize, Default)]
pub struct TagnetConfig {
    /// Defaults for the export flags.
    #[serde(default)]
    pub export: ExportSettings,

    /// Terminal output preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Export defaults, overridden by `--format`, `--type` and `--output`.
#[derive(Debug, Deserialize, Default)]
pub struct ExportSettings {
    /// Valid values: `cytoscape`, `gephi`
    #[serde(default)]
    pub format: Option<String>,

    /// Valid values: `hashtags`, `mentions`, `bipartite`, `attributes`
    #[serde(default, rename = "type")]
    pub relation: Option<String>,

    /// Output file path.
    #[serde(default)]
    pub output: Option<String>,
}

/// Terminal output preferences.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Whether to use colored output.
    ///
    /// Defaults to auto-detection when unset.
    #[serde(default)]
    pub color: Option<bool>,
}

impl TagnetConfig {
    /// Load configuration from `.tagnetrc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Configured export format, if set and valid.
    pub fn export_format(&self) -> Option<ExportFormat> {
        parse_setting("export.format", self.export.format.as_deref())
    }

    /// Configured relation, if set and valid.
    pub fn relation(&self) -> Option<Relation> {
        parse_setting("export.type", self.export.relation.as_deref())
    }

    /// Configured output path, if set.
    pub fn output_path(&self) -> Option<&str> {
        self.export.output.as_deref()
    }

    /// Returns the configured value, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }
}

/// Parse an optional setting, warning about and ignoring invalid values.
fn parse_setting<T>(name: &str, value: Option<&str>) -> Option<T>
where
    T: std::str::FromStr<Err = String>,
{
    match value?.parse() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!("Ignoring {} in {}: {}", name, CONFIG_FILE, e);
            None
        }
    }
}
