//! Export formats for relation tables.
//!
//! Only the Cytoscape tab-separated table is implemented. Gephi is accepted
//! on the command line so that requesting it fails loudly instead of
//! silently producing nothing.

pub mod tabular;

use std::fmt;
use std::str::FromStr;

use crate::error::{GraphError, Result};

pub use tabular::{render, KeyColumns};

/// Target format of an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Tab-separated table importable by Cytoscape
    #[default]
    Cytoscape,
    /// Gephi graph file (not implemented)
    Gephi,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cytoscape => "cytoscape",
            Self::Gephi => "gephi",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cytoscape" => Ok(Self::Cytoscape),
            "gephi" => Ok(Self::Gephi),
            _ => Err(format!("Unknown export format: '{}'", s)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fail unless the format has an implementation.
///
/// Call this before loading or writing anything.
pub fn ensure_supported(format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Cytoscape => Ok(()),
        ExportFormat::Gephi => Err(GraphError::UnsupportedFormatError {
            format: format.as_str().to_string(),
        }),
    }
}
