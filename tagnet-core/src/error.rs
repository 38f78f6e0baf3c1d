//! Error types for tagnet-core.

use thiserror::Error;

/// Result type alias for tagnet-core operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur while loading a corpus or building and exporting a graph.
///
/// Every variant is terminal for a single invocation: the computation is
/// deterministic, so retrying with the same input yields the same error.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Corpus file is missing or unreadable.
    #[error("Input not found: {path}")]
    InputNotFound {
        /// Path that was read.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Corpus is not well-formed.
    #[error("Parse error: {message}")]
    ParseError {
        /// Description of what was malformed.
        message: String,
    },

    /// A post record lacks a required field.
    #[error("Post {post_id} is missing required field `{field}`")]
    MissingFieldError {
        /// Identifier of the offending post.
        post_id: String,
        /// Name of the absent field.
        field: &'static str,
    },

    /// Requested export format has no implementation.
    #[error("Export format '{format}' is not implemented")]
    UnsupportedFormatError {
        /// Format name as given on the command line.
        format: String,
    },

    /// Attempted to export a table with no entries.
    #[error("Nothing to export: the {relation} table is empty")]
    EmptyMapError {
        /// Which table was empty ("edge" or "attribute").
        relation: &'static str,
    },

    /// Accumulated engagement no longer fits the 64-bit counters.
    #[error("Engagement out of range for {entity}: totals exceed 64-bit counters")]
    EngagementOverflow {
        /// Edge or node whose totals overflowed.
        entity: String,
    },
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::ParseError {
            message: err.to_string(),
        }
    }
}
