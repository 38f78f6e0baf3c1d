//! Shared constants for the tagnet CLI.

/// Output file used when neither `--output` nor the config file names one.
pub const DEFAULT_OUTPUT: &str = "tweets.net";
