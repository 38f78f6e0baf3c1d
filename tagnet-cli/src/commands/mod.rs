//! Command implementations for the tagnet CLI
//!
//! Each command module provides a `run` function that executes the command logic.

pub mod export;
