//! CLI module
//!
//! Command-line interface for rendering navigation strips.
//!
//! # Commands
//!
//! - `render` - Render the strip for a state file
//! - `defaults` - Show the built-in anchor texts and tooltips
//! - `validate` - Check a state file

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;

#[cfg(test)]
mod tests;
