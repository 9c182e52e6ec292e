//! CLI commands and argument parsing

use crate::types::{LogLevel, PaginationMode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pagination strip renderer CLI
#[derive(Parser, Debug)]
#[command(name = "pagination-strip")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pagination state file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub state: Option<PathBuf>,

    /// Inline state JSON
    #[arg(long, global = true)]
    pub state_json: Option<String>,

    /// Render configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "html")]
    pub format: OutputFormat,

    /// Log level
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            self.log_level.unwrap_or_default()
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the navigation strip
    Render {
        /// Current request path; a query string on it is ignored
        #[arg(short, long, default_value = "/")]
        path: String,

        /// Row label mode (normal, increment, decrement or 1/2/3)
        #[arg(long)]
        mode: Option<PaginationMode>,

        /// Fragment identifier appended to every link
        #[arg(long)]
        fragment: Option<String>,

        /// Extra query parameter as KEY=VALUE (repeatable, order is kept)
        #[arg(long = "param", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },

    /// Show default anchor texts and tooltips
    Defaults,

    /// Validate a pagination state
    Validate,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Raw HTML fragment / plain text
    Html,
    /// JSON object
    Json,
}

/// Parse a `KEY=VALUE` pair; the value may be empty
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
