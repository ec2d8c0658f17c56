//! CLI argument parsing for curio
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use curio_core::format::OutputFormat;

/// Curio - personalized article recommendation CLI
#[derive(Parser, Debug)]
#[command(name = "curio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "CURIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "CURIO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Produce a recommendation batch from a seed/candidate JSON file
    Recommend(RecommendArgs),
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Input JSON file with "seeds" and "candidates" ("-" for stdin)
    #[arg(long, short, default_value = "-")]
    pub input: String,

    /// Total recommendation slots (overrides config)
    #[arg(long, short)]
    pub budget: Option<usize>,

    /// Weight for the content similarity component (overrides config)
    #[arg(long)]
    pub content_weight: Option<f64>,

    /// Weight for the tag overlap component (overrides config)
    #[arg(long)]
    pub tag_weight: Option<f64>,

    /// Let seeds with leftover candidates absorb quota another seed could not fill
    #[arg(long)]
    pub backfill: bool,
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
