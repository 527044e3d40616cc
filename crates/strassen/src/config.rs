//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use strassen_cli::generator::{DEFAULT_MAX_POWER, DEFAULT_SEED};

/// Multiply matrix pairs with the naive and Strassen algorithms and report
/// exact operation counts.
#[derive(Parser, Debug)]
#[command(name = "strassen", version, about)]
pub struct AppConfig {
    /// Input file of matrix blocks.
    #[arg(required_unless_present_any = ["generate", "completion"])]
    pub input: Option<PathBuf>,

    /// Report file path.
    #[arg(short, long, default_value = "output.txt", env = "STRASSEN_OUTPUT")]
    pub output: PathBuf,

    /// Write a benchmark input file of power-of-two orders to this path.
    #[arg(long, value_name = "PATH")]
    pub generate: Option<PathBuf>,

    /// Largest generated order is 2^max_power.
    #[arg(long, default_value_t = DEFAULT_MAX_POWER, value_parser = clap::value_parser!(u32).range(0..=12))]
    pub max_power: u32,

    /// Seed of the benchmark generator.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Also write per-block counts and timings as JSON.
    #[arg(long, value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Memory limit per block (e.g., "8G", "512M").
    #[arg(long, default_value = "")]
    pub memory_limit: String,

    /// Verbose output (per-algorithm timings).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (no console output).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
