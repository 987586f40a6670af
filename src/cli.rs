//! CLI argument parsing for perf-hotspot

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "perf-hotspot")]
#[command(version)]
#[command(about = "Annotate the hottest functions in a perf.data file", long_about = None)]
pub struct Cli {
    /// Path to the perf.data file
    #[arg(short, long, value_name = "PATH", default_value = "perf.data")]
    pub input: PathBuf,

    /// Number of top functions to analyze
    #[arg(short = 'n', long = "top", value_name = "COUNT", default_value = "5")]
    pub top: usize,

    /// Directory to save annotation files into (created if missing)
    #[arg(short, long, value_name = "PATH", default_value = "perf_analysis")]
    pub output: PathBuf,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}
