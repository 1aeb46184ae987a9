//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Where the transformed markup is written unless `--output` is given.
pub const DEFAULT_OUTPUT: &str =
    "C:/project/travel-record-frontend/.gemini-clipboard/transformed_svg.txt";

/// Where failures are recorded unless `--error-log` is given.
pub const DEFAULT_ERROR_LOG: &str =
    "C:/project/travel-record-frontend/.gemini-clipboard/transform_svg_error.log";

/// Rewrite an SVG region map into markup embeddable as a React component
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Read markup from this file instead of stdin
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output file path (overwritten on success)
    #[arg(short, long, default_value = DEFAULT_OUTPUT, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Error log path (written on failure)
    #[arg(short, long, default_value = DEFAULT_ERROR_LOG, value_hint = clap::ValueHint::FilePath)]
    pub error_log: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
