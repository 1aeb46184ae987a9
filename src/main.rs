//! svg-jsx - Rewrite an SVG region map into embeddable React markup.

mod cli;
mod error;
mod logger;
mod pipeline;

use std::process::ExitCode;

use clap::{ColorChoice, Parser};
use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    cli::execute(&cli)
}
