//! Command-line interface for the parser.
//!
//! All environment lookups (`FILE_PATH`, `OUTPUT_PATH`, `DEBUG_PRINT`)
//! happen here; the core parser only ever sees the document string.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{default_output_path, DEBUG_PRINT_ENV, FILE_PATH_ENV, OUTPUT_PATH_ENV};
use crate::error::{ParserError, Result};
use crate::json::save_json;
use crate::render::debug_plan;
use crate::splitting::parse_plan;

/// Bildungsplan Parser - Convert the flattened KV-EFZ competency framework text to JSON.
#[derive(Parser)]
#[command(name = "bildungsplan-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a plain-text Bildungsplan to structured JSON.
    Convert {
        /// Input text file (falls back to the FILE_PATH environment variable)
        input: Option<PathBuf>,

        /// Output JSON file (default: input path with a .json extension,
        /// or the OUTPUT_PATH environment variable)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the parsed plan as a human-readable outline
        /// (also enabled by DEBUG_PRINT=true)
        #[arg(short, long)]
        debug: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            debug,
        } => convert_command(input, output, debug),
    }
}

/// Execute the convert command.
fn convert_command(input: Option<PathBuf>, output: Option<PathBuf>, debug: bool) -> Result<()> {
    let input_path = input
        .or_else(|| env::var(FILE_PATH_ENV).ok().map(PathBuf::from))
        .ok_or_else(|| {
            ParserError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("No input file given and {FILE_PATH_ENV} is not set"),
            ))
        })?;

    let output_path = output
        .or_else(|| env::var(OUTPUT_PATH_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(|| default_output_path(&input_path));

    let debug = debug
        || env::var(DEBUG_PRINT_ENV)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

    let text = fs::read_to_string(&input_path)?;
    println!(
        "{} {}",
        style("Read text file from").bold(),
        style(input_path.display()).cyan()
    );

    let plan = parse_plan(&text)?;

    println!(
        "Parsed {} areas with a total of {} sections and {} competencies.",
        style(plan.area_count()).green(),
        style(plan.section_count()).green(),
        style(plan.competency_count()).green()
    );

    let written = save_json(&plan, &output_path)?;
    println!(
        "{} {}",
        style("Wrote parsed plan to").bold(),
        style(written.display()).cyan()
    );

    if debug {
        debug_plan(&plan);
    }

    Ok(())
}
