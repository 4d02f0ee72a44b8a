//! CLI tool for generating Parquet fixture files.

mod error;

use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use parquet_fixgen_core::fileset::{self, Pattern};
use snafu::ResultExt;

use crate::error::{CliResult, GenerateSnafu};

fn parse_pattern(s: &str) -> Result<Pattern, String> {
    match s {
        "1" => Ok(Pattern::Users),
        "2" => Ok(Pattern::Inventory),
        "3" => Ok(Pattern::DateTimes),
        other => Err(format!("pattern must be 1, 2, or 3 (got '{other}')")),
    }
}

fn pattern_id(pattern: Pattern) -> u8 {
    match pattern {
        Pattern::Users => 1,
        Pattern::Inventory => 2,
        Pattern::DateTimes => 3,
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "pqfixgen",
    about = "Generate synthetic Parquet fixture files at several row-count scales"
)]
struct Cli {
    /// Fixture pattern: 1 (user records), 2 (product inventory), 3 (date/time matrix)
    #[arg(value_parser = parse_pattern)]
    pattern: Pattern,

    /// Base directory; files land in a pattern-specific subdirectory beneath it
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let mut rng = rand::thread_rng();
    fileset::run_pattern(&cli.out_dir, cli.pattern, &mut rng, Utc::now()).context(GenerateSnafu {
        pattern: pattern_id(cli.pattern),
    })?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
