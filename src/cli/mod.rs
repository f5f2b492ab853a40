// src/cli/mod.rs
// CLI definition and shared input resolution

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use validator_rank::config::{EnvConfig, RankConfig};
use validator_rank::{ValidatorRecord, parse_records, sample};

pub mod rank;
pub mod select;

pub use rank::run_rank;
pub use select::run_select;

#[derive(Parser)]
#[command(name = "validator-rank")]
#[command(about = "Score validators on uptime, reputation and performance and pick the best")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the single highest-scoring validator (default)
    Select {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print every validator, best first
    Rank {
        #[command(flatten)]
        input: InputArgs,

        /// Only show the first N entries
        #[arg(short, long)]
        top: Option<usize>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// JSON file holding an array of validator records (default: built-in sample)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Where the validator set comes from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    File(PathBuf),
    Sample,
}

/// Pick the input source: flag, then environment, then config file, then sample
pub fn resolve_input(args: &InputArgs, env: &EnvConfig, file: &RankConfig) -> InputSource {
    args.input
        .clone()
        .or_else(|| env.input.clone())
        .or_else(|| file.input.path.clone())
        .map(InputSource::File)
        .unwrap_or(InputSource::Sample)
}

/// Load the validator set for a resolved source
pub fn load_validators(source: &InputSource) -> Result<Vec<ValidatorRecord>> {
    match source {
        InputSource::File(path) => read_validator_file(path),
        InputSource::Sample => {
            debug!("No input file given, using built-in sample validators");
            Ok(sample::validators())
        }
    }
}

fn read_validator_file(path: &Path) -> Result<Vec<ValidatorRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let records =
        parse_records(&contents).with_context(|| format!("in {}", path.display()))?;
    info!(path = %path.display(), count = records.len(), "Loaded validators");
    Ok(records)
}
