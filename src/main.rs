// src/main.rs
// validator-rank - weighted validator scoring and selection

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, InputArgs, run_rank, run_select};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use validator_rank::config::{EnvConfig, RankConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env = EnvConfig::from_env();
    let file = RankConfig::load();

    // --verbose wins, then environment, then config file
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        env.log_level
            .or_else(|| file.log_level())
            .unwrap_or(Level::WARN)
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None => run_select(&InputArgs::default(), &env, &file, &mut out)?,
        Some(Commands::Select { input }) => run_select(&input, &env, &file, &mut out)?,
        Some(Commands::Rank { input, top }) => run_rank(&input, top, &env, &file, &mut out)?,
    }

    Ok(())
}
