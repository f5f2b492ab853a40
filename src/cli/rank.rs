// src/cli/rank.rs
// `rank` command: print the full ranking

use super::{InputArgs, load_validators, resolve_input};
use anyhow::Result;
use std::io::Write;
use tracing::info;
use validator_rank::config::{EnvConfig, RankConfig};
use validator_rank::{rank_all, report};

/// Rank all validators and write them to `out`, optionally truncated to `top`
pub fn run_rank<W: Write>(
    args: &InputArgs,
    top: Option<usize>,
    env: &EnvConfig,
    file: &RankConfig,
    out: &mut W,
) -> Result<()> {
    let source = resolve_input(args, env, file);
    let validators = load_validators(&source)?;
    let mut ranked = rank_all(&validators)?;
    if let Some(n) = top {
        ranked.truncate(n);
    }

    info!(shown = ranked.len(), total = validators.len(), "Ranked validators");

    if args.json || env.json {
        writeln!(out, "{}", report::ranking_json(&ranked)?)?;
    } else {
        write!(out, "{}", report::ranking_table(&ranked))?;
    }
    Ok(())
}
