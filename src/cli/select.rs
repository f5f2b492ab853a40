// src/cli/select.rs
// `select` command: print the best validator

use super::{InputArgs, load_validators, resolve_input};
use anyhow::Result;
use std::io::Write;
use tracing::info;
use validator_rank::config::{EnvConfig, RankConfig};
use validator_rank::{report, select_best};

/// Select the highest-scoring validator and write it to `out`
pub fn run_select<W: Write>(
    args: &InputArgs,
    env: &EnvConfig,
    file: &RankConfig,
    out: &mut W,
) -> Result<()> {
    let source = resolve_input(args, env, file);
    let validators = load_validators(&source)?;
    let best = select_best(&validators)?;

    info!(address = %best.address(), score = best.total(), "Auto-selected validator");

    if args.json || env.json {
        writeln!(out, "{}", report::selection_json(&best)?)?;
    } else {
        writeln!(out, "{}", report::selection_line(&best))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &InputArgs) -> Result<String> {
        let mut out = Vec::new();
        run_select(args, &EnvConfig::default(), &RankConfig::default(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_select_sample_text() {
        let output = run(&InputArgs::default()).unwrap();
        assert!(output.starts_with("Auto-Selected Validator: 0xValidator1 with Score: 90.50"));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_select_sample_json() {
        let args = InputArgs {
            json: true,
            ..Default::default()
        };
        let value: serde_json::Value = serde_json::from_str(&run(&args).unwrap()).unwrap();
        assert_eq!(value["address"], "0xValidator1");
    }

    #[test]
    fn test_select_json_from_env() {
        let env = EnvConfig {
            json: true,
            ..Default::default()
        };
        let mut out = Vec::new();
        run_select(&InputArgs::default(), &env, &RankConfig::default(), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().trim_start().starts_with('{'));
    }

    #[test]
    fn test_select_empty_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        let args = InputArgs {
            input: Some(file.path().to_path_buf()),
            json: false,
        };
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("invalid input"));
    }
}
