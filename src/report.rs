// src/report.rs
// Text and JSON rendering of selection and ranking results

use crate::error::Result;
use crate::rank::ScoredValidator;

/// One-line summary of the selected validator: each raw metric and its weighted part
pub fn selection_line(best: &ScoredValidator<'_>) -> String {
    let r = best.record;
    let s = &best.score;
    format!(
        "Auto-Selected Validator: {} with Score: {:.2} \
         (uptime={} -> {:.2}, reputation={} -> {:.2}, performance={} -> {:.2})",
        r.address,
        s.total,
        r.uptime,
        s.uptime,
        r.reputation,
        s.reputation,
        r.performance,
        s.performance
    )
}

/// Numbered ranking, one validator per line, best first
pub fn ranking_table(ranked: &[ScoredValidator<'_>]) -> String {
    let width = ranked
        .iter()
        .map(|s| s.address().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (i, s) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {:<width$}  {:>6.2}  (uptime {:.1} + reputation {:.1} + performance {:.1})\n",
            i + 1,
            s.address(),
            s.score.total,
            s.score.uptime,
            s.score.reputation,
            s.score.performance,
            width = width
        ));
    }
    out
}

/// Pretty JSON for a single scored validator
pub fn selection_json(best: &ScoredValidator<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(best)?)
}

/// Pretty JSON array for a ranking
pub fn ranking_json(ranked: &[ScoredValidator<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(ranked)?)
}
