// src/rank.rs
// Selection and ranking of validators by score

use crate::error::{RankError, Result};
use crate::score::{ScoreBreakdown, score};
use crate::validator::ValidatorRecord;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// A record together with its score and its index in the input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredValidator<'a> {
    pub position: usize,
    #[serde(flatten)]
    pub record: &'a ValidatorRecord,
    pub score: ScoreBreakdown,
}

impl ScoredValidator<'_> {
    pub fn address(&self) -> &str {
        &self.record.address
    }

    pub fn total(&self) -> f64 {
        self.score.total
    }
}

/// Return the highest-scoring validator.
///
/// Single pass. When several records share the maximum score the one
/// appearing first in `validators` wins.
pub fn select_best(validators: &[ValidatorRecord]) -> Result<ScoredValidator<'_>> {
    let mut scored = scored_iter(validators);
    let mut best = scored
        .next()
        .ok_or_else(|| RankError::invalid("cannot select from an empty validator set"))?;

    for candidate in scored {
        if candidate.score.total > best.score.total {
            best = candidate;
        }
    }

    debug!(
        address = %best.record.address,
        score = best.score.total,
        candidates = validators.len(),
        "Selected validator"
    );
    Ok(best)
}

/// Score every validator and sort by descending total.
///
/// The sort is stable, so equal scores keep their input order and the
/// head of the ranking is always the record `select_best` returns.
pub fn rank_all(validators: &[ValidatorRecord]) -> Result<Vec<ScoredValidator<'_>>> {
    if validators.is_empty() {
        return Err(RankError::invalid("cannot rank an empty validator set"));
    }

    let mut ranked: Vec<_> = scored_iter(validators).collect();
    // -0.0 and 0.0 must compare equal here, as they do in select_best
    ranked.sort_by(|a, b| {
        b.score
            .total
            .partial_cmp(&a.score.total)
            .unwrap_or(Ordering::Equal)
    });

    debug!(count = ranked.len(), "Ranked validators");
    Ok(ranked)
}

fn scored_iter(validators: &[ValidatorRecord]) -> impl Iterator<Item = ScoredValidator<'_>> {
    validators
        .iter()
        .enumerate()
        .map(|(position, record)| ScoredValidator {
            position,
            record,
            score: score(record),
        })
}
