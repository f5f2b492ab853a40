// src/score.rs
// Weighted linear score over uptime, reputation and performance

use crate::validator::ValidatorRecord;
use serde::Serialize;

/// Weight applied to uptime
pub const UPTIME_WEIGHT: f64 = 0.4;
/// Weight applied to reputation
pub const REPUTATION_WEIGHT: f64 = 0.3;
/// Weight applied to performance
pub const PERFORMANCE_WEIGHT: f64 = 0.3;

/// Per-metric weighted contributions and their sum
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub uptime: f64,
    pub reputation: f64,
    pub performance: f64,
    pub total: f64,
}

/// Score a single record: `0.4*uptime + 0.3*reputation + 0.3*performance`
pub fn score(record: &ValidatorRecord) -> ScoreBreakdown {
    let uptime = record.uptime * UPTIME_WEIGHT;
    let reputation = record.reputation * REPUTATION_WEIGHT;
    let performance = record.performance * PERFORMANCE_WEIGHT;

    ScoreBreakdown {
        uptime,
        reputation,
        performance,
        total: uptime + reputation + performance,
    }
}
