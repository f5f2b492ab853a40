// src/lib.rs
// validator-rank - weighted scoring and selection of validators

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod rank;
pub mod report;
pub mod sample;
pub mod score;
pub mod validator;

pub use error::{RankError, Result};
pub use rank::{ScoredValidator, rank_all, select_best};
pub use score::{ScoreBreakdown, score};
pub use validator::{ValidatorRecord, parse_records};
