// src/sample.rs
// Built-in validator set used when no input file is supplied

use crate::validator::ValidatorRecord;

/// The three demonstration validators
pub fn validators() -> Vec<ValidatorRecord> {
    [
        ("0xValidator1", 95.0, 85.0, 90.0),
        ("0xValidator2", 89.0, 80.0, 92.0),
        ("0xValidator3", 97.0, 78.0, 88.0),
    ]
    .into_iter()
    .map(|(address, uptime, reputation, performance)| ValidatorRecord {
        address: address.to_string(),
        uptime,
        reputation,
        performance,
    })
    .collect()
}
