// src/validator.rs
// Validator records and validation of raw JSON input

use crate::error::{RankError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Lower bound of the expected metric range
pub const METRIC_MIN: f64 = 0.0;
/// Upper bound of the expected metric range
pub const METRIC_MAX: f64 = 100.0;

/// A validator and the three metrics it is scored on.
///
/// All metrics are expected to lie in `METRIC_MIN..=METRIC_MAX`. Values
/// outside that range are accepted (and logged), non-finite values are not.
/// Construct through `new` or `parse_records` so those checks always run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatorRecord {
    pub address: String,
    pub uptime: f64,
    pub reputation: f64,
    pub performance: f64,
}

impl ValidatorRecord {
    /// Build a record, rejecting an empty address or non-finite metrics
    pub fn new(
        address: impl Into<String>,
        uptime: f64,
        reputation: f64,
        performance: f64,
    ) -> Result<Self> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(RankError::invalid("validator address must not be empty"));
        }
        for (field, value) in [
            ("uptime", uptime),
            ("reputation", reputation),
            ("performance", performance),
        ] {
            if !value.is_finite() {
                return Err(RankError::invalid(format!(
                    "validator {}: `{}` is not a finite number",
                    address, field
                )));
            }
        }

        let record = Self {
            address,
            uptime,
            reputation,
            performance,
        };
        record.warn_out_of_range();
        Ok(record)
    }

    /// The three metrics paired with their field names
    pub fn metrics(&self) -> [(&'static str, f64); 3] {
        [
            ("uptime", self.uptime),
            ("reputation", self.reputation),
            ("performance", self.performance),
        ]
    }

    fn warn_out_of_range(&self) {
        for (field, value) in self.metrics() {
            if !(METRIC_MIN..=METRIC_MAX).contains(&value) {
                warn!(
                    address = %self.address,
                    field,
                    value,
                    "Metric outside expected 0-100 range"
                );
            }
        }
    }
}

/// Parse a JSON array of validator objects.
///
/// Each object needs a string `address` and numeric `uptime`,
/// `reputation` and `performance`. Numbers encoded as strings are
/// rejected. Unknown keys are ignored.
pub fn parse_records(json: &str) -> Result<Vec<ValidatorRecord>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| RankError::invalid(format!("malformed JSON: {}", e)))?;
    records_from_value(&value)
}

/// Validate an already-parsed JSON value into records
pub fn records_from_value(value: &Value) -> Result<Vec<ValidatorRecord>> {
    let items = value
        .as_array()
        .ok_or_else(|| RankError::invalid("expected a JSON array of validator records"))?;

    let records = items
        .iter()
        .enumerate()
        .map(|(index, item)| record_from_value(index, item))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = records.len(), "Parsed validator records");
    Ok(records)
}

fn record_from_value(index: usize, item: &Value) -> Result<ValidatorRecord> {
    let obj = item
        .as_object()
        .ok_or_else(|| RankError::invalid(format!("record {}: expected a JSON object", index)))?;

    let address = match obj.get("address") {
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            return Err(RankError::invalid(format!(
                "record {}: `address` must be a string",
                index
            )));
        }
        None => {
            return Err(RankError::invalid(format!(
                "record {}: missing field `address`",
                index
            )));
        }
    };

    let uptime = numeric_field(obj, index, "uptime")?;
    let reputation = numeric_field(obj, index, "reputation")?;
    let performance = numeric_field(obj, index, "performance")?;

    ValidatorRecord::new(address, uptime, reputation, performance)
        .map_err(|e| match e {
            RankError::InvalidInput(msg) => {
                RankError::InvalidInput(format!("record {}: {}", index, msg))
            }
            other => other,
        })
}

fn numeric_field(obj: &Map<String, Value>, index: usize, field: &str) -> Result<f64> {
    match obj.get(field) {
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            RankError::invalid(format!(
                "record {}: `{}` is not representable as f64",
                index, field
            ))
        }),
        Some(other) => Err(RankError::invalid(format!(
            "record {}: `{}` must be a number, got {}",
            index,
            field,
            json_type_name(other)
        ))),
        None => Err(RankError::invalid(format!(
            "record {}: missing field `{}`",
            index, field
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
