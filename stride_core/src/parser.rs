//! Parsing of raw comma-separated activity records.
//!
//! Two record shapes are supported:
//! - daily steps: `<steps>,<duration>`
//! - training: `<steps>,<activity>,<duration>`

use crate::duration::parse_duration_literal;
use crate::{ActivityRecord, Error, Result};

const DAILY_STEPS_FIELDS: usize = 2;
const TRAINING_FIELDS: usize = 3;

/// Parse a daily-steps record such as `678,0h50m`
pub fn parse_daily_steps(raw: &str) -> Result<ActivityRecord> {
    let fields = split_fields(raw, DAILY_STEPS_FIELDS)?;

    let steps = parse_steps(fields[0])?;
    let duration = parse_duration_literal(fields[1])?;

    Ok(ActivityRecord {
        steps,
        activity: None,
        duration,
    })
}

/// Parse a training record such as `3456,Бег,1h30m`
///
/// The activity label is kept as given; it is resolved later.
pub fn parse_training(raw: &str) -> Result<ActivityRecord> {
    let fields = split_fields(raw, TRAINING_FIELDS)?;

    let steps = parse_steps(fields[0])?;
    let activity = fields[1].to_string();
    let duration = parse_duration_literal(fields[2])?;

    Ok(ActivityRecord {
        steps,
        activity: Some(activity),
        duration,
    })
}

fn split_fields(raw: &str, expected: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    if fields.len() != expected {
        return Err(Error::FieldCount {
            expected,
            actual: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_steps(field: &str) -> Result<u64> {
    let steps: i64 = field
        .parse()
        .map_err(|e: std::num::ParseIntError| Error::step_parse(field, e.to_string()))?;

    if steps <= 0 {
        return Err(Error::step_parse(field, "step count must be positive"));
    }

    Ok(steps as u64)
}
