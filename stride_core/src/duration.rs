//! Duration literals such as `1h30m` or `45s`.
//!
//! A literal is one or more `<digits><unit>` pairs where the unit is `h`,
//! `m` or `s`. Pairs may repeat in any order and are summed. The bare
//! literal `0` is accepted as zero.

use crate::{Error, Result};
use chrono::Duration;

const SECONDS_IN_MINUTE: i64 = 60;
const SECONDS_IN_HOUR: i64 = 3600;

/// Parse a duration literal into a non-negative `Duration`
pub fn parse_duration_literal(literal: &str) -> Result<Duration> {
    if literal.is_empty() {
        return Err(Error::duration_parse(literal, "empty duration"));
    }
    if literal == "0" {
        return Ok(Duration::zero());
    }
    if literal.starts_with(['-', '+']) {
        return Err(Error::duration_parse(
            literal,
            "signed durations are not supported",
        ));
    }
    if literal.contains('.') {
        return Err(Error::duration_parse(
            literal,
            "fractional quantities are not supported",
        ));
    }

    let mut total_seconds: i64 = 0;
    let mut rest = literal;

    while !rest.is_empty() {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end == 0 {
            return Err(Error::duration_parse(
                literal,
                format!("expected a number before {:?}", rest),
            ));
        }
        let (digits, tail) = rest.split_at(digits_end);

        let unit_end = tail.find(|c: char| c.is_ascii_digit()).unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);

        let unit_seconds = match unit {
            "h" => SECONDS_IN_HOUR,
            "m" => SECONDS_IN_MINUTE,
            "s" => 1,
            "" => {
                return Err(Error::duration_parse(
                    literal,
                    format!("missing unit after {}", digits),
                ))
            }
            other => {
                return Err(Error::duration_parse(
                    literal,
                    format!("unknown unit {:?}", other),
                ))
            }
        };

        let overflow = || Error::duration_parse(literal, "duration is too large");
        let quantity: i64 = digits.parse().map_err(|_| overflow())?;
        total_seconds = quantity
            .checked_mul(unit_seconds)
            .and_then(|seconds| total_seconds.checked_add(seconds))
            .ok_or_else(overflow)?;

        rest = next;
    }

    Duration::try_seconds(total_seconds)
        .ok_or_else(|| Error::duration_parse(literal, "duration is too large"))
}

/// Render a duration in canonical literal form, e.g. `1h30m`
///
/// Zero components are omitted and a zero duration renders as `0s`.
/// Sub-second precision is dropped and negative durations render as `0s`.
pub fn format_duration_literal(duration: &Duration) -> String {
    let total = duration.num_seconds().max(0);
    if total == 0 {
        return "0s".to_string();
    }

    let hours = total / SECONDS_IN_HOUR;
    let minutes = (total % SECONDS_IN_HOUR) / SECONDS_IN_MINUTE;
    let seconds = total % SECONDS_IN_MINUTE;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    if seconds > 0 {
        out.push_str(&format!("{}s", seconds));
    }
    out
}

/// Duration as fractional hours
pub fn as_hours(duration: &Duration) -> f64 {
    duration.num_milliseconds() as f64 / (SECONDS_IN_HOUR * 1000) as f64
}

/// Duration as fractional minutes
pub fn as_minutes(duration: &Duration) -> f64 {
    duration.num_milliseconds() as f64 / (SECONDS_IN_MINUTE * 1000) as f64
}
