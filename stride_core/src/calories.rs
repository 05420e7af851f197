//! Calorie estimation for walking and running.
//!
//! Both formulas are linear in weight, speed and duration:
//!
//! ```text
//! running = weight_kg * speed_kmh * duration_min / 60
//! walking = running * 0.789
//! ```

use crate::duration::as_minutes;
use crate::metrics::{mean_speed_kmh, StrideModel, MIN_IN_H};
use crate::{ActivityKind, Error, PersonProfile, Result};
use chrono::Duration;

/// Energy cost of walking relative to running at the same speed
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.789;

/// Calories burned while running
pub fn running_spent_calories(
    steps: u64,
    profile: &PersonProfile,
    duration: &Duration,
    stride: StrideModel,
) -> Result<f64> {
    validate_inputs(steps, profile, duration)?;

    let speed = mean_speed_kmh(steps, profile.height_m, duration, stride);
    Ok(profile.weight_kg * speed * as_minutes(duration) / MIN_IN_H)
}

/// Calories burned while walking
pub fn walking_spent_calories(
    steps: u64,
    profile: &PersonProfile,
    duration: &Duration,
    stride: StrideModel,
) -> Result<f64> {
    let calories = running_spent_calories(steps, profile, duration, stride)?;
    Ok(calories * WALKING_CALORIES_COEFFICIENT)
}

/// Dispatch to the formula matching `kind`
///
/// `label` is only used to name the activity when `kind` is unknown.
pub fn spent_calories(
    kind: ActivityKind,
    label: &str,
    steps: u64,
    profile: &PersonProfile,
    duration: &Duration,
    stride: StrideModel,
) -> Result<f64> {
    match kind {
        ActivityKind::Running => running_spent_calories(steps, profile, duration, stride),
        ActivityKind::Walking => walking_spent_calories(steps, profile, duration, stride),
        ActivityKind::Unknown => Err(Error::UnknownActivity(label.to_string())),
    }
}

/// Reject zero, negative or NaN inputs before any arithmetic
fn validate_inputs(steps: u64, profile: &PersonProfile, duration: &Duration) -> Result<()> {
    if steps == 0 {
        return Err(Error::ProfileValidation {
            parameter: "step count",
            value: steps.to_string(),
        });
    }
    // Written as !(x > 0) so NaN is rejected too
    if !(profile.weight_kg > 0.0) {
        return Err(Error::ProfileValidation {
            parameter: "weight",
            value: format!("{:.2}", profile.weight_kg),
        });
    }
    if !(profile.height_m > 0.0) {
        return Err(Error::ProfileValidation {
            parameter: "height",
            value: format!("{:.2}", profile.height_m),
        });
    }
    if *duration <= Duration::zero() {
        return Err(Error::ProfileValidation {
            parameter: "duration",
            value: crate::duration::format_duration_literal(duration),
        });
    }
    Ok(())
}
