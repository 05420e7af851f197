//! Physical metrics derived from a step count.
//!
//! Distance comes from multiplying the step count by an estimated stride
//! length; speed divides that distance by the elapsed time.

use crate::calories::spent_calories;
use crate::duration::as_hours;
use crate::{ActivityKind, ActivityRecord, MetricsResult, PersonProfile, Result};
use chrono::Duration;

/// Stride length used for daily step counts, in meters
pub const DAILY_STEP_LENGTH_M: f64 = 0.65;

/// Fraction of body height used as stride length during training
pub const TRAINING_STEP_LENGTH_COEFFICIENT: f64 = 0.414;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// How a single step length is estimated
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrideModel {
    /// Constant stride, independent of height
    Fixed { meters: f64 },
    /// Stride proportional to height
    HeightRatio { coefficient: f64 },
}

impl StrideModel {
    /// Stride used for the daily-steps summary
    pub const fn daily() -> Self {
        StrideModel::Fixed {
            meters: DAILY_STEP_LENGTH_M,
        }
    }

    /// Stride used for training sessions
    pub const fn training() -> Self {
        StrideModel::HeightRatio {
            coefficient: TRAINING_STEP_LENGTH_COEFFICIENT,
        }
    }

    /// Length of one step in meters for a person of the given height
    pub fn stride_length_m(&self, height_m: f64) -> f64 {
        match *self {
            StrideModel::Fixed { meters } => meters,
            StrideModel::HeightRatio { coefficient } => height_m * coefficient,
        }
    }
}

/// Distance covered in kilometers
pub fn distance_km(steps: u64, height_m: f64, stride: StrideModel) -> f64 {
    let distance_m = steps as f64 * stride.stride_length_m(height_m);
    distance_m / M_IN_KM
}

/// Average speed in km/h
///
/// Returns 0 for a zero or negative duration.
pub fn mean_speed_kmh(steps: u64, height_m: f64, duration: &Duration, stride: StrideModel) -> f64 {
    if *duration <= Duration::zero() {
        return 0.0;
    }

    distance_km(steps, height_m, stride) / as_hours(duration)
}

/// Compute distance, speed and calories for a record
pub fn compute_metrics(
    record: &ActivityRecord,
    kind: ActivityKind,
    profile: &PersonProfile,
    stride: StrideModel,
) -> Result<MetricsResult> {
    let label = record.activity.as_deref().unwrap_or_default();
    let calories_kcal = spent_calories(
        kind,
        label,
        record.steps,
        profile,
        &record.duration,
        stride,
    )?;

    let distance_km = distance_km(record.steps, profile.height_m, stride);
    let speed_kmh = mean_speed_kmh(record.steps, profile.height_m, &record.duration, stride);

    tracing::debug!(
        "Computed metrics for {} steps ({:?}): {:.4} km, {:.4} km/h, {:.4} kcal",
        record.steps,
        kind,
        distance_km,
        speed_kmh,
        calories_kcal
    );

    Ok(MetricsResult {
        distance_km,
        speed_kmh,
        calories_kcal,
    })
}
