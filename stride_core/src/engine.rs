//! Report pipeline: parse, compute, format.
//!
//! - Daily steps use a fixed stride and the walking formula
//! - Training sessions use a height-based stride and the formula matching
//!   the activity label
//!
//! Both entry points return errors to the caller. Whether a failure is
//! shown, logged or suppressed is the caller's decision.

use crate::duration::as_hours;
use crate::metrics::{compute_metrics, StrideModel};
use crate::parser::{parse_daily_steps, parse_training};
use crate::report::{DailyStepsReport, TrainingReport};
use crate::{ActivityKind, PersonProfile, Result};

/// Build the daily-steps report for a record such as `678,0h50m`
pub fn daily_steps_report(raw: &str, profile: &PersonProfile) -> Result<DailyStepsReport> {
    let record = parse_daily_steps(raw)?;
    tracing::debug!("Parsed daily record: {:?}", record);

    let metrics = compute_metrics(&record, ActivityKind::Walking, profile, StrideModel::daily())?;

    Ok(DailyStepsReport {
        steps: record.steps,
        distance_km: metrics.distance_km,
        calories_kcal: metrics.calories_kcal,
    })
}

/// Build the training report for a record such as `3456,Бег,1h30m`
pub fn training_report(raw: &str, profile: &PersonProfile) -> Result<TrainingReport> {
    let record = parse_training(raw)?;
    tracing::debug!("Parsed training record: {:?}", record);

    let activity = record.activity.clone().unwrap_or_default();
    let kind = ActivityKind::from_label(&activity);

    let metrics = compute_metrics(&record, kind, profile, StrideModel::training())?;

    Ok(TrainingReport {
        activity,
        duration_hours: as_hours(&record.duration),
        distance_km: metrics.distance_km,
        speed_kmh: metrics.speed_kmh,
        calories_kcal: metrics.calories_kcal,
    })
}
