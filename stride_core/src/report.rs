//! Human-readable reports.
//!
//! Reports hold already-validated values, so rendering never fails.
//! Both types also serialize to JSON for machine consumers.

use serde::Serialize;
use std::fmt;

/// Summary of a day's walking
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DailyStepsReport {
    pub steps: u64,
    pub distance_km: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for DailyStepsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Steps: {}.", self.steps)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        write!(f, "Calories burned: {:.2} kcal.", self.calories_kcal)
    }
}

/// Summary of a single training session
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TrainingReport {
    /// Activity label exactly as the user supplied it
    pub activity: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Activity: {}", self.activity)?;
        writeln!(f, "Duration: {:.2} h.", self.duration_hours)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Speed: {:.2} km/h", self.speed_kmh)?;
        write!(f, "Calories burned: {:.2} kcal.", self.calories_kcal)
    }
}
