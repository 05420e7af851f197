//! Core domain types for step-based activity metrics.
//!
//! This module defines the fundamental types used throughout the system:
//! - Activity kinds and the label lookup table
//! - Parsed activity records
//! - The person profile supplied with each call
//! - Computed metrics

use chrono::Duration;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Activity Types
// ============================================================================

/// Type of training activity
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Walking,
    Running,
    Unknown,
}

/// Recognized activity spellings, keyed by their lowercase form
static ACTIVITY_LABELS: Lazy<HashMap<&'static str, ActivityKind>> = Lazy::new(|| {
    HashMap::from([
        ("ходьба", ActivityKind::Walking),
        ("walking", ActivityKind::Walking),
        ("бег", ActivityKind::Running),
        ("running", ActivityKind::Running),
    ])
});

impl ActivityKind {
    /// Resolve a user-supplied label, ignoring case
    ///
    /// Unrecognized labels map to `ActivityKind::Unknown`; callers decide
    /// whether that is an error.
    pub fn from_label(label: &str) -> Self {
        ACTIVITY_LABELS
            .get(label.to_lowercase().as_str())
            .copied()
            .unwrap_or(ActivityKind::Unknown)
    }
}

// ============================================================================
// Record and Profile Types
// ============================================================================

/// A single parsed activity record
///
/// `activity` is `None` for daily-steps records and holds the trimmed label
/// verbatim for training records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityRecord {
    pub steps: u64,
    pub activity: Option<String>,
    pub duration: Duration,
}

/// Physical parameters of the person performing the activity
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PersonProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in meters
    pub height_m: f64,
}

impl PersonProfile {
    pub fn new(weight_kg: f64, height_m: f64) -> Self {
        Self {
            weight_kg,
            height_m,
        }
    }
}

// ============================================================================
// Metric Types
// ============================================================================

/// Metrics derived from one activity record
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct MetricsResult {
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_resolve_both_spellings() {
        assert_eq!(ActivityKind::from_label("Ходьба"), ActivityKind::Walking);
        assert_eq!(ActivityKind::from_label("walking"), ActivityKind::Walking);
        assert_eq!(ActivityKind::from_label("Бег"), ActivityKind::Running);
        assert_eq!(ActivityKind::from_label("Running"), ActivityKind::Running);
    }

    #[test]
    fn test_labels_ignore_case() {
        assert_eq!(ActivityKind::from_label("БЕГ"), ActivityKind::Running);
        assert_eq!(ActivityKind::from_label("WaLkInG"), ActivityKind::Walking);
    }

    #[test]
    fn test_unrecognized_label_is_unknown() {
        assert_eq!(ActivityKind::from_label("swimming"), ActivityKind::Unknown);
        assert_eq!(ActivityKind::from_label(""), ActivityKind::Unknown);
        // Labels are not trimmed here; the parser does that
        assert_eq!(ActivityKind::from_label(" бег"), ActivityKind::Unknown);
    }
}
