#![forbid(unsafe_code)]

//! Core domain model and computations for the Stride step tracker.
//!
//! This crate provides:
//! - Domain types (activity records, person profile, metrics)
//! - Record and duration-literal parsing
//! - Distance, speed and calorie formulas
//! - Text and JSON reports
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod duration;
pub mod parser;
pub mod metrics;
pub mod calories;
pub mod report;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use metrics::StrideModel;
pub use report::{DailyStepsReport, TrainingReport};
pub use engine::{daily_steps_report, training_report};
