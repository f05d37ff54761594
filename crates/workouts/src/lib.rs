//! Workout summaries from raw fitness-sensor readings.
//!
//! A sensor package is an activity code plus a flat list of readings. The
//! dispatcher turns it into a [`Workout`], whose [`WorkoutMetrics`] derive
//! distance, mean speed and calories; the summary module renders the result.
//!
//! ```rust
//! use workouts::{build_workout, summarize, SensorValue};
//!
//! let params: Vec<SensorValue> = [15000_i64, 1, 75].into_iter().map(SensorValue::from).collect();
//! let workout = build_workout("RUN", &params)?;
//! assert!(summarize(&workout).ends_with("Потрачено ккал: 797.805."));
//! # Ok::<(), workouts::WorkoutError>(())
//! ```

pub mod dispatcher;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod summary;

pub use dispatcher::{build_activity, build_workout};
pub use errors::WorkoutError;
pub use metrics::WorkoutMetrics;
pub use models::{
    ActivityType, Readings, Running, SensorValue, SportsWalking, Swimming, Workout,
};
pub use summary::{WorkoutSummary, render, summarize};
