use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::WorkoutError;

/// The closed set of supported activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityType {
    Running,
    SportsWalking,
    Swimming,
}

impl ActivityType {
    pub const ALL: [ActivityType; 3] = [
        ActivityType::Running,
        ActivityType::SportsWalking,
        ActivityType::Swimming,
    ];

    /// Short sensor code selecting this activity.
    pub fn code(self) -> &'static str {
        match self {
            ActivityType::Running => "RUN",
            ActivityType::SportsWalking => "WLK",
            ActivityType::Swimming => "SWM",
        }
    }

    /// Display name used in rendered summaries.
    pub fn label(self) -> &'static str {
        match self {
            ActivityType::Running => "Running",
            ActivityType::SportsWalking => "SportsWalking",
            ActivityType::Swimming => "Swimming",
        }
    }

    /// Positional parameter names, in the order sensors report them.
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            ActivityType::Running => &["action_count", "duration_hours", "weight_kg"],
            ActivityType::SportsWalking => {
                &["action_count", "duration_hours", "weight_kg", "height_cm"]
            }
            ActivityType::Swimming => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_lap_count",
            ],
        }
    }

    pub fn parameter_count(self) -> usize {
        self.parameter_names().len()
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityType {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .into_iter()
            .find(|activity| activity.code() == code)
            .ok_or_else(|| WorkoutError::UnknownActivityCode(code.to_string()))
    }
}

/// A single raw reading as delivered by a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SensorValue {
    Integer(i64),
    Float(f64),
}

impl SensorValue {
    pub fn as_f64(self) -> f64 {
        match self {
            SensorValue::Integer(v) => v as f64,
            SensorValue::Float(v) => v,
        }
    }
}

impl From<i64> for SensorValue {
    fn from(v: i64) -> Self {
        SensorValue::Integer(v)
    }
}

impl From<i32> for SensorValue {
    fn from(v: i32) -> Self {
        SensorValue::Integer(v.into())
    }
}

impl From<u32> for SensorValue {
    fn from(v: u32) -> Self {
        SensorValue::Integer(v.into())
    }
}

impl From<f64> for SensorValue {
    fn from(v: f64) -> Self {
        SensorValue::Float(v)
    }
}

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorValue::Integer(v) => write!(f, "{v}"),
            SensorValue::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Readings shared by every activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readings {
    /// Steps or strokes.
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub readings: Readings,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub readings: Readings,
    pub height_cm: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub readings: Readings,
    pub pool_length_m: u64,
    pub pool_lap_count: u64,
}

/// A fully constructed workout of one of the supported activities.
///
/// Only the dispatcher produces validated workouts; there is no
/// deserialization path that bypasses it.
///
/// ```compile_fail
/// let json = r#"{"activity":"running","readings":{"action_count":1,"duration_hours":0.0,"weight_kg":75.0}}"#;
/// let _ = serde_json::from_str::<workouts::Workout>(json);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn activity_type(&self) -> ActivityType {
        match self {
            Workout::Running(_) => ActivityType::Running,
            Workout::SportsWalking(_) => ActivityType::SportsWalking,
            Workout::Swimming(_) => ActivityType::Swimming,
        }
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}
