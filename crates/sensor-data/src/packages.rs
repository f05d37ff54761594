//! Sensor packages: the bundled samples and JSON loading.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use workouts::{SensorValue, Workout, WorkoutError, WorkoutMetrics, build_workout, summarize};

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One reading batch as reported by a sensor: activity code plus positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<SensorValue>,
}

impl SensorPackage {
    pub fn new<V: Into<SensorValue>>(
        workout_type: impl Into<String>,
        data: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds the workout this package describes.
    pub fn build(&self) -> Result<Workout, WorkoutError> {
        build_workout(&self.workout_type, &self.data)
    }
}

/// The three packages shipped with the driver.
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        // Strokes, hours, kg, pool meters, laps.
        SensorPackage::new("SWM", [720_i64, 1, 80, 25, 40]),
        // Steps, hours, kg.
        SensorPackage::new("RUN", [15000_i64, 1, 75]),
        // Steps, hours, kg, cm.
        SensorPackage::new("WLK", [9000_i64, 1, 75, 180]),
    ]
}

/// Loads packages from a JSON array of `{"workout_type": .., "data": [..]}` objects.
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<SensorPackage>, PackageError> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Parses packages from JSON text held in memory.
pub fn parse_packages(json: &str) -> Result<Vec<SensorPackage>, PackageError> {
    Ok(serde_json::from_str(json)?)
}

/// Renders one output line for a workout: the text summary, or the summary as a JSON object.
pub fn summary_line(workout: &Workout, json_output: bool) -> Result<String, serde_json::Error> {
    if json_output {
        serde_json::to_string(&workout.show_summary())
    } else {
        Ok(summarize(workout))
    }
}
