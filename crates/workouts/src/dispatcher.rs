//! Maps an activity code and a flat list of readings to a workout.

use tracing::debug;

use crate::errors::{Result, WorkoutError};
use crate::models::{
    ActivityType, Readings, Running, SensorValue, SportsWalking, Swimming, Workout,
};

/// Builds the workout selected by `code` from positional sensor readings.
///
/// Parameter order per code:
/// - `RUN`: action count, duration (h), weight (kg)
/// - `WLK`: action count, duration (h), weight (kg), height (cm)
/// - `SWM`: action count, duration (h), weight (kg), pool length (m), pool laps
pub fn build_workout(code: &str, params: &[SensorValue]) -> Result<Workout> {
    let activity = code.parse::<ActivityType>().inspect_err(|e| debug!("{e}"))?;
    build_activity(activity, params).inspect_err(|e| debug!(code, "{e}"))
}

/// Builds a workout for an already resolved activity.
pub fn build_activity(activity: ActivityType, params: &[SensorValue]) -> Result<Workout> {
    let expected = activity.parameter_count();
    if params.len() != expected {
        return Err(WorkoutError::malformed(format!(
            "{activity} expects {expected} values ({}), got {}",
            activity.parameter_names().join(", "),
            params.len()
        )));
    }

    let params = Params::new(activity, params);
    let readings = Readings {
        action_count: params.count(0)?,
        duration_hours: params.positive_float(1)?,
        weight_kg: params.positive_float(2)?,
    };

    let workout = match activity {
        ActivityType::Running => Running { readings }.into(),
        ActivityType::SportsWalking => SportsWalking {
            readings,
            height_cm: params.positive_count(3)?,
        }
        .into(),
        ActivityType::Swimming => Swimming {
            readings,
            pool_length_m: params.positive_count(3)?,
            pool_lap_count: params.count(4)?,
        }
        .into(),
    };

    Ok(workout)
}

/// Typed, positional access to raw readings with field-aware errors.
struct Params<'a> {
    activity: ActivityType,
    values: &'a [SensorValue],
}

impl<'a> Params<'a> {
    fn new(activity: ActivityType, values: &'a [SensorValue]) -> Self {
        Self { activity, values }
    }

    fn name(&self, idx: usize) -> &'static str {
        self.activity.parameter_names()[idx]
    }

    fn invalid(&self, idx: usize, reason: &str) -> WorkoutError {
        WorkoutError::malformed(format!(
            "{} {} {reason}, got {}",
            self.activity,
            self.name(idx),
            self.values[idx]
        ))
    }

    /// Non-negative whole number. Floats are accepted only when integral.
    fn count(&self, idx: usize) -> Result<u64> {
        let value = match self.values[idx] {
            SensorValue::Integer(v) => u64::try_from(v).ok(),
            // u64::MAX as f64 rounds up to 2^64, so the bound is exclusive.
            SensorValue::Float(v)
                if v.is_finite() && v.fract() == 0.0 && v >= 0.0 && v < u64::MAX as f64 =>
            {
                Some(v as u64)
            }
            SensorValue::Float(_) => None,
        };
        value.ok_or_else(|| self.invalid(idx, "must be a non-negative integer"))
    }

    fn positive_count(&self, idx: usize) -> Result<u64> {
        match self.count(idx)? {
            0 => Err(self.invalid(idx, "must be greater than zero")),
            v => Ok(v),
        }
    }

    fn positive_float(&self, idx: usize) -> Result<f64> {
        let value = self.values[idx].as_f64();
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(self.invalid(idx, "must be a positive number"))
        }
    }
}
