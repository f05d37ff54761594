//! Distance, speed and calorie formulas for each activity.
//!
//! Every quantity is derived on demand from the stored readings; nothing is
//! cached. Formulas keep a fixed operand order so results are reproducible
//! bit for bit.

use crate::models::{ActivityType, Readings, Running, SportsWalking, Swimming, Workout};
use crate::summary::WorkoutSummary;

const M_IN_KM: f64 = 1000.0;
const MIN_IN_HOUR: f64 = 60.0;
const CM_IN_M: f64 = 100.0;

/// Capabilities shared by every workout.
pub trait WorkoutMetrics {
    /// Distance covered per repetition, in meters.
    fn step_length_m(&self) -> f64 {
        Readings::STEP_LENGTH_M
    }

    fn readings(&self) -> &Readings;

    fn activity_label(&self) -> &'static str;

    fn distance_km(&self) -> f64 {
        self.readings().action_count as f64 * self.step_length_m() / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.readings().duration_hours
    }

    fn calories_burned(&self) -> f64;

    /// Snapshot of all computed values.
    fn show_summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            activity_label: self.activity_label().to_string(),
            duration_hours: self.readings().duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_burned: self.calories_burned(),
        }
    }
}

impl Readings {
    pub const STEP_LENGTH_M: f64 = 0.65;
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;
}

impl WorkoutMetrics for Running {
    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn activity_label(&self) -> &'static str {
        ActivityType::Running.label()
    }

    fn calories_burned(&self) -> f64 {
        let r = &self.readings;
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * r.weight_kg
            / M_IN_KM
            * (r.duration_hours * MIN_IN_HOUR)
    }
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    /// Converts km/h to m/s (rounded).
    pub const KMH_IN_MSEC: f64 = 0.278;
}

impl WorkoutMetrics for SportsWalking {
    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn activity_label(&self) -> &'static str {
        ActivityType::SportsWalking.label()
    }

    fn calories_burned(&self) -> f64 {
        let r = &self.readings;
        let height_m = self.height_cm as f64 / CM_IN_M;
        (Self::CALORIES_WEIGHT_MULTIPLIER * r.weight_kg
            + ((self.mean_speed_kmh() * Self::KMH_IN_MSEC).powi(2) / height_m)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * r.weight_kg)
            * r.duration_hours
            * MIN_IN_HOUR
    }
}

impl Swimming {
    /// Stroke length, longer than a step.
    pub const STEP_LENGTH_M: f64 = 1.38;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;
}

impl WorkoutMetrics for Swimming {
    fn step_length_m(&self) -> f64 {
        Self::STEP_LENGTH_M
    }

    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn activity_label(&self) -> &'static str {
        ActivityType::Swimming.label()
    }

    // Pool geometry, not stroke count, determines speed.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m as f64 * self.pool_lap_count as f64
            / M_IN_KM
            / self.readings.duration_hours
    }

    fn calories_burned(&self) -> f64 {
        let r = &self.readings;
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * r.weight_kg
            * r.duration_hours
    }
}

impl Workout {
    fn metrics(&self) -> &dyn WorkoutMetrics {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl WorkoutMetrics for Workout {
    fn step_length_m(&self) -> f64 {
        self.metrics().step_length_m()
    }

    fn readings(&self) -> &Readings {
        self.metrics().readings()
    }

    fn activity_label(&self) -> &'static str {
        self.metrics().activity_label()
    }

    fn distance_km(&self) -> f64 {
        self.metrics().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.metrics().mean_speed_kmh()
    }

    fn calories_burned(&self) -> f64 {
        self.metrics().calories_burned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(action_count: u64, duration_hours: f64, weight_kg: f64) -> Readings {
        Readings {
            action_count,
            duration_hours,
            weight_kg,
        }
    }

    #[test]
    fn test_running_metrics() {
        let run = Running {
            readings: readings(15000, 1.0, 75.0),
        };
        assert!((run.distance_km() - 9.75).abs() < 1e-9);
        assert!((run.mean_speed_kmh() - 9.75).abs() < 1e-9);
        assert!((run.calories_burned() - 797.805).abs() < 1e-6);
    }

    #[test]
    fn test_walking_metrics() {
        let walk = SportsWalking {
            readings: readings(9000, 1.0, 75.0),
            height_cm: 180,
        };
        assert!((walk.distance_km() - 5.85).abs() < 1e-9);
        assert!((walk.mean_speed_kmh() - 5.85).abs() < 1e-9);
        assert!((walk.calories_burned() - 349.251_747_525).abs() < 1e-6);
    }

    #[test]
    fn test_swimming_uses_pool_geometry_for_speed() {
        let swim = Swimming {
            readings: readings(720, 1.0, 80.0),
            pool_length_m: 25,
            pool_lap_count: 40,
        };
        assert!((swim.distance_km() - 0.9936).abs() < 1e-9);
        assert!((swim.mean_speed_kmh() - 1.0).abs() < 1e-9);
        assert!((swim.calories_burned() - 336.0).abs() < 1e-9);

        // Stroke count does not affect speed
        let more_strokes = Swimming {
            readings: readings(5000, 1.0, 80.0),
            ..swim
        };
        assert_eq!(more_strokes.mean_speed_kmh(), swim.mean_speed_kmh());
        assert!(more_strokes.distance_km() > swim.distance_km());
    }

    #[test]
    fn test_step_lengths() {
        let run = Running {
            readings: readings(1, 1.0, 70.0),
        };
        let swim = Swimming {
            readings: readings(1, 1.0, 70.0),
            pool_length_m: 25,
            pool_lap_count: 1,
        };
        assert_eq!(run.step_length_m(), 0.65);
        assert_eq!(swim.step_length_m(), 1.38);
    }

    #[test]
    fn test_workout_dispatches_to_variant() {
        let swim = Swimming {
            readings: readings(720, 1.0, 80.0),
            pool_length_m: 25,
            pool_lap_count: 40,
        };
        let workout = Workout::from(swim);
        assert_eq!(workout.activity_label(), "Swimming");
        assert_eq!(workout.step_length_m(), Swimming::STEP_LENGTH_M);
        assert_eq!(workout.mean_speed_kmh().to_bits(), swim.mean_speed_kmh().to_bits());
        assert_eq!(workout.calories_burned().to_bits(), swim.calories_burned().to_bits());
    }

    #[test]
    fn test_zero_actions_zero_distance() {
        let walk = SportsWalking {
            readings: readings(0, 2.0, 60.0),
            height_cm: 170,
        };
        assert_eq!(walk.distance_km(), 0.0);
        assert_eq!(walk.mean_speed_kmh(), 0.0);
        // Weight term still burns calories at rest pace
        assert!((walk.calories_burned() - 0.035 * 60.0 * 2.0 * 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_show_summary() {
        let run = Running {
            readings: readings(15000, 1.0, 75.0),
        };
        let summary = run.show_summary();
        assert_eq!(summary.activity_label, "Running");
        assert_eq!(summary.duration_hours, 1.0);
        assert_eq!(summary.distance_km, run.distance_km());
        assert_eq!(summary.calories_burned, run.calories_burned());
    }
}
