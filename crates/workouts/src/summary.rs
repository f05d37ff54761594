use std::fmt;

use serde::Serialize;

use crate::metrics::WorkoutMetrics;

/// Computed values of a finished workout, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    pub activity_label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_burned: f64,
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.activity_label,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_burned,
        )
    }
}

/// Renders the informational message for a summary.
pub fn render(summary: &WorkoutSummary) -> String {
    summary.to_string()
}

/// Computes and renders the summary of a workout in one step.
pub fn summarize(workout: &impl WorkoutMetrics) -> String {
    render(&workout.show_summary())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(label: &str, values: [f64; 4]) -> WorkoutSummary {
        WorkoutSummary {
            activity_label: label.to_string(),
            duration_hours: values[0],
            distance_km: values[1],
            mean_speed_kmh: values[2],
            calories_burned: values[3],
        }
    }

    #[test]
    fn test_render_exact_message() {
        let s = summary("Swimming", [1.0, 0.9936, 1.0, 336.0]);
        assert_eq!(
            render(&s),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_render_always_three_decimals() {
        let s = summary("Running", [0.25, 12345.0, 0.0001, 1e6]);
        let message = render(&s);
        assert!(message.contains("Длительность: 0.250 ч."));
        assert!(message.contains("Дистанция: 12345.000 км"));
        assert!(message.contains("Ср. скорость: 0.000 км/ч"));
        assert!(message.contains("Потрачено ккал: 1000000.000."));
    }

    #[test]
    fn test_display_matches_render() {
        let s = summary("SportsWalking", [1.5, 5.85, 3.9, 349.2517]);
        assert_eq!(format!("{s}"), render(&s));
    }

    #[test]
    fn test_summary_serializes() {
        let s = summary("Running", [1.0, 9.75, 9.75, 797.805]);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["activity_label"], "Running");
        assert_eq!(json["distance_km"], 9.75);
    }
}
