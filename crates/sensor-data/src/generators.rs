//! Random sensor package generation.
//!
//! Produces packages that are always valid for their activity, so tests can
//! exercise the calculations across a wide input range.

use std::ops::Range;

use rand::Rng;
use rand::seq::SliceRandom;
use workouts::{ActivityType, SensorValue};

use crate::packages::SensorPackage;

/// Value ranges used when generating packages.
#[derive(Debug, Clone)]
pub struct PackageGenConfig {
    pub action_count: Range<i64>,
    pub duration_hours: Range<f64>,
    pub weight_kg: Range<f64>,
    pub height_cm: Range<i64>,
    /// Common pool sizes in meters.
    pub pool_lengths_m: Vec<i64>,
    pub pool_lap_count: Range<i64>,
}

impl Default for PackageGenConfig {
    fn default() -> Self {
        Self {
            action_count: 0..30_000,
            duration_hours: 0.1..4.0,
            weight_kg: 40.0..130.0,
            height_cm: 140..215,
            pool_lengths_m: vec![25, 33, 50],
            pool_lap_count: 0..160,
        }
    }
}

/// Generates valid sensor packages.
pub struct PackageGenerator {
    config: PackageGenConfig,
}

impl Default for PackageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageGenerator {
    pub fn new() -> Self {
        Self {
            config: PackageGenConfig::default(),
        }
    }

    pub fn with_config(config: PackageGenConfig) -> Self {
        Self { config }
    }

    /// Generates a package for the given activity.
    pub fn generate(&self, activity: ActivityType, rng: &mut impl Rng) -> SensorPackage {
        let c = &self.config;
        let mut data = vec![
            SensorValue::Integer(rng.gen_range(c.action_count.clone())),
            SensorValue::Float(rng.gen_range(c.duration_hours.clone())),
            SensorValue::Float(rng.gen_range(c.weight_kg.clone())),
        ];

        match activity {
            ActivityType::Running => {}
            ActivityType::SportsWalking => {
                data.push(SensorValue::Integer(rng.gen_range(c.height_cm.clone())));
            }
            ActivityType::Swimming => {
                let pool_length = c.pool_lengths_m.choose(rng).copied().unwrap_or(25);
                data.push(SensorValue::Integer(pool_length));
                data.push(SensorValue::Integer(rng.gen_range(c.pool_lap_count.clone())));
            }
        }

        SensorPackage {
            workout_type: activity.code().to_string(),
            data,
        }
    }

    /// Generates `count` packages with activities picked uniformly.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<SensorPackage> {
        (0..count)
            .map(|_| {
                let activity = ActivityType::ALL[rng.gen_range(0..ActivityType::ALL.len())];
                self.generate(activity, rng)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_matches_parameter_count() {
        let generator = PackageGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);

        for activity in ActivityType::ALL {
            let package = generator.generate(activity, &mut rng);
            assert_eq!(package.workout_type, activity.code());
            assert_eq!(package.data.len(), activity.parameter_count());
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = PackageGenerator::new();
        let a = generator.generate_batch(20, &mut StdRng::seed_from_u64(7));
        let b = generator.generate_batch(20, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_config() {
        let generator = PackageGenerator::with_config(PackageGenConfig {
            pool_lengths_m: vec![50],
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(1);
        let package = generator.generate(ActivityType::Swimming, &mut rng);
        assert_eq!(package.data[3], SensorValue::Integer(50));
    }
}
