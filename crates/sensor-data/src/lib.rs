//! Sensor packages for workout summaries.
//!
//! This crate supplies packages to the `workouts` calculations: the bundled
//! samples, packages loaded from JSON files, and seeded random packages for
//! tests. It also hosts the `summarize` driver binary.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sensor_data::prelude::*;
//!
//! for package in sample_packages() {
//!     let workout = package.build()?;
//!     println!("{}", summarize(&workout));
//! }
//! ```

pub mod config;
pub mod generators;
pub mod packages;

pub use workouts::{ActivityType, SensorValue, Workout, WorkoutError};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::DriverConfig;
    pub use crate::generators::{PackageGenConfig, PackageGenerator};
    pub use crate::packages::{
        PackageError, SensorPackage, load_packages, parse_packages, sample_packages, summary_line,
    };
    pub use workouts::{WorkoutMetrics, summarize};
}
