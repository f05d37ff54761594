//! Prints one workout summary per sensor package.
//!
//! Run with:
//! ```
//! cargo run -p sensor-data --bin summarize
//! ```
//!
//! Set `WORKOUT_PACKAGES=path/to/packages.json` to read packages from a file
//! and `WORKOUT_JSON=1` to print summaries as JSON.

use sensor_data::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DriverConfig::from_env();

    let packages = match &config.packages_path {
        Some(path) => {
            tracing::info!("Loading packages from {}", path.display());
            load_packages(path)?
        }
        None => sample_packages(),
    };

    let mut failed = 0;
    for package in &packages {
        let workout = match package.build() {
            Ok(workout) => workout,
            Err(e) => {
                tracing::warn!(workout_type = %package.workout_type, "Skipping package: {e}");
                failed += 1;
                continue;
            }
        };

        println!("{}", summary_line(&workout, config.json_output)?);
    }

    tracing::info!(
        "Processed {} packages ({} skipped)",
        packages.len(),
        failed
    );

    Ok(())
}
