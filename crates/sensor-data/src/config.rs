//! Configuration for the summarize driver.

use std::path::PathBuf;

/// Environment variable naming a JSON file of sensor packages.
pub const PACKAGES_ENV: &str = "WORKOUT_PACKAGES";
/// Environment variable switching output to JSON summaries.
pub const JSON_OUTPUT_ENV: &str = "WORKOUT_JSON";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverConfig {
    /// Packages file; the bundled samples are used when unset.
    pub packages_path: Option<PathBuf>,

    /// Print summaries as JSON objects instead of text lines.
    pub json_output: bool,
}

impl DriverConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let packages_path = lookup(PACKAGES_ENV)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let json_output = lookup(JSON_OUTPUT_ENV)
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            packages_path,
            json_output,
        }
    }
}
