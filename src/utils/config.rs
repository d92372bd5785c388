//! Configuration and constants for the CLI.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::error::ConfigError;

/// Current run summary schema version
pub const SUMMARY_VERSION: &str = "1.0.0";

/// Default cutoff for every top-N selector
pub const DEFAULT_TOP_N: usize = 100;

/// Upper bound accepted for `top_n`
pub const MAX_TOP_N: usize = 100_000;

/// Largest count a single name may carry
///
/// Keeps every per-name delta exact in `i64`.
pub const MAX_COUNT: u64 = i64::MAX as u64;

pub const DEFAULT_BASELINE_LABEL: &str = "2023";
pub const DEFAULT_TARGET_LABEL: &str = "2025";

/// Column holding the display name in raw name lists
pub const DEFAULT_NAME_COLUMN: &str = "Expression Name";

// Required columns of an aggregate count table
pub const NAME_COLUMN: &str = "name";
pub const COUNT_COLUMN: &str = "count";

/// Sibling file tried when a count file lacks the required columns
/// (e.g. `2023.csv` -> `parent_2023.csv`)
pub const FALLBACK_FILE_PREFIX: &str = "parent_";

/// Analysis settings, loadable from TOML
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Cutoff applied independently to every top-N report
    pub top_n: usize,

    /// Label of the first snapshot
    pub baseline_label: String,

    /// Label of the second snapshot
    pub target_label: String,

    /// Column read from raw name lists
    pub name_column: String,

    /// Emit percentage columns as rounded "NN%" strings in CSV output
    pub round_percentages: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            baseline_label: DEFAULT_BASELINE_LABEL.to_string(),
            target_label: DEFAULT_TARGET_LABEL.to_string(),
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            round_percentages: false,
        }
    }
}

/// Load analysis settings from a TOML file
///
/// # Errors
/// * `ConfigError::Io` - If file cannot be read
/// * `ConfigError::Parse` - If TOML is invalid
///
/// # Example
/// ```ignore
/// let config = load_config("analysis.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AnalysisConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: AnalysisConfig = toml::from_str(&contents)?;
    Ok(config)
}
