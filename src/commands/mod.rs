//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use models::{ReportArgs, ReportKind};
pub use report::{execute_report, validate_args};
pub use utils::{display_version, validate_mapping_file};
