//! Output writers for report data.
//!
//! This module handles writing data to disk in various formats:
//! - CSV report tables (written atomically)
//! - JSON run summaries
//! - Text summaries for the terminal

mod atomic;
pub mod csv;
pub mod format;
pub mod json;
pub mod summary;
pub mod tables;
pub mod terminal;

// Re-export main functions
pub use self::csv::write_table;
pub use atomic::write_atomically;
pub use format::{format_percent, PercentFormat};
pub use json::{read_summary, write_summary};
pub use summary::{ReportOutcome, RunSummary};
pub use tables::{ReportTable, SnapshotLabels};
pub use terminal::render_terminal_summary;
