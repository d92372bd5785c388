//! Snapshot loading and the count-table data model.
//!
//! This module handles:
//! - Reading aggregate count CSVs (with the `parent_` fallback)
//! - Reading raw name lists and left-joining them onto counts
//! - Accounting for skipped rows so data loss is observable

pub mod csv_table;
pub mod schema;

// Re-export main types
pub use csv_table::{join_names_with_counts, load_count_table, load_name_list, load_snapshot, NameList};
pub use schema::{CountRecord, CountTable, LoadReport, LoadedTable, SkippedRow, SnapshotSource};
