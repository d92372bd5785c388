//! Single-snapshot aggregation.
//!
//! This module turns one count table into:
//! - Ranked cumulative coverage (share of volume by rank)
//! - Distribution statistics

pub mod coverage;
pub mod metrics;

// Re-export main types and functions
pub use coverage::{compute_cumulative_coverage, names_to_reach, CoverageRecord};
pub use metrics::{calculate_distribution, SnapshotDistribution};
