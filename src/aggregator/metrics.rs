//! Distribution statistics for a single snapshot.
//!
//! Summarizes how concentrated a snapshot's volume is across names.

use crate::loader::CountTable;
use log::debug;
use serde::{Deserialize, Serialize};

/// Count distribution statistics
///
/// **Public** - returned from calculate_distribution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDistribution {
    /// Total count across all names
    pub total_count: u128,

    /// Number of distinct names
    pub name_count: usize,

    /// Mean count per name
    pub mean_count: u64,

    /// Median count per name
    pub median_count: u64,

    /// Count held by the top 10% of names
    pub top_10_percent_count: u128,

    /// Percentage of total count in the top 10%
    pub top_10_percent_share: f64,
}

/// Calculate distribution statistics for a snapshot
///
/// **Public** - provides summary statistics
pub fn calculate_distribution(table: &CountTable) -> SnapshotDistribution {
    if table.is_empty() {
        return SnapshotDistribution::default();
    }

    let mut counts: Vec<u64> = table.iter().map(|r| r.count).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));

    let total = table.total();
    let name_count = counts.len();
    let median = counts[name_count / 2];

    let top_10_percent_names = (name_count as f64 * 0.1).ceil() as usize;
    let top_10_percent_count: u128 = counts
        .iter()
        .take(top_10_percent_names)
        .map(|&c| u128::from(c))
        .sum();

    debug!(
        "Distribution: {} names, top {} hold {} of {}",
        name_count, top_10_percent_names, top_10_percent_count, total
    );

    SnapshotDistribution {
        total_count: total,
        name_count,
        mean_count: u64::try_from(total / name_count as u128).unwrap_or(u64::MAX),
        median_count: median,
        top_10_percent_count,
        top_10_percent_share: if total > 0 {
            (top_10_percent_count as f64 / total as f64) * 100.0
        } else {
            0.0
        },
    }
}

impl SnapshotDistribution {
    /// Returns true if the top 10% of names hold more than 80% of volume
    pub fn is_highly_concentrated(&self) -> bool {
        self.top_10_percent_share > 80.0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Total: {} | Names: {} | Mean: {} | Median: {} | Top 10%: {:.1}%",
            self.total_count,
            self.name_count,
            self.mean_count,
            self.median_count,
            self.top_10_percent_share
        )
    }
}
