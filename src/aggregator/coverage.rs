//! Cumulative coverage by rank.
//!
//! Ranks one snapshot by count and reports how much of the total volume
//! the top-ranked names account for.

use crate::loader::CountTable;
use crate::utils::error::CoverageError;
use log::debug;
use serde::{Deserialize, Serialize};

/// A ranked name with its running share of total volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageRecord {
    pub name: String,
    pub count: u64,

    /// 1-based; ties keep original row order
    pub rank: usize,

    /// Running count up to this rank as a percentage of the table total
    pub cum_pct: f64,
}

/// Rank a table by count and compute cumulative coverage
///
/// **Public** - main entry point for coverage
///
/// # Errors
/// * `CoverageError::EmptyTable` - Total count is zero (including an empty table)
///
/// # Example
/// ```ignore
/// let coverage = compute_cumulative_coverage(&counts_2023)?;
/// assert_eq!(coverage.last().map(|r| r.cum_pct), Some(100.0));
/// ```
pub fn compute_cumulative_coverage(table: &CountTable) -> Result<Vec<CoverageRecord>, CoverageError> {
    let total = table.total();
    if total == 0 {
        return Err(CoverageError::EmptyTable);
    }

    let mut ranked: Vec<_> = table.iter().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    let mut running = 0u128;
    let coverage: Vec<CoverageRecord> = ranked
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            running += u128::from(record.count);
            CoverageRecord {
                name: record.name.clone(),
                count: record.count,
                rank: i + 1,
                cum_pct: (running as f64 / total as f64) * 100.0,
            }
        })
        .collect();

    debug!("Ranked {} names over total count {}", coverage.len(), total);

    Ok(coverage)
}

/// Number of top-ranked names needed to reach `pct` percent of volume
///
/// Returns `None` if the coverage never reaches `pct`.
pub fn names_to_reach(coverage: &[CoverageRecord], pct: f64) -> Option<usize> {
    coverage.iter().find(|r| r.cum_pct >= pct).map(|r| r.rank)
}
