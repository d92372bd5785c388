//! Core delta engine implementation.
//! Merges two snapshots on name and computes per-name change metrics.

use super::normalizer::merge_counts;
use super::schema::MergedRecord;
use crate::loader::CountTable;
use log::debug;
use std::collections::BTreeSet;

/// Compare two snapshots name by name
///
/// Outer join on `name`: a name present in only one table gets a zero
/// count on the other side rather than being dropped. Output is sorted by
/// name.
///
/// # Arguments
/// * `table_a` - First snapshot (baseline)
/// * `table_b` - Second snapshot (target)
///
/// # Example
/// ```ignore
/// let merged = compute_deltas(&counts_2023, &counts_2025);
/// let buckets = bucket_top_n(&merged, 100);
/// ```
pub fn compute_deltas(table_a: &CountTable, table_b: &CountTable) -> Vec<MergedRecord> {
    let names: BTreeSet<&str> = table_a
        .iter()
        .chain(table_b.iter())
        .map(|r| r.name.as_str())
        .collect();

    let merged: Vec<MergedRecord> = names
        .into_iter()
        .map(|name| {
            let count_a = table_a.get(name).unwrap_or(0);
            let count_b = table_b.get(name).unwrap_or(0);
            merge_counts(name, count_a, count_b)
        })
        .collect();

    debug!(
        "Merged {} + {} names into {} records",
        table_a.len(),
        table_b.len(),
        merged.len()
    );

    merged
}
