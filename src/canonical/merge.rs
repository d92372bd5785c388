//! Re-aggregation of a count table through a similarity mapping.

use super::mapping::SimilarityMapping;
use crate::loader::CountTable;
use log::debug;

/// Rewrite names through `mapping` and sum counts of merged names
///
/// An empty mapping returns the input unchanged, row order included.
/// Otherwise rows keep the order in which each canonical name first appears.
pub fn canonicalize(table: &CountTable, mapping: &SimilarityMapping) -> CountTable {
    if mapping.is_empty() {
        return table.clone();
    }

    let mut merged = CountTable::new();
    for record in table.iter() {
        merged.accumulate(mapping.resolve(&record.name), record.count);
    }

    debug!(
        "Canonicalized {} names into {} ({} merged)",
        table.len(),
        merged.len(),
        table.len() - merged.len()
    );

    merged
}
