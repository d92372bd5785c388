//! Snapshot comparison.
//!
//! This module compares two count tables (baseline vs target) and produces
//! per-name change records, growth buckets and the derived views built on
//! them.
//!
//! # Example
//! ```ignore
//! use skill_trends::diff::{bucket_top_n, compute_deltas, find_new_and_disappeared};
//!
//! let merged = compute_deltas(&counts_2023, &counts_2025);
//! let sets = find_new_and_disappeared(&merged);
//! let buckets = bucket_top_n(&merged, 100);
//! ```

mod bucket;
mod engine;
mod normalizer;
mod schema;
mod selectors;
mod sets;

// Public API exports
pub use bucket::classify;
pub use engine::compute_deltas;
pub use normalizer::{calculate_totals_delta, count_delta, merge_counts, safe_percentage};
pub use schema::{CommonRecord, GrowthBucket, MergedRecord, NewAndDisappeared, TotalsDelta};
pub use selectors::{bucket_top_n, top_gainers, top_losers, top_volatile};
pub use sets::{find_new_and_disappeared, top_common, top_gone, top_new};

#[cfg(test)]
mod tests;
