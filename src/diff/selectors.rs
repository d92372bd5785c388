//! Top-N selectors over merged records.

use super::schema::{GrowthBucket, MergedRecord};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Top `n` records for each ranked growth bucket
///
/// `Decline` is sorted ascending by percentage change (worst first), the
/// other buckets descending. `New` is not included: its percentage change
/// carries no ordering.
pub fn bucket_top_n(merged: &[MergedRecord], n: usize) -> BTreeMap<GrowthBucket, Vec<MergedRecord>> {
    GrowthBucket::RANKED
        .iter()
        .map(|&bucket| {
            let mut subset: Vec<MergedRecord> = merged
                .iter()
                .filter(|r| r.growth_bucket == bucket)
                .cloned()
                .collect();

            let descending = bucket != GrowthBucket::Decline;
            subset.sort_by(|x, y| compare_defined(x.pct_change, y.pct_change, descending));
            subset.truncate(n);

            (bucket, subset)
        })
        .collect()
}

/// Top `n` records by volatility, descending
///
/// Records with undefined volatility are excluded, not ranked as zero.
pub fn top_volatile(merged: &[MergedRecord], n: usize) -> Vec<MergedRecord> {
    let mut volatile: Vec<MergedRecord> = merged
        .iter()
        .filter(|r| r.volatility.is_some())
        .cloned()
        .collect();

    volatile.sort_by(|x, y| compare_defined(x.volatility, y.volatility, true));
    volatile.truncate(n);
    volatile
}

/// Top `n` absolute increases
pub fn top_gainers(merged: &[MergedRecord], n: usize) -> Vec<MergedRecord> {
    let mut gainers: Vec<MergedRecord> = merged.iter().filter(|r| r.delta > 0).cloned().collect();
    gainers.sort_by(|x, y| y.delta.cmp(&x.delta));
    gainers.truncate(n);
    gainers
}

/// Top `n` absolute decreases
pub fn top_losers(merged: &[MergedRecord], n: usize) -> Vec<MergedRecord> {
    let mut losers: Vec<MergedRecord> = merged.iter().filter(|r| r.delta < 0).cloned().collect();
    losers.sort_by(|x, y| x.delta.cmp(&y.delta));
    losers.truncate(n);
    losers
}

/// Order two optional values; undefined values always sort last
fn compare_defined(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) if descending => y.total_cmp(&x),
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
