//! Delta math between two counts.
//!
//! Handles the percentage edge case explicitly: a zero baseline yields an
//! undefined change (`None`), never infinity, NaN or a silent zero.

use super::bucket::classify;
use super::schema::{MergedRecord, TotalsDelta};
use crate::loader::CountTable;

/// Build the merged record for one name
pub fn merge_counts(name: &str, count_a: u64, count_b: u64) -> MergedRecord {
    let delta = count_delta(count_a, count_b);
    let pct_change = safe_percentage(i128::from(delta), u128::from(count_a));

    MergedRecord {
        name: name.to_string(),
        count_a,
        count_b,
        delta,
        pct_change,
        volatility: pct_change.map(f64::abs),
        growth_bucket: classify(pct_change),
    }
}

/// Signed difference `count_b - count_a`
///
/// Exact for counts up to `MAX_COUNT`; beyond that the result saturates.
pub fn count_delta(count_a: u64, count_b: u64) -> i64 {
    let delta = i128::from(count_b) - i128::from(count_a);
    i64::try_from(delta).unwrap_or(if delta < 0 { i64::MIN } else { i64::MAX })
}

/// Calculate percentage change safely
///
/// # Returns
/// `Some(change / baseline * 100)`, or `None` if baseline is zero
pub fn safe_percentage(change: i128, baseline: u128) -> Option<f64> {
    if baseline == 0 {
        None
    } else {
        Some((change as f64 / baseline as f64) * 100.0)
    }
}

/// Compare overall volume of two snapshots
pub fn calculate_totals_delta(table_a: &CountTable, table_b: &CountTable) -> TotalsDelta {
    let baseline_total = table_a.total();
    let target_total = table_b.total();
    let absolute_change = target_total as i128 - baseline_total as i128;

    TotalsDelta {
        baseline_total,
        target_total,
        baseline_names: table_a.len(),
        target_names: table_b.len(),
        absolute_change,
        percent_change: safe_percentage(absolute_change, baseline_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::GrowthBucket;

    #[test]
    fn test_safe_percentage_normal() {
        assert_eq!(safe_percentage(50, 100), Some(50.0));
        assert_eq!(safe_percentage(-25, 100), Some(-25.0));
    }

    #[test]
    fn test_safe_percentage_zero_baseline() {
        assert_eq!(safe_percentage(10, 0), None);
        assert_eq!(safe_percentage(0, 0), None);
    }

    #[test]
    fn test_merge_counts_negative() {
        let record = merge_counts("perl", 150, 100);
        assert_eq!(record.delta, -50);
        assert!((record.pct_change.unwrap() + 100.0 / 3.0).abs() < 1e-9);
        assert!((record.volatility.unwrap() - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(record.growth_bucket, GrowthBucket::Decline);
    }

    #[test]
    fn test_count_delta_large_counts() {
        use crate::utils::config::MAX_COUNT;

        assert_eq!(count_delta(1, MAX_COUNT), i64::MAX - 1);
        assert_eq!(count_delta(MAX_COUNT, 0), -i64::MAX);
        assert_eq!(count_delta(0, u64::MAX), i64::MAX);

        let record = merge_counts("x", 1, MAX_COUNT);
        assert!(record.delta > 0);
        assert_eq!(record.growth_bucket, GrowthBucket::HighGrowth);
    }

    #[test]
    fn test_merge_counts_disappeared_is_decline() {
        let record = merge_counts("cobol", 40, 0);
        assert_eq!(record.delta, -40);
        assert_eq!(record.pct_change, Some(-100.0));
        assert_eq!(record.growth_bucket, GrowthBucket::Decline);
    }

    #[test]
    fn test_merge_counts_new() {
        let record = merge_counts("mojo", 0, 50);
        assert_eq!(record.delta, 50);
        assert_eq!(record.pct_change, None);
        assert_eq!(record.volatility, None);
        assert_eq!(record.growth_bucket, GrowthBucket::New);
    }

    #[test]
    fn test_calculate_totals_delta() {
        let a: CountTable = vec![("x", 60), ("y", 40)].into_iter().collect();
        let b: CountTable = vec![("x", 90)].into_iter().collect();

        let totals = calculate_totals_delta(&a, &b);
        assert_eq!(totals.baseline_total, 100);
        assert_eq!(totals.target_total, 90);
        assert_eq!(totals.absolute_change, -10);
        assert_eq!(totals.percent_change, Some(-10.0));
        assert_eq!(totals.target_names, 1);
    }
}
