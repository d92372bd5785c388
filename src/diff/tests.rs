//! Tests for the diff module.
//!
//! Covers the complete comparison workflow over small snapshot fixtures.

use super::*;
use crate::loader::{CountRecord, CountTable};
use std::collections::BTreeSet;

fn table(rows: &[(&str, u64)]) -> CountTable {
    rows.iter().map(|&(name, count)| (name, count)).collect()
}

/// 2023 snapshot used across tests
fn create_baseline() -> CountTable {
    table(&[
        ("python", 100),
        ("java", 100),
        ("cobol", 40),
        ("perl", 80),
        ("rust", 10),
        ("sql", 200),
    ])
}

/// 2025 snapshot used across tests
fn create_target() -> CountTable {
    table(&[
        ("python", 90),
        ("java", 89),
        ("perl", 40),
        ("rust", 30),
        ("sql", 230),
        ("mojo", 50),
        ("terraform", 70),
    ])
}

fn find<'a>(merged: &'a [MergedRecord], name: &str) -> &'a MergedRecord {
    merged.iter().find(|r| r.name == name).unwrap()
}

mod engine_tests {
    use super::*;

    #[test]
    fn test_union_of_names_each_once() {
        let a = create_baseline();
        let b = create_target();
        let merged = compute_deltas(&a, &b);

        let expected: BTreeSet<&str> = a.iter().chain(b.iter()).map(|r| r.name.as_str()).collect();
        let actual: Vec<&str> = merged.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(actual.len(), expected.len());
        assert_eq!(actual, expected.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_delta_is_exact() {
        let merged = compute_deltas(&create_baseline(), &create_target());
        for record in &merged {
            assert_eq!(record.delta, record.count_b as i64 - record.count_a as i64);
            assert_eq!(record.volatility, record.pct_change.map(f64::abs));
        }
    }

    #[test]
    fn test_flat_decline_boundary() {
        let merged = compute_deltas(&create_baseline(), &create_target());

        let python = find(&merged, "python");
        assert_eq!(python.pct_change, Some(-10.0));
        assert_eq!(python.growth_bucket, GrowthBucket::Flat);

        let java = find(&merged, "java");
        assert_eq!(java.pct_change, Some(-11.0));
        assert_eq!(java.growth_bucket, GrowthBucket::Decline);
    }

    #[test]
    fn test_missing_side_is_zero_filled() {
        let merged = compute_deltas(&create_baseline(), &create_target());

        let mojo = find(&merged, "mojo");
        assert_eq!((mojo.count_a, mojo.count_b), (0, 50));
        assert_eq!(mojo.pct_change, None);
        assert_eq!(mojo.growth_bucket, GrowthBucket::New);

        let cobol = find(&merged, "cobol");
        assert_eq!((cobol.count_a, cobol.count_b), (40, 0));
        assert_eq!(cobol.delta, -40);
        assert_eq!(cobol.growth_bucket, GrowthBucket::Decline);
    }

    #[test]
    fn test_idempotent() {
        let a = create_baseline();
        let b = create_target();
        assert_eq!(compute_deltas(&a, &b), compute_deltas(&a, &b));
    }

    #[test]
    fn test_empty_tables() {
        assert!(compute_deltas(&CountTable::new(), &CountTable::new()).is_empty());
    }
}

mod sets_tests {
    use super::*;

    #[test]
    fn test_new_and_disappeared() {
        let merged = compute_deltas(&create_baseline(), &create_target());
        let sets = find_new_and_disappeared(&merged);

        let new: Vec<&str> = sets.new.iter().map(|r| r.name.as_str()).collect();
        let gone: Vec<&str> = sets.disappeared.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(new, vec!["mojo", "terraform"]);
        assert_eq!(gone, vec!["cobol"]);
    }

    #[test]
    fn test_disappeared_keeps_dual_membership_with_decline() {
        let merged = compute_deltas(&create_baseline(), &create_target());
        let sets = find_new_and_disappeared(&merged);
        let buckets = bucket_top_n(&merged, 100);

        assert!(sets.disappeared.iter().any(|r| r.name == "cobol"));
        assert!(buckets[&GrowthBucket::Decline].iter().any(|r| r.name == "cobol"));
    }

    #[test]
    fn test_top_new_sorted_and_truncated() {
        let top = top_new(&create_baseline(), &create_target(), 1);
        assert_eq!(top, vec![CountRecord::new("terraform", 70)]);
    }

    #[test]
    fn test_top_gone() {
        let top = top_gone(&create_baseline(), &create_target(), 100);
        assert_eq!(top, vec![CountRecord::new("cobol", 40)]);
    }

    #[test]
    fn test_top_new_ties_keep_input_order() {
        let a = table(&[("x", 1)]);
        let b = table(&[("c", 5), ("a", 5), ("b", 9)]);
        let names: Vec<String> = top_new(&a, &b, 10).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_top_common() {
        let top = top_common(&create_baseline(), &create_target(), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "sql");
        assert_eq!(top[0].total, 430);
        assert_eq!(top[1].name, "python");
        assert_eq!(top[1].total, 190);
    }
}

mod selector_tests {
    use super::*;

    #[test]
    fn test_bucket_top_n_excludes_new() {
        let merged = compute_deltas(&create_baseline(), &create_target());
        let buckets = bucket_top_n(&merged, 100);

        assert_eq!(buckets.len(), 4);
        assert!(!buckets.contains_key(&GrowthBucket::New));
        for (bucket, records) in &buckets {
            assert!(records.iter().all(|r| r.growth_bucket == *bucket));
            assert!(records.iter().all(|r| r.name != "mojo" && r.name != "terraform"));
        }
    }

    #[test]
    fn test_decline_sorted_worst_first() {
        let merged = compute_deltas(&create_baseline(), &create_target());
        let buckets = bucket_top_n(&merged, 100);
        let decline = &buckets[&GrowthBucket::Decline];

        let names: Vec<&str> = decline.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["cobol", "perl", "java"]);
    }

    #[test]
    fn test_growth_sorted_descending() {
        let merged = compute_deltas(&create_baseline(), &create_target());
        let buckets = bucket_top_n(&merged, 100);

        let high: Vec<&str> = buckets[&GrowthBucket::HighGrowth].iter().map(|r| r.name.as_str()).collect();
        assert_eq!(high, vec!["rust"]);

        let moderate: Vec<&str> = buckets[&GrowthBucket::ModerateGrowth]
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(moderate, vec!["sql"]);
    }

    #[test]
    fn test_bucket_top_n_truncates() {
        let merged = compute_deltas(&create_baseline(), &create_target());
        let buckets = bucket_top_n(&merged, 1);
        assert!(buckets.values().all(|records| records.len() <= 1));
        assert_eq!(buckets[&GrowthBucket::Decline][0].name, "cobol");
    }

    #[test]
    fn test_top_volatile_excludes_undefined() {
        let merged = compute_deltas(&create_baseline(), &create_target());
        let volatile = top_volatile(&merged, 3);

        let names: Vec<&str> = volatile.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["rust", "cobol", "perl"]);
        assert!(volatile.iter().all(|r| r.volatility.is_some()));
    }

    #[test]
    fn test_gainers_and_losers() {
        let merged = compute_deltas(&create_baseline(), &create_target());

        let gainers: Vec<String> = top_gainers(&merged, 2).into_iter().map(|r| r.name).collect();
        assert_eq!(gainers, vec!["terraform", "mojo"]);

        let losers: Vec<String> = top_losers(&merged, 2).into_iter().map(|r| r.name).collect();
        assert_eq!(losers, vec!["cobol", "perl"]);
    }
}
