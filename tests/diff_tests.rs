use pretty_assertions::assert_eq;
use skill_trends::aggregator::{compute_cumulative_coverage, names_to_reach};
use skill_trends::canonical::{canonicalize, SimilarityMapping};
use skill_trends::diff::{
    bucket_top_n, compute_deltas, find_new_and_disappeared, top_common, top_gone, top_new,
    GrowthBucket,
};
use skill_trends::loader::CountTable;
use skill_trends::utils::CoverageError;

fn table(rows: &[(&str, u64)]) -> CountTable {
    rows.iter().map(|&(name, count)| (name, count)).collect()
}

#[test]
fn test_bucket_boundaries() {
    let a = table(&[("flat", 100), ("decline", 100), ("moderate", 100), ("high", 100)]);
    let b = table(&[
        ("flat", 90),
        ("decline", 89),
        ("moderate", 150),
        ("high", 151),
        ("fresh", 50),
    ]);

    let merged = compute_deltas(&a, &b);
    let bucket_of = |name: &str| {
        merged
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.growth_bucket)
            .unwrap()
    };

    assert_eq!(bucket_of("flat"), GrowthBucket::Flat);
    assert_eq!(bucket_of("decline"), GrowthBucket::Decline);
    assert_eq!(bucket_of("moderate"), GrowthBucket::ModerateGrowth);
    assert_eq!(bucket_of("high"), GrowthBucket::HighGrowth);
    assert_eq!(bucket_of("fresh"), GrowthBucket::New);
}

#[test]
fn test_new_name_only_in_new_set() {
    let a = table(&[("python", 100)]);
    let b = table(&[("python", 100), ("mojo", 50)]);

    let merged = compute_deltas(&a, &b);
    let sets = find_new_and_disappeared(&merged);
    assert_eq!(sets.new.len(), 1);
    assert_eq!(sets.new[0].name, "mojo");
    assert!(sets.new[0].pct_change.is_none());

    for records in bucket_top_n(&merged, 10).values() {
        assert!(records.iter().all(|r| r.name != "mojo"));
    }
}

#[test]
fn test_disappeared_name_is_also_decline() {
    let a = table(&[("cobol", 40), ("java", 10)]);
    let b = table(&[("java", 10)]);

    let merged = compute_deltas(&a, &b);
    let sets = find_new_and_disappeared(&merged);
    let buckets = bucket_top_n(&merged, 10);

    assert_eq!(sets.disappeared[0].name, "cobol");
    assert_eq!(sets.disappeared[0].pct_change, Some(-100.0));
    assert_eq!(buckets[&GrowthBucket::Decline][0].name, "cobol");
}

#[test]
fn test_top_sets_from_tables() {
    let a = table(&[("cobol", 40), ("perl", 80), ("java", 5), ("fortran", 90)]);
    let b = table(&[("java", 20), ("mojo", 50), ("zig", 70)]);

    let gone: Vec<String> = top_gone(&a, &b, 2).into_iter().map(|r| r.name).collect();
    assert_eq!(gone, vec!["fortran", "perl"]);

    let fresh: Vec<String> = top_new(&a, &b, 5).into_iter().map(|r| r.name).collect();
    assert_eq!(fresh, vec!["zig", "mojo"]);

    let common = top_common(&a, &b, 5);
    assert_eq!(common.len(), 1);
    assert_eq!(common[0].name, "java");
    assert_eq!(common[0].total, 25);
}

#[test]
fn test_canonicalize_before_compare() {
    let mapping = SimilarityMapping::from_entries([("js", "javascript"), ("JS", "javascript")]).unwrap();
    let a = canonicalize(&table(&[("js", 30), ("JS", 20), ("rust", 5)]), &mapping);
    let b = canonicalize(&table(&[("javascript", 60), ("rust", 5)]), &mapping);

    assert_eq!(a.get("javascript"), Some(50));
    assert_eq!(a.total(), 55);

    let merged = compute_deltas(&a, &b);
    let js = merged.iter().find(|r| r.name == "javascript").unwrap();
    assert_eq!(js.delta, 10);
    assert_eq!(js.pct_change, Some(20.0));
    assert_eq!(js.growth_bucket, GrowthBucket::ModerateGrowth);
}

#[test]
fn test_coverage_reaches_hundred() {
    let coverage = compute_cumulative_coverage(&table(&[("b", 30), ("a", 50), ("c", 20)])).unwrap();

    let names: Vec<&str> = coverage.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(coverage[2].rank, 3);
    assert!((coverage[2].cum_pct - 100.0).abs() < 1e-9);
    assert_eq!(names_to_reach(&coverage, 80.0), Some(2));
}

#[test]
fn test_coverage_empty_table() {
    let result = compute_cumulative_coverage(&CountTable::new());
    assert_eq!(result.unwrap_err(), CoverageError::EmptyTable);
}
