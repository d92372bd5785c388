//! Set differences between snapshots.
//!
//! Two views are provided and kept independent:
//! - `find_new_and_disappeared` reads the zero-filled merged table
//! - the top-N selectors test membership in the other table directly

use super::schema::{CommonRecord, MergedRecord, NewAndDisappeared};
use crate::loader::{CountRecord, CountTable};

/// Split merged records into names absent from either snapshot
///
/// Assumes count tables carry only positive counts, so no record is in both.
pub fn find_new_and_disappeared(merged: &[MergedRecord]) -> NewAndDisappeared {
    NewAndDisappeared {
        new: merged.iter().filter(|r| r.count_a == 0).cloned().collect(),
        disappeared: merged.iter().filter(|r| r.count_b == 0).cloned().collect(),
    }
}

/// Top `n` names of the second snapshot that are absent from the first
///
/// Sorted by second-snapshot count, descending; ties keep input order.
pub fn top_new(table_a: &CountTable, table_b: &CountTable, n: usize) -> Vec<CountRecord> {
    top_absent_from(table_b, table_a, n)
}

/// Top `n` names of the first snapshot that are absent from the second
///
/// Sorted by first-snapshot count, descending; ties keep input order.
pub fn top_gone(table_a: &CountTable, table_b: &CountTable, n: usize) -> Vec<CountRecord> {
    top_absent_from(table_a, table_b, n)
}

/// Top `n` names present in both snapshots, by combined count
///
/// Ties keep first-snapshot order.
pub fn top_common(table_a: &CountTable, table_b: &CountTable, n: usize) -> Vec<CommonRecord> {
    let mut common: Vec<CommonRecord> = table_a
        .iter()
        .filter_map(|a| {
            table_b.get(&a.name).map(|count_b| CommonRecord {
                name: a.name.clone(),
                count_a: a.count,
                count_b,
                total: a.count + count_b,
            })
        })
        .collect();

    common.sort_by(|x, y| y.total.cmp(&x.total));
    common.truncate(n);
    common
}

fn top_absent_from(table: &CountTable, other: &CountTable, n: usize) -> Vec<CountRecord> {
    let mut absent: Vec<CountRecord> = table
        .iter()
        .filter(|r| !other.contains(&r.name))
        .cloned()
        .collect();

    // sort_by is stable
    absent.sort_by(|x, y| y.count.cmp(&x.count));
    absent.truncate(n);
    absent
}
