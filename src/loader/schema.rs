//! Snapshot data model.
//!
//! A `CountTable` is the per-snapshot name -> count dataset. Names are a
//! unique key; insertion order is kept so that stable sorts downstream
//! break ties by original row order.

use crate::utils::config::MAX_COUNT;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// A single (name, count) row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRecord {
    pub name: String,
    pub count: u64,
}

impl CountRecord {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Name -> count table with unique names and stable row order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountTable {
    records: Vec<CountRecord>,
    index: HashMap<String, usize>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` to `name`, creating the row if it does not exist yet.
    ///
    /// Repeated names sum rather than overwrite. A count never exceeds
    /// `MAX_COUNT`; sums past it are clamped with a warning.
    pub fn accumulate(&mut self, name: impl Into<String>, count: u64) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => {
                let record = &mut self.records[pos];
                record.count = clamp_count(&record.name, record.count.saturating_add(count));
            }
            None => {
                let count = clamp_count(&name, count);
                self.index.insert(name.clone(), self.records.len());
                self.records.push(CountRecord { name, count });
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.index.get(name).map(|&pos| self.records[pos].count)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows in insertion order
    pub fn records(&self) -> &[CountRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountRecord> {
        self.records.iter()
    }

    /// Sum of all counts
    pub fn total(&self) -> u128 {
        self.records.iter().map(|r| u128::from(r.count)).sum()
    }
}

fn clamp_count(name: &str, count: u64) -> u64 {
    if count > MAX_COUNT {
        warn!("Count for '{}' exceeds {}, clamping", name, MAX_COUNT);
        MAX_COUNT
    } else {
        count
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for CountTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = CountTable::new();
        for (name, count) in iter {
            table.accumulate(name, count);
        }
        table
    }
}

/// Where one snapshot comes from
///
/// `counts` is an aggregate table with `name`/`count` columns. When `names`
/// is set, the raw name list is left-joined onto the counts.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotSource {
    pub counts: PathBuf,
    pub names: Option<PathBuf>,
}

impl SnapshotSource {
    pub fn counts_only(counts: impl Into<PathBuf>) -> Self {
        Self {
            counts: counts.into(),
            names: None,
        }
    }
}

/// A row the loader dropped, with the reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based line number in the source file (header is line 1)
    pub line: u64,
    pub reason: String,
}

impl SkippedRow {
    pub fn new(line: u64, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// Accounting for one load, so dropped rows are never silent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadReport {
    pub source: PathBuf,
    pub rows_read: usize,
    pub rows_kept: usize,

    /// Rows whose count resolved to zero (indistinguishable from absent)
    pub zero_count_rows: usize,

    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// A table together with its load accounting
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: CountTable,
    pub report: LoadReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_sums_repeated_names() {
        let mut table = CountTable::new();
        table.accumulate("rust", 3);
        table.accumulate("go", 1);
        table.accumulate("rust", 4);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("rust"), Some(7));
        assert_eq!(table.records()[0].name, "rust");
        assert_eq!(table.total(), 8);
    }

    #[test]
    fn test_from_iter_keeps_order() {
        let table: CountTable = vec![("b", 1), ("a", 2)].into_iter().collect();
        let names: Vec<&str> = table.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(table.contains("a"));
        assert!(!table.contains("c"));
    }

    #[test]
    fn test_large_counts_do_not_overflow() {
        let mut table = CountTable::new();
        table.accumulate("x", MAX_COUNT);
        table.accumulate("y", MAX_COUNT);
        table.accumulate("z", 1);
        assert_eq!(table.total(), 2 * u128::from(MAX_COUNT) + 1);

        table.accumulate("x", MAX_COUNT);
        assert_eq!(table.get("x"), Some(MAX_COUNT));

        table.accumulate("w", u64::MAX);
        assert_eq!(table.get("w"), Some(MAX_COUNT));
    }
}
