//! Flat report tables.
//!
//! Projects engine records onto the columns of each CSV report. Count
//! columns are named after the snapshot labels (`count_2023`, ...).

use super::format::PercentFormat;
use crate::aggregator::CoverageRecord;
use crate::diff::{CommonRecord, MergedRecord};
use crate::loader::CountRecord;

/// Header plus string cells, ready to be written
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    fn with_header(columns: &[&str]) -> Self {
        Self {
            header: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Labels of the two snapshots, used for column names
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotLabels {
    pub baseline: String,
    pub target: String,
}

impl SnapshotLabels {
    pub fn new(baseline: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            baseline: baseline.into(),
            target: target.into(),
        }
    }

    pub fn baseline_column(&self) -> String {
        count_column(&self.baseline)
    }

    pub fn target_column(&self) -> String {
        count_column(&self.target)
    }
}

fn count_column(label: &str) -> String {
    format!("count_{}", label)
}

/// name, count_a, count_b, delta, pct_change, volatility, growth_bucket
pub fn delta_summary_table(
    merged: &[MergedRecord],
    labels: &SnapshotLabels,
    percent: PercentFormat,
) -> ReportTable {
    let (col_a, col_b) = (labels.baseline_column(), labels.target_column());
    let mut table = ReportTable::with_header(&[
        "name",
        &col_a,
        &col_b,
        "delta",
        "pct_change",
        "volatility",
        "growth_bucket",
    ]);

    table.rows = merged
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.count_a.to_string(),
                r.count_b.to_string(),
                r.delta.to_string(),
                percent.cell(r.pct_change),
                percent.cell(r.volatility),
                r.growth_bucket.label().to_string(),
            ]
        })
        .collect();
    table
}

/// name, count_a, count_b, delta (new / disappeared views)
pub fn presence_table(records: &[MergedRecord], labels: &SnapshotLabels) -> ReportTable {
    let (col_a, col_b) = (labels.baseline_column(), labels.target_column());
    let mut table = ReportTable::with_header(&["name", &col_a, &col_b, "delta"]);

    table.rows = records
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.count_a.to_string(),
                r.count_b.to_string(),
                r.delta.to_string(),
            ]
        })
        .collect();
    table
}

/// name, count_<label> (single-snapshot top-N selections)
pub fn single_count_table(records: &[CountRecord], label: &str) -> ReportTable {
    let col = count_column(label);
    let mut table = ReportTable::with_header(&["name", &col]);

    table.rows = records
        .iter()
        .map(|r| vec![r.name.clone(), r.count.to_string()])
        .collect();
    table
}

/// name, pct_change, count_a, count_b
pub fn bucket_table(
    records: &[MergedRecord],
    labels: &SnapshotLabels,
    percent: PercentFormat,
) -> ReportTable {
    let (col_a, col_b) = (labels.baseline_column(), labels.target_column());
    let mut table = ReportTable::with_header(&["name", "pct_change", &col_a, &col_b]);

    table.rows = records
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                percent.cell(r.pct_change),
                r.count_a.to_string(),
                r.count_b.to_string(),
            ]
        })
        .collect();
    table
}

/// name, volatility, pct_change
pub fn volatility_table(records: &[MergedRecord], percent: PercentFormat) -> ReportTable {
    let mut table = ReportTable::with_header(&["name", "volatility", "pct_change"]);

    table.rows = records
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                percent.cell(r.volatility),
                percent.cell(r.pct_change),
            ]
        })
        .collect();
    table
}

/// name, count_a, count_b, total
pub fn common_table(records: &[CommonRecord], labels: &SnapshotLabels) -> ReportTable {
    let (col_a, col_b) = (labels.baseline_column(), labels.target_column());
    let mut table = ReportTable::with_header(&["name", &col_a, &col_b, "total"]);

    table.rows = records
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.count_a.to_string(),
                r.count_b.to_string(),
                r.total.to_string(),
            ]
        })
        .collect();
    table
}

/// name, count, rank, cum_pct
pub fn coverage_table(records: &[CoverageRecord], percent: PercentFormat) -> ReportTable {
    let mut table = ReportTable::with_header(&["name", "count", "rank", "cum_pct"]);

    table.rows = records
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.count.to_string(),
                r.rank.to_string(),
                percent.cell(Some(r.cum_pct)),
            ]
        })
        .collect();
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::merge_counts;
    use pretty_assertions::assert_eq;

    fn labels() -> SnapshotLabels {
        SnapshotLabels::new("2023", "2025")
    }

    #[test]
    fn test_delta_summary_columns() {
        let merged = vec![merge_counts("rust", 10, 15), merge_counts("mojo", 0, 4)];
        let table = delta_summary_table(&merged, &labels(), PercentFormat::Raw);

        assert_eq!(
            table.header,
            vec!["name", "count_2023", "count_2025", "delta", "pct_change", "volatility", "growth_bucket"]
        );
        assert_eq!(table.rows[0], vec!["rust", "10", "15", "5", "50", "50", "Moderate growth"]);
        assert_eq!(table.rows[1], vec!["mojo", "0", "4", "4", "", "", "New"]);
    }

    #[test]
    fn test_bucket_table_rounded() {
        let merged = vec![merge_counts("perl", 3, 1)];
        let table = bucket_table(&merged, &labels(), PercentFormat::Rounded);

        assert_eq!(table.header, vec!["name", "pct_change", "count_2023", "count_2025"]);
        assert_eq!(table.rows[0], vec!["perl", "-67%", "3", "1"]);
    }

    #[test]
    fn test_single_count_table() {
        let records = vec![CountRecord::new("zig", 12)];
        let table = single_count_table(&records, "2025");
        assert_eq!(table.header, vec!["name", "count_2025"]);
        assert_eq!(table.len(), 1);
    }
}
