//! Run summary schema.
//!
//! One JSON document per report run: what was loaded, the headline
//! numbers, and the outcome of every individual report.

use crate::aggregator::SnapshotDistribution;
use crate::diff::{GrowthBucket, MergedRecord, TotalsDelta};
use crate::loader::LoadReport;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level summary written to `summary.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the run finished
    pub generated_at: String,

    pub baseline_label: String,
    pub target_label: String,

    /// Load accounting for baseline then target
    pub loads: Vec<LoadReport>,

    /// Whether names were canonicalized, and with how many entries
    pub mapping_entries: usize,

    pub totals: TotalsDelta,

    pub baseline_distribution: SnapshotDistribution,
    pub target_distribution: SnapshotDistribution,

    /// Records per growth bucket, `New` included
    pub bucket_counts: BTreeMap<GrowthBucket, usize>,

    pub new_count: usize,
    pub disappeared_count: usize,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_gainers: Vec<MergedRecord>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_losers: Vec<MergedRecord>,

    /// Outcome of each report, in the order they ran
    pub reports: Vec<ReportOutcome>,
}

impl RunSummary {
    pub fn failed_reports(&self) -> impl Iterator<Item = &ReportOutcome> {
        self.reports.iter().filter(|r| r.error.is_some())
    }

    pub fn has_failures(&self) -> bool {
        self.failed_reports().next().is_some()
    }
}

/// Result of producing one output file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOutcome {
    /// Report name (e.g. "top_new_skills")
    pub report: String,

    pub path: PathBuf,

    /// Rows written; zero when the report failed
    pub rows: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
