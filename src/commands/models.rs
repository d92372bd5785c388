use crate::loader::SnapshotSource;
use crate::utils::config::AnalysisConfig;
use clap::ValueEnum;
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// First snapshot (e.g. 2023)
    pub baseline: SnapshotSource,

    /// Second snapshot (e.g. 2025)
    pub target: SnapshotSource,

    /// Similarity mapping JSON (optional)
    pub mapping: Option<PathBuf>,

    /// Directory receiving every report file
    pub output_dir: PathBuf,

    /// Cutoffs, labels and formatting
    pub config: AnalysisConfig,

    /// Reports to produce; empty means all
    pub reports: Vec<ReportKind>,

    /// Write summary.json next to the reports
    pub write_summary: bool,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            baseline: SnapshotSource::counts_only("2023.csv"),
            target: SnapshotSource::counts_only("2025.csv"),
            mapping: None,
            output_dir: PathBuf::from("trends"),
            config: AnalysisConfig::default(),
            reports: Vec::new(),
            write_summary: true,
            print_summary: false,
        }
    }
}

impl ReportArgs {
    /// Requested reports, with an empty selection meaning all of them
    pub fn selected_reports(&self) -> Vec<ReportKind> {
        if self.reports.is_empty() {
            ReportKind::ALL.to_vec()
        } else {
            let mut reports = self.reports.clone();
            reports.sort();
            reports.dedup();
            reports
        }
    }
}

/// The individual reports a run can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum ReportKind {
    /// Every name with counts, delta, percentage change and bucket
    DeltaSummary,
    /// Full new and disappeared sets
    NewDisappeared,
    /// Top names absent from the first snapshot
    TopNew,
    /// Top names absent from the second snapshot
    TopGone,
    /// Top names per growth bucket
    Buckets,
    /// Top names by volatility
    Volatile,
    /// Top names present in both snapshots
    Common,
    /// Cumulative coverage per snapshot
    Coverage,
}

impl ReportKind {
    pub const ALL: [ReportKind; 8] = [
        ReportKind::DeltaSummary,
        ReportKind::NewDisappeared,
        ReportKind::TopNew,
        ReportKind::TopGone,
        ReportKind::Buckets,
        ReportKind::Volatile,
        ReportKind::Common,
        ReportKind::Coverage,
    ];
}
