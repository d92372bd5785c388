//! Report command implementation.
//!
//! The report command:
//! 1. Loads both snapshots
//! 2. Canonicalizes names (if a mapping is given)
//! 3. Computes per-name deltas
//! 4. Writes each requested report
//! 5. Writes the run summary
//!
//! Every report is produced independently. A report that fails is logged
//! and recorded in the summary; the others are still written.

use super::models::{ReportArgs, ReportKind};
use crate::aggregator::{calculate_distribution, compute_cumulative_coverage, names_to_reach};
use crate::canonical::{canonicalize, load_mapping, SimilarityMapping};
use crate::diff::{
    bucket_top_n, calculate_totals_delta, compute_deltas, find_new_and_disappeared, top_common,
    top_gainers, top_gone, top_losers, top_new, top_volatile, GrowthBucket, MergedRecord,
};
use crate::loader::{load_snapshot, CountTable};
use crate::output::tables::{
    bucket_table, common_table, coverage_table, delta_summary_table, presence_table,
    single_count_table, volatility_table,
};
use crate::output::{
    render_terminal_summary, write_summary, write_table, PercentFormat, ReportOutcome,
    ReportTable, RunSummary, SnapshotLabels,
};
use crate::utils::config::{MAX_TOP_N, SUMMARY_VERSION};
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Movers listed in the run summary
const SUMMARY_MOVERS: usize = 10;

/// Everything a single report needs, computed once per run
struct ReportContext<'a> {
    output_dir: &'a Path,
    labels: SnapshotLabels,
    percent: PercentFormat,
    top_n: usize,
    baseline: &'a CountTable,
    target: &'a CountTable,
    merged: &'a [MergedRecord],
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The run summary; check `has_failures()` for reports that did not make it
///
/// # Errors
/// * Snapshot load failures (missing files, schema errors)
/// * Mapping load or validation failures
/// * Summary write failures
///
/// # Example
/// ```ignore
/// let args = ReportArgs {
///     baseline: SnapshotSource::counts_only("2023.csv"),
///     target: SnapshotSource::counts_only("2025.csv"),
///     ..Default::default()
/// };
///
/// let summary = execute_report(&args)?;
/// ```
pub fn execute_report(args: &ReportArgs) -> Result<RunSummary> {
    let start_time = Instant::now();
    let config = &args.config;

    // Step 1: Load snapshots
    info!("Step 1/5: Loading snapshots...");
    let baseline = load_snapshot(&args.baseline, &config.name_column).with_context(|| {
        format!("Failed to load {} snapshot", config.baseline_label)
    })?;
    let target = load_snapshot(&args.target, &config.name_column)
        .with_context(|| format!("Failed to load {} snapshot", config.target_label))?;

    // Step 2: Canonicalize
    let mapping = match &args.mapping {
        Some(path) => {
            info!("Step 2/5: Canonicalizing names...");
            load_mapping(path).context("Failed to load similarity mapping")?
        }
        None => {
            info!("Step 2/5: Skipping canonicalization (no mapping)");
            SimilarityMapping::new()
        }
    };
    let baseline_table = canonicalize(&baseline.table, &mapping);
    let target_table = canonicalize(&target.table, &mapping);

    // Step 3: Compute deltas
    info!("Step 3/5: Computing deltas...");
    let merged = compute_deltas(&baseline_table, &target_table);
    debug!("{} merged records", merged.len());

    // Step 4: Write reports
    let selected = args.selected_reports();
    info!("Step 4/5: Writing {} report groups to {}...", selected.len(), args.output_dir.display());

    let ctx = ReportContext {
        output_dir: &args.output_dir,
        labels: SnapshotLabels::new(&config.baseline_label, &config.target_label),
        percent: PercentFormat::from_rounding(config.round_percentages),
        top_n: config.top_n,
        baseline: &baseline_table,
        target: &target_table,
        merged: &merged,
    };

    let mut outcomes = Vec::new();
    for kind in selected {
        run_report(kind, &ctx, &mut outcomes);
    }

    // Step 5: Summary
    info!("Step 5/5: Summarizing...");
    let summary = build_summary(&ctx, vec![baseline.report, target.report], mapping.len(), outcomes);

    log_coverage_milestones(&ctx);

    if args.write_summary {
        write_summary(&summary, args.output_dir.join("summary.json"))
            .context("Failed to write run summary")?;
    }

    if args.print_summary {
        println!("{}", render_terminal_summary(&summary));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(summary)
}

/// Produce the file(s) belonging to one report kind
///
/// **Private** - internal helper for execute_report
fn run_report(kind: ReportKind, ctx: &ReportContext, outcomes: &mut Vec<ReportOutcome>) {
    let labels = &ctx.labels;

    match kind {
        ReportKind::DeltaSummary => emit(ctx, "delta_summary", outcomes, || {
            Ok(delta_summary_table(ctx.merged, labels, ctx.percent))
        }),

        ReportKind::NewDisappeared => {
            let sets = find_new_and_disappeared(ctx.merged);
            emit(ctx, "new_skills", outcomes, || Ok(presence_table(&sets.new, labels)));
            emit(ctx, "disappeared_skills", outcomes, || {
                Ok(presence_table(&sets.disappeared, labels))
            });
        }

        ReportKind::TopNew => emit(ctx, "top_new_skills", outcomes, || {
            let top = top_new(ctx.baseline, ctx.target, ctx.top_n);
            Ok(single_count_table(&top, &labels.target))
        }),

        ReportKind::TopGone => emit(ctx, "top_gone_skills", outcomes, || {
            let top = top_gone(ctx.baseline, ctx.target, ctx.top_n);
            Ok(single_count_table(&top, &labels.baseline))
        }),

        ReportKind::Buckets => {
            for (bucket, records) in bucket_top_n(ctx.merged, ctx.top_n) {
                let name = format!("top_{}_skills", bucket.key());
                emit(ctx, &name, outcomes, || {
                    Ok(bucket_table(&records, labels, ctx.percent))
                });
            }
        }

        ReportKind::Volatile => emit(ctx, "top_volatile_skills", outcomes, || {
            let volatile = top_volatile(ctx.merged, ctx.top_n);
            Ok(volatility_table(&volatile, ctx.percent))
        }),

        ReportKind::Common => emit(ctx, "top_common_skills", outcomes, || {
            let common = top_common(ctx.baseline, ctx.target, ctx.top_n);
            Ok(common_table(&common, labels))
        }),

        ReportKind::Coverage => {
            for (label, table) in [(&labels.baseline, ctx.baseline), (&labels.target, ctx.target)] {
                let name = format!("coverage_{}", label);
                emit(ctx, &name, outcomes, || {
                    let coverage = compute_cumulative_coverage(table)
                        .with_context(|| format!("Coverage for {} snapshot", label))?;
                    Ok(coverage_table(&coverage, ctx.percent))
                });
            }
        }
    }
}

/// Build one report table and write it, recording the outcome
///
/// Errors are contained here so that one failing report never stops the
/// others.
fn emit<F>(ctx: &ReportContext, report: &str, outcomes: &mut Vec<ReportOutcome>, build: F)
where
    F: FnOnce() -> Result<ReportTable>,
{
    let path = ctx.output_dir.join(format!("{}.csv", report));

    let result = build().and_then(|table| {
        write_table(&table, &path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(table.len())
    });

    let outcome = match result {
        Ok(rows) => ReportOutcome {
            report: report.to_string(),
            path,
            rows,
            error: None,
        },
        Err(e) => {
            warn!("Report {} failed: {:#}", report, e);
            remove_stale_report(&path);
            ReportOutcome {
                report: report.to_string(),
                path,
                rows: 0,
                error: Some(format!("{:#}", e)),
            }
        }
    };

    outcomes.push(outcome);
}

/// Delete a report file left by an earlier run
///
/// A failed report must not leave an out-of-date CSV next to fresh ones.
fn remove_stale_report(path: &Path) {
    if !path.is_file() {
        return;
    }

    match fs::remove_file(path) {
        Ok(()) => warn!("Removed stale {}", path.display()),
        Err(e) => warn!("Stale {} could not be removed: {}", path.display(), e),
    }
}

fn build_summary(
    ctx: &ReportContext,
    loads: Vec<crate::loader::LoadReport>,
    mapping_entries: usize,
    reports: Vec<ReportOutcome>,
) -> RunSummary {
    let mut bucket_counts: BTreeMap<GrowthBucket, usize> = BTreeMap::new();
    for record in ctx.merged {
        *bucket_counts.entry(record.growth_bucket).or_insert(0) += 1;
    }

    let sets = find_new_and_disappeared(ctx.merged);

    let baseline_distribution = calculate_distribution(ctx.baseline);
    let target_distribution = calculate_distribution(ctx.target);
    info!("{}: {}", ctx.labels.baseline, baseline_distribution.summary());
    info!("{}: {}", ctx.labels.target, target_distribution.summary());

    RunSummary {
        version: SUMMARY_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        baseline_label: ctx.labels.baseline.clone(),
        target_label: ctx.labels.target.clone(),
        loads,
        mapping_entries,
        totals: calculate_totals_delta(ctx.baseline, ctx.target),
        baseline_distribution,
        target_distribution,
        bucket_counts,
        new_count: sets.new.len(),
        disappeared_count: sets.disappeared.len(),
        top_gainers: top_gainers(ctx.merged, SUMMARY_MOVERS),
        top_losers: top_losers(ctx.merged, SUMMARY_MOVERS),
        reports,
    }
}

fn log_coverage_milestones(ctx: &ReportContext) {
    for (label, table) in [(&ctx.labels.baseline, ctx.baseline), (&ctx.labels.target, ctx.target)] {
        if let Ok(coverage) = compute_cumulative_coverage(table) {
            if let Some(rank) = names_to_reach(&coverage, 80.0) {
                debug!("{}: top {} names cover 80% of mentions", label, rank);
            }
        }
    }
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    let config = &args.config;

    if config.top_n == 0 {
        anyhow::bail!("top_n must be greater than 0");
    }

    if config.top_n > MAX_TOP_N {
        anyhow::bail!("top_n is too large (max {})", MAX_TOP_N);
    }

    for label in [&config.baseline_label, &config.target_label] {
        if label.trim().is_empty() {
            anyhow::bail!("Snapshot labels cannot be empty");
        }
        if label.contains(['/', '\\']) {
            anyhow::bail!("Snapshot label '{}' cannot contain path separators", label);
        }
    }

    if config.baseline_label == config.target_label {
        anyhow::bail!("Snapshot labels must differ (both are '{}')", config.baseline_label);
    }

    if config.name_column.trim().is_empty() {
        anyhow::bail!("Name column cannot be empty");
    }

    for source in [&args.baseline, &args.target] {
        if source.counts.as_os_str().is_empty() {
            anyhow::bail!("Count file path cannot be empty");
        }
    }

    Ok(())
}
