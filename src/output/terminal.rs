//! Terminal output rendering for run summaries.
//!
//! Provides a human-readable overview of a snapshot comparison with
//! visual cues for growth and decline.

use super::format::format_percent;
use super::summary::RunSummary;
use crate::diff::{GrowthBucket, MergedRecord};
use colored::*;

/// Render a human-readable summary of a run for the terminal
pub fn render_terminal_summary(summary: &RunSummary) -> String {
    let mut out = String::new();

    out.push_str(&render_header(summary));
    out.push_str(&render_totals(summary));
    out.push_str(&render_buckets(summary));
    out.push_str(&render_movers("Top Gainers", &summary.top_gainers));
    out.push_str(&render_movers("Top Losers", &summary.top_losers));
    out.push_str(&render_status(summary));

    out
}

fn render_header(summary: &RunSummary) -> String {
    let mut out = String::new();
    out.push_str("\n📊 ");
    out.push_str(&"Skill Snapshot Comparison".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&format!(
        "Baseline: {}    Target: {}\n",
        summary.baseline_label, summary.target_label
    ));
    if summary.mapping_entries > 0 {
        out.push_str(&format!(
            "Canonicalized through {} mapping entries\n",
            summary.mapping_entries
        ));
    }
    out.push_str("---------------------------------------------------\n\n");
    out
}

fn render_totals(summary: &RunSummary) -> String {
    let totals = &summary.totals;
    let symbol = get_delta_symbol(totals.absolute_change);
    let pct = match totals.percent_change {
        Some(_) => format!(" ({})", format_percent(totals.percent_change)),
        None => String::new(),
    };

    let mut out = format!(
        "{} Total Mentions: {} -> {}{}\n",
        symbol, totals.baseline_total, totals.target_total, pct
    );
    out.push_str(&format!(
        "   Distinct Names: {} -> {} ({} new, {} disappeared)\n",
        totals.baseline_names, totals.target_names, summary.new_count, summary.disappeared_count
    ));
    out
}

fn render_buckets(summary: &RunSummary) -> String {
    let mut out = String::from("\nGrowth Buckets:\n");
    for (bucket, count) in &summary.bucket_counts {
        let label = match bucket {
            GrowthBucket::HighGrowth | GrowthBucket::ModerateGrowth => {
                bucket.description().green()
            }
            GrowthBucket::Decline => bucket.description().red(),
            GrowthBucket::New => bucket.description().cyan(),
            GrowthBucket::Flat => bucket.description().normal(),
        };
        out.push_str(&format!("  {:>6}  {}\n", count, label));
    }
    out
}

fn render_movers(title: &str, movers: &[MergedRecord]) -> String {
    let mut out = String::new();
    if movers.is_empty() {
        return out;
    }

    out.push_str(&format!("\n{}:\n", title));
    for record in movers {
        let symbol = get_delta_symbol(i128::from(record.delta));
        let pct = match record.pct_change {
            Some(_) => format_percent(record.pct_change),
            None => "new".to_string(),
        };
        out.push_str(&format!(
            "  {} {}: {} -> {} ({:+}, {})\n",
            symbol, record.name, record.count_a, record.count_b, record.delta, pct
        ));
    }
    out
}

fn render_status(summary: &RunSummary) -> String {
    let mut out = String::new();
    out.push_str("\n---------------------------------------------------\n");

    let failed = summary.failed_reports().count();
    let status_msg = if failed > 0 {
        format!("❌ STATUS: {} of {} reports failed", failed, summary.reports.len())
            .red()
            .bold()
    } else {
        format!("✅ STATUS: {} reports written", summary.reports.len())
            .green()
            .bold()
    };
    out.push_str(&status_msg.to_string());
    out.push('\n');

    for outcome in summary.failed_reports() {
        if let Some(error) = &outcome.error {
            out.push_str(&format!("   {}: {}\n", outcome.report, error));
        }
    }
    out
}

fn get_delta_symbol(change: i128) -> &'static str {
    if change > 0 {
        "📈"
    } else if change < 0 {
        "📉"
    } else {
        "➡️"
    }
}
