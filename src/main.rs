//! Skill Trends CLI
//!
//! Compares two skill count snapshots and writes delta, growth bucket,
//! set-difference and coverage reports.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use skill_trends::commands::{
    display_version, execute_report, validate_args, validate_mapping_file, ReportArgs, ReportKind,
};
use skill_trends::loader::SnapshotSource;
use skill_trends::utils::config::{load_config, AnalysisConfig};

/// Skill Trends - year-over-year skill snapshot comparison
#[derive(Parser, Debug)]
#[command(name = "skill-trends")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two snapshots and write the reports
    Report {
        /// Aggregate counts for the first snapshot (name,count)
        #[arg(long, alias = "counts-2023", default_value = "2023.csv")]
        baseline_counts: PathBuf,

        /// Aggregate counts for the second snapshot (name,count)
        #[arg(long, alias = "counts-2025", default_value = "2025.csv")]
        target_counts: PathBuf,

        /// Raw name list for the first snapshot, joined onto its counts
        #[arg(long, alias = "skills-2023")]
        baseline_names: Option<PathBuf>,

        /// Raw name list for the second snapshot, joined onto its counts
        #[arg(long, alias = "skills-2025")]
        target_names: Option<PathBuf>,

        /// Similarity mapping JSON (raw name -> canonical name)
        #[arg(short, long, env = "SKILL_TRENDS_MAPPING")]
        mapping: Option<PathBuf>,

        /// Directory for report files
        #[arg(short, long, default_value = "trends")]
        output_dir: PathBuf,

        /// Analysis config TOML (cutoffs, labels, formatting)
        #[arg(short, long, env = "SKILL_TRENDS_CONFIG")]
        config: Option<PathBuf>,

        /// Number of rows per top-N report
        #[arg(short = 'n', long)]
        top_n: Option<usize>,

        /// Only produce these reports (repeatable; default all)
        #[arg(long = "report", value_enum)]
        reports: Vec<ReportKind>,

        /// Render percentages as rounded "NN%" strings
        #[arg(long)]
        round_percentages: bool,

        /// Label for the first snapshot
        #[arg(long)]
        baseline_label: Option<String>,

        /// Label for the second snapshot
        #[arg(long)]
        target_label: Option<String>,

        /// Column holding names in raw name lists
        #[arg(long)]
        name_column: Option<String>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Do not write summary.json
        #[arg(long)]
        no_summary_file: bool,
    },

    /// Validate a similarity mapping JSON file
    ValidateMapping {
        /// Path to mapping JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            baseline_counts,
            target_counts,
            baseline_names,
            target_names,
            mapping,
            output_dir,
            config,
            top_n,
            reports,
            round_percentages,
            baseline_label,
            target_label,
            name_column,
            summary,
            no_summary_file,
        } => {
            // Config file first, command line flags on top
            let mut analysis = match config {
                Some(path) => load_config(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => AnalysisConfig::default(),
            };

            if let Some(n) = top_n {
                analysis.top_n = n;
            }
            if let Some(label) = baseline_label {
                analysis.baseline_label = label;
            }
            if let Some(label) = target_label {
                analysis.target_label = label;
            }
            if let Some(column) = name_column {
                analysis.name_column = column;
            }
            analysis.round_percentages |= round_percentages;

            let args = ReportArgs {
                baseline: SnapshotSource {
                    counts: baseline_counts,
                    names: baseline_names,
                },
                target: SnapshotSource {
                    counts: target_counts,
                    names: target_names,
                },
                mapping,
                output_dir,
                config: analysis,
                reports,
                write_summary: !no_summary_file,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            let run = execute_report(&args)?;

            if run.has_failures() {
                let failed: Vec<&str> = run.failed_reports().map(|r| r.report.as_str()).collect();
                anyhow::bail!("{} report(s) failed: {}", failed.len(), failed.join(", "));
            }
        }

        Commands::ValidateMapping { file } => {
            validate_mapping_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
