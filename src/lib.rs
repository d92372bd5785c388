//! Skill Trends
//!
//! Year-over-year comparison of skill count snapshots: per-name deltas,
//! growth buckets, new and disappeared sets, cumulative coverage and
//! bucketed top-N selections.
//!
//! This crate provides the core implementation for the
//! `skill-trends` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! skill-trends report --baseline-counts 2023.csv --target-counts 2025.csv \
//!     --mapping similar_skills.json --output-dir trends --summary
//! ```
//!
//! ## Library use
//!
//! ```ignore
//! use skill_trends::diff::{bucket_top_n, compute_deltas};
//! use skill_trends::loader::load_count_table;
//!
//! let baseline = load_count_table("2023.csv")?.table;
//! let target = load_count_table("2025.csv")?.table;
//! let merged = compute_deltas(&baseline, &target);
//! let buckets = bucket_top_n(&merged, 100);
//! ```

pub mod aggregator;
pub mod canonical;
pub mod commands;
pub mod diff;
pub mod loader;
pub mod output;
pub mod utils;
