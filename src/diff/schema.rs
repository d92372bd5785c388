//! Schema definitions for snapshot comparisons.
//!
//! Defines the structures that represent differences between two snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical label summarizing percentage change
///
/// Variant order is the report order: `New` first, then the ranked buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GrowthBucket {
    /// Absent from the first snapshot (percentage change undefined)
    #[serde(rename = "New")]
    New,
    /// More than 50% growth
    #[serde(rename = "High growth")]
    HighGrowth,
    /// More than 10%, up to 50% growth
    #[serde(rename = "Moderate growth")]
    ModerateGrowth,
    /// Within -10%..=10%
    #[serde(rename = "Flat")]
    Flat,
    /// More than 10% decrease
    #[serde(rename = "Decline")]
    Decline,
}

impl GrowthBucket {
    /// Buckets that carry a defined percentage change, in report order
    pub const RANKED: [GrowthBucket; 4] = [
        GrowthBucket::HighGrowth,
        GrowthBucket::ModerateGrowth,
        GrowthBucket::Flat,
        GrowthBucket::Decline,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GrowthBucket::New => "New",
            GrowthBucket::HighGrowth => "High growth",
            GrowthBucket::ModerateGrowth => "Moderate growth",
            GrowthBucket::Flat => "Flat",
            GrowthBucket::Decline => "Decline",
        }
    }

    /// Label with its range, for headings
    pub fn description(&self) -> &'static str {
        match self {
            GrowthBucket::New => "New (absent in first snapshot)",
            GrowthBucket::HighGrowth => "High growth (>50%)",
            GrowthBucket::ModerateGrowth => "Moderate growth (10-50%)",
            GrowthBucket::Flat => "Flat (±10%)",
            GrowthBucket::Decline => "Decline (>10% decrease)",
        }
    }

    /// Snake-case key used in file names
    pub fn key(&self) -> &'static str {
        match self {
            GrowthBucket::New => "new",
            GrowthBucket::HighGrowth => "high_growth",
            GrowthBucket::ModerateGrowth => "moderate_growth",
            GrowthBucket::Flat => "flat",
            GrowthBucket::Decline => "decline",
        }
    }
}

impl fmt::Display for GrowthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One name compared across both snapshots
///
/// Names absent from one side carry a zero count there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub name: String,

    /// Count in the first snapshot
    pub count_a: u64,

    /// Count in the second snapshot
    pub count_b: u64,

    /// count_b - count_a
    pub delta: i64,

    /// Percentage change; `None` when count_a is zero
    pub pct_change: Option<f64>,

    /// |pct_change|; `None` whenever pct_change is
    pub volatility: Option<f64>,

    pub growth_bucket: GrowthBucket,
}

/// Names missing from one of the two snapshots
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewAndDisappeared {
    /// count_a == 0
    pub new: Vec<MergedRecord>,

    /// count_b == 0
    pub disappeared: Vec<MergedRecord>,
}

/// A name present in both snapshots, ranked by combined volume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonRecord {
    pub name: String,
    pub count_a: u64,
    pub count_b: u64,
    pub total: u64,
}

/// Change in overall volume between snapshots
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalsDelta {
    pub baseline_total: u128,
    pub target_total: u128,
    pub baseline_names: usize,
    pub target_names: usize,
    pub absolute_change: i128,
    pub percent_change: Option<f64>,
}
