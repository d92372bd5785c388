use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::canonical::load_mapping;
use crate::utils::config::SUMMARY_VERSION;

/// Validate a similarity mapping JSON file
///
/// Fails on unreadable files, non-string entries and chained mappings.
pub fn validate_mapping_file(file_path: PathBuf) -> Result<()> {
    println!("Validating mapping: {}", file_path.display());

    let mapping = load_mapping(&file_path)
        .with_context(|| format!("Invalid mapping {}", file_path.display()))?;

    let identity = mapping.iter().filter(|(raw, canonical)| raw == canonical).count();

    println!("✓ Valid similarity mapping");
    println!("  Entries: {}", mapping.len());
    println!("  Canonical names: {}", mapping.canonical_count());
    println!("  Identity entries: {}", identity);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Skill Trends v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Schema: v{}", SUMMARY_VERSION);
    println!();
    println!("Year-over-year comparison of skill count snapshots.");
}
