//! Name canonicalization.
//!
//! Merges near-duplicate names into one counted entity through an
//! external raw -> canonical mapping before snapshots are compared.

pub mod mapping;
pub mod merge;

pub use mapping::{load_mapping, SimilarityMapping};
pub use merge::canonicalize;
