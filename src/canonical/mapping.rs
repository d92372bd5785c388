//! Similarity mapping: raw name -> canonical name.
//!
//! Lookups are single-step. A mapping whose target is itself remapped
//! (a chain, or a cycle) is rejected at load time instead of being
//! resolved transitively.

use crate::utils::error::MappingError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Raw name -> canonical name lookup table
///
/// Not total: names without an entry pass through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimilarityMapping {
    entries: BTreeMap<String, String>,
}

impl SimilarityMapping {
    /// Empty mapping (identity)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a validated mapping from (raw, canonical) pairs
    ///
    /// # Errors
    /// * `MappingError::InvalidEntry` - Blank raw or canonical name
    /// * `MappingError::ChainedMapping` - A canonical name is itself remapped
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mapping = Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        };
        mapping.validate()?;
        Ok(mapping)
    }

    /// Canonical name for `name`, or `name` itself when unmapped
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.entries.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (raw, canonical) pairs ordered by raw name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of distinct canonical names the mapping produces
    pub fn canonical_count(&self) -> usize {
        self.entries.values().collect::<BTreeSet<_>>().len()
    }

    /// Reject blank names and chained or cyclic entries
    pub fn validate(&self) -> Result<(), MappingError> {
        for (from, to) in &self.entries {
            if from.trim().is_empty() || to.trim().is_empty() {
                return Err(MappingError::InvalidEntry(format!(
                    "blank name in entry '{}' -> '{}'",
                    from, to
                )));
            }

            if from == to {
                continue;
            }

            if let Some(next) = self.entries.get(to) {
                if next != to {
                    return Err(MappingError::ChainedMapping {
                        from: from.clone(),
                        via: to.clone(),
                        to: next.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Load a similarity mapping from a flat JSON object
///
/// An empty file yields the identity mapping.
///
/// # Errors
/// * `MappingError::Io` - If file cannot be read
/// * `MappingError::Json` - If the file is not a flat string -> string object
/// * `MappingError::ChainedMapping` / `InvalidEntry` - See [`SimilarityMapping::validate`]
///
/// # Example
/// ```ignore
/// let mapping = load_mapping("similar_skills.json")?;
/// ```
pub fn load_mapping(path: impl AsRef<Path>) -> Result<SimilarityMapping, MappingError> {
    let path = path.as_ref();
    info!("Loading similarity mapping: {}", path.display());

    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        debug!("Mapping file is empty, using identity mapping");
        return Ok(SimilarityMapping::new());
    }

    let mapping: SimilarityMapping = serde_json::from_str(&contents)?;
    mapping.validate()?;

    debug!("Loaded {} mapping entries", mapping.len());
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_passes_unmapped_through() {
        let mapping = SimilarityMapping::from_entries([("js", "javascript")]).unwrap();
        assert_eq!(mapping.resolve("js"), "javascript");
        assert_eq!(mapping.resolve("rust"), "rust");
    }

    #[test]
    fn test_chain_is_rejected() {
        let err = SimilarityMapping::from_entries([("js", "ecmascript"), ("ecmascript", "javascript")])
            .unwrap_err();
        match err {
            MappingError::ChainedMapping { from, via, to } => {
                assert_eq!(from, "js");
                assert_eq!(via, "ecmascript");
                assert_eq!(to, "javascript");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_cycle_is_rejected() {
        let result = SimilarityMapping::from_entries([("a", "b"), ("b", "a")]);
        assert!(matches!(result, Err(MappingError::ChainedMapping { .. })));
    }

    #[test]
    fn test_self_mapping_is_allowed() {
        let mapping =
            SimilarityMapping::from_entries([("js", "javascript"), ("javascript", "javascript")])
                .unwrap();
        assert_eq!(mapping.resolve("javascript"), "javascript");
    }

    #[test]
    fn test_blank_entry_is_rejected() {
        let result = SimilarityMapping::from_entries([("", "javascript")]);
        assert!(matches!(result, Err(MappingError::InvalidEntry(_))));
    }

    #[test]
    fn test_load_mapping_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapping.json");
        fs::write(&path, r#"{"js": "javascript", "py": "python"}"#).unwrap();

        let mapping = load_mapping(&path).unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.resolve("py"), "python");
    }

    #[test]
    fn test_load_mapping_empty_file_is_identity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapping.json");
        fs::write(&path, "  \n").unwrap();

        assert!(load_mapping(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_mapping_rejects_nested_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapping.json");
        fs::write(&path, r#"{"js": ["javascript"]}"#).unwrap();

        assert!(matches!(load_mapping(&path), Err(MappingError::Json(_))));
    }
}
