//! Deduplicated dependency-management table and its JSON shape.

use crate::types::ManagedDependency;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExclusionEntry {
    pub group: String,
    pub artifact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    /// Empty when the managed dependency declared no version.
    pub version: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<ExclusionEntry>,
}

impl From<&ManagedDependency> for ResolvedEntry {
    fn from(dep: &ManagedDependency) -> Self {
        Self {
            version: dep.version.clone().unwrap_or_default(),
            exclusions: dep
                .exclusions
                .iter()
                .map(|e| ExclusionEntry {
                    group: e.group_id.clone(),
                    artifact: e.artifact_id.clone(),
                })
                .collect(),
        }
    }
}

/// Coordinate key to resolved entry.
///
/// Keys keep the position at which they were first inserted; re-inserting a
/// key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedDependencyTable {
    entries: IndexMap<String, ResolvedEntry>,
}

impl ResolvedDependencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dependencies<I>(dependencies: I) -> Self
    where
        I: IntoIterator<Item = ManagedDependency>,
    {
        let mut table = Self::new();
        for dep in dependencies {
            table.insert(&dep);
        }
        table
    }

    pub fn insert(&mut self, dep: &ManagedDependency) {
        self.entries.insert(dep.key(), ResolvedEntry::from(dep));
    }

    pub fn get(&self, key: &str) -> Option<&ResolvedEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn to_output(&self) -> BomOutput<'_> {
        BomOutput {
            dependency_management: self,
        }
    }

    /// Pretty-printed `{"dependency_management": {...}}` document.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_output())
    }
}

/// Top-level output document.
#[derive(Debug, Serialize)]
pub struct BomOutput<'a> {
    pub dependency_management: &'a ResolvedDependencyTable,
}
