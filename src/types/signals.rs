//! Project-wide structural signals produced by the auxiliary extractors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::directory::NamingPattern;

/// Casing tally over every file stem in the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingConvention {
    pub dominant: NamingPattern,
    pub counts: BTreeMap<NamingPattern, usize>,
    /// Names with an unambiguous casing
    pub classified: usize,
    pub total: usize,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            dominant: NamingPattern::Mixed,
            counts: BTreeMap::new(),
            classified: 0,
            total: 0,
        }
    }
}

/// How versions of the same module are kept apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VersionMechanism {
    Directory,
    Prefix,
    Suffix,
    #[default]
    None,
}

impl VersionMechanism {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::Prefix => "prefix",
            Self::Suffix => "suffix",
            Self::None => "none",
        }
    }
}

/// One path segment carrying a version token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionLocation {
    pub path: String,
    pub token: String,
    pub mechanism: VersionMechanism,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VersionIsolation {
    pub mechanism: VersionMechanism,
    /// Distinct tokens, sorted
    pub versions: Vec<String>,
    pub locations: Vec<VersionLocation>,
}

/// What a depth level of the directory tree stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LevelKind {
    Country,
    Region,
    Feature,
    Module,
    #[default]
    Generic,
}

impl LevelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Region => "region",
            Self::Feature => "feature",
            Self::Module => "module",
            Self::Generic => "generic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyLevel {
    pub depth: usize,
    pub kind: LevelKind,
    pub directories: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ModuleHierarchy {
    pub max_depth: usize,
    pub levels: Vec<HierarchyLevel>,
}
