//! Architecture pattern classification types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::file::Confidence;

/// Architecture pattern classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ArchitectureType {
    Monorepo,
    CleanArchitecture,
    FeatureBased,
    Mvc,
    DomainDriven,
    Microservices,
    Layered,
    #[default]
    Unknown,
}

impl ArchitectureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monorepo => "monorepo",
            Self::CleanArchitecture => "clean-architecture",
            Self::FeatureBased => "feature-based",
            Self::Mvc => "mvc",
            Self::DomainDriven => "domain-driven",
            Self::Microservices => "microservices",
            Self::Layered => "layered",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ArchitectureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ArchitectureType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "monorepo" => Ok(Self::Monorepo),
            "clean-architecture" | "clean" => Ok(Self::CleanArchitecture),
            "feature-based" | "feature" => Ok(Self::FeatureBased),
            "mvc" => Ok(Self::Mvc),
            "domain-driven" | "ddd" => Ok(Self::DomainDriven),
            "microservices" => Ok(Self::Microservices),
            "layered" => Ok(Self::Layered),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!(
                "Unknown architecture pattern: {}. Valid values: monorepo, clean-architecture, \
                 feature-based, mvc, domain-driven, microservices, layered",
                s
            )),
        }
    }
}

/// Feature directories and their shared siblings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FeatureStructure {
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<Vec<String>>,
}

/// A pattern that crossed its detection threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternCandidate {
    #[serde(rename = "type")]
    pub pattern_type: ArchitectureType,
    pub confidence: Confidence,
    pub indicators: Vec<String>,
}

/// Best-fit architecture for the whole project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitecturePattern {
    #[serde(rename = "type")]
    pub pattern_type: ArchitectureType,
    pub confidence: Confidence,
    pub indicators: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_structure: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_structure: Option<FeatureStructure>,
    /// Every pattern that crossed its threshold, in evaluation order
    pub candidates: Vec<PatternCandidate>,
}

impl ArchitecturePattern {
    pub fn unknown() -> Self {
        Self {
            pattern_type: ArchitectureType::Unknown,
            confidence: Confidence::Low,
            indicators: Vec::new(),
            layer_structure: None,
            feature_structure: None,
            candidates: Vec::new(),
        }
    }
}

impl Default for ArchitecturePattern {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Optional host-supplied hints for pattern detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ArchitectureHints {
    /// Pattern to prefer when its own indicators are present
    pub preferred_pattern: Option<ArchitectureType>,
}
