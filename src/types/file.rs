//! File-level classification types
//!
//! Every file in the inventory resolves to exactly one [`FileCategory`]
//! from a closed set, plus the confidence and the rule trail that produced it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic role of a single file.
///
/// Declaration order is significant: it is the tie-break order wherever
/// categories with equal counts have to be ranked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Page,
    Component,
    Hook,
    Utility,
    Service,
    Type,
    Enum,
    Constant,
    Config,
    Test,
    Style,
    Layout,
    Middleware,
    Model,
    Repository,
    Controller,
    Route,
    #[default]
    Other,
}

impl FileCategory {
    /// All categories in declaration order
    pub const ALL: [FileCategory; 18] = [
        Self::Page,
        Self::Component,
        Self::Hook,
        Self::Utility,
        Self::Service,
        Self::Type,
        Self::Enum,
        Self::Constant,
        Self::Config,
        Self::Test,
        Self::Style,
        Self::Layout,
        Self::Middleware,
        Self::Model,
        Self::Repository,
        Self::Controller,
        Self::Route,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Component => "component",
            Self::Hook => "hook",
            Self::Utility => "utility",
            Self::Service => "service",
            Self::Type => "type",
            Self::Enum => "enum",
            Self::Constant => "constant",
            Self::Config => "config",
            Self::Test => "test",
            Self::Style => "style",
            Self::Layout => "layout",
            Self::Middleware => "middleware",
            Self::Model => "model",
            Self::Repository => "repository",
            Self::Controller => "controller",
            Self::Route => "route",
            Self::Other => "other",
        }
    }

    /// Categories that accompany a primary file rather than stand alone
    pub fn is_companion(&self) -> bool {
        matches!(self, Self::Style | Self::Test | Self::Type)
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FileCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .find(|c| c.as_str() == lower)
            .copied()
            .ok_or_else(|| format!("Unknown file category: {}", s))
    }
}

/// Confidence of a classification, ordered `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    #[default]
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one file path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileClassification {
    pub path: String,
    pub category: FileCategory,
    pub confidence: Confidence,
    /// Rule names in the order they fired, prefixed by stage
    pub evidence: Vec<String>,
    /// Set when only content analysis could settle the category
    pub needs_deep_inspection: bool,
}

impl FileClassification {
    pub fn new(path: impl Into<String>, category: FileCategory, confidence: Confidence) -> Self {
        Self {
            path: path.into(),
            category,
            confidence,
            evidence: Vec::new(),
            needs_deep_inspection: false,
        }
    }

    pub fn with_evidence(mut self, rule: impl Into<String>) -> Self {
        self.evidence.push(rule.into());
        self
    }

    pub fn flag_deep_inspection(mut self) -> Self {
        self.needs_deep_inspection = true;
        self
    }
}
