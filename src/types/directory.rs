//! Directory-level types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::file::FileCategory;

/// Per-directory category counts over the directory's direct files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryHistogram {
    pub directory_path: String,
    pub counts: BTreeMap<FileCategory, usize>,
    pub total: usize,
}

impl DirectoryHistogram {
    pub fn new(directory_path: impl Into<String>) -> Self {
        Self {
            directory_path: directory_path.into(),
            counts: BTreeMap::new(),
            total: 0,
        }
    }

    pub fn record(&mut self, category: FileCategory) {
        *self.counts.entry(category).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn count(&self, category: FileCategory) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Dominant file-naming casing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NamingPattern {
    #[serde(rename = "PascalCase")]
    PascalCase,
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "kebab-case")]
    KebabCase,
    #[serde(rename = "snake_case")]
    SnakeCase,
    #[serde(rename = "mixed")]
    Mixed,
}

impl NamingPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PascalCase => "PascalCase",
            Self::CamelCase => "camelCase",
            Self::KebabCase => "kebab-case",
            Self::SnakeCase => "snake_case",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for NamingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether companion files live next to the directory's primary files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CoLocation {
    pub styles: bool,
    pub tests: bool,
    pub types: bool,
}

impl CoLocation {
    pub fn any(&self) -> bool {
        self.styles || self.tests || self.types
    }
}

/// Cascade stage that produced a directory's final purpose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PurposeStage {
    Dependency,
    Keyword,
    Inferred,
    Inherited,
    #[default]
    Fallback,
}

/// Full analysis of one directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryAnalysis {
    pub path: String,
    pub name: String,
    pub purpose: String,
    pub category: FileCategory,
    pub purpose_stage: PurposeStage,
    pub primary_categories: Vec<FileCategory>,
    pub naming_pattern: NamingPattern,
    pub co_location: CoLocation,
    pub has_index_file: bool,
    pub depth: usize,
    pub file_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_directory: Option<String>,
    pub child_directories: Vec<String>,
}
