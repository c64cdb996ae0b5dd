//! Project-level input and output types
//!
//! [`AnalysisInput`] is everything the pipeline consumes; [`ProjectFingerprint`]
//! is everything it produces.

use serde::{Deserialize, Serialize};

use super::architecture::{ArchitectureHints, ArchitecturePattern};
use super::directory::DirectoryAnalysis;
use super::error::InputErrorKind;
use super::file::FileClassification;
use super::signals::{ModuleHierarchy, NamingConvention, VersionIsolation};

/// A named module rooted at a path prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub name: String,
    pub path: String,
}

impl ModuleDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Pipeline input. Only `paths` is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisInput {
    /// Pre-filtered file paths, relative to `root` or absolute under it
    pub paths: Vec<String>,
    /// Declared project root for absolute paths
    pub root: Option<String>,
    pub modules: Vec<ModuleDescriptor>,
    pub hints: ArchitectureHints,
    /// Third-party package names known to the host
    pub dependencies: Vec<String>,
}

impl AnalysisInput {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_modules(mut self, modules: Vec<ModuleDescriptor>) -> Self {
        self.modules = modules;
        self
    }

    pub fn with_hints(mut self, hints: ArchitectureHints) -> Self {
        self.hints = hints;
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }
}

/// An input path the pipeline refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedInput {
    pub path: String,
    pub reason: InputErrorKind,
}

/// The complete structural fingerprint of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFingerprint {
    pub file_classifications: Vec<FileClassification>,
    pub directory_analyses: Vec<DirectoryAnalysis>,
    pub architecture_pattern: ArchitecturePattern,
    pub naming_convention: NamingConvention,
    pub version_isolation: VersionIsolation,
    pub module_hierarchy: ModuleHierarchy,
    pub skipped: Vec<SkippedInput>,
    /// Module names whose path matched no file
    pub unattributed_modules: Vec<String>,
}

impl ProjectFingerprint {
    /// Look up a directory analysis by path
    pub fn directory(&self, path: &str) -> Option<&DirectoryAnalysis> {
        self.directory_analyses.iter().find(|d| d.path == path)
    }

    /// Look up a file classification by path
    pub fn file(&self, path: &str) -> Option<&FileClassification> {
        self.file_classifications.iter().find(|f| f.path == path)
    }

    pub fn summary(&self) -> String {
        format!(
            "ProjectFingerprint{{ files: {}, directories: {}, architecture: {} ({}), naming: {}, skipped: {} }}",
            self.file_classifications.len(),
            self.directory_analyses.len(),
            self.architecture_pattern.pattern_type,
            self.architecture_pattern.confidence,
            self.naming_convention.dominant,
            self.skipped.len()
        )
    }
}
