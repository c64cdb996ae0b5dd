//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/codeshape/) and project (.codeshape/) level configuration.

use serde::{Deserialize, Serialize};

use crate::analyzer::AnalysisOptions;
use crate::constants::classification::{NAMING_DOMINANCE_THRESHOLD, PRIMARY_CATEGORY_THRESHOLD};
use crate::constants::pipeline::{AUTO_WORKERS, MAX_WORKERS};
use crate::constants::scanner::DEFAULT_MAX_FILE_SIZE;
use crate::types::{AnalysisInput, ArchitectureHints, ModuleDescriptor, Result, ShapeError};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Scanning and threshold settings
    pub analysis: AnalysisConfig,

    /// Named modules rooted at path prefixes
    pub modules: Vec<ModuleDescriptor>,

    /// Architecture hints from the host
    pub hints: ArchitectureHints,

    /// Third-party package names known to the host
    pub dependencies: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            analysis: AnalysisConfig::default(),
            modules: Vec::new(),
            hints: ArchitectureHints::default(),
            dependencies: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `ShapeError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        let ratios = [
            ("primary_threshold", self.analysis.primary_threshold),
            ("naming_dominance", self.analysis.naming_dominance),
        ];
        for (name, value) in ratios {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ShapeError::Config(format!(
                    "analysis.{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.analysis.workers > MAX_WORKERS {
            return Err(ShapeError::Config(format!(
                "analysis.workers must be at most {}, got {}",
                MAX_WORKERS, self.analysis.workers
            )));
        }

        if self.analysis.max_file_size == 0 {
            return Err(ShapeError::Config(
                "analysis.max_file_size must be greater than 0".to_string(),
            ));
        }

        if let Some(module) = self.modules.iter().find(|m| m.name.trim().is_empty()) {
            return Err(ShapeError::Config(format!(
                "module at '{}' has an empty name",
                module.path
            )));
        }

        Ok(())
    }

    /// Pipeline tunables derived from this configuration
    pub fn to_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            workers: self.analysis.workers,
            primary_threshold: self.analysis.primary_threshold,
            naming_dominance: self.analysis.naming_dominance,
        }
    }

    /// Attach modules, hints and dependencies to a path list
    pub fn to_input(&self, paths: Vec<String>) -> AnalysisInput {
        AnalysisInput::new(paths)
            .with_modules(self.modules.clone())
            .with_hints(self.hints.clone())
            .with_dependencies(self.dependencies.iter().cloned())
    }
}

// =============================================================================
// Analysis Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Glob patterns to include (all files when empty)
    pub include: Vec<String>,

    /// Glob patterns to exclude
    pub exclude: Vec<String>,

    /// Files larger than this are left out of the inventory (bytes)
    pub max_file_size: u64,

    /// Worker threads (0 = one per core)
    pub workers: usize,

    /// Minimum share for a category to count as primary in a directory
    pub primary_threshold: f64,

    /// Share a casing needs to dominate the naming convention
    pub naming_dominance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            workers: AUTO_WORKERS,
            primary_threshold: PRIMARY_CATEGORY_THRESHOLD,
            naming_dominance: NAMING_DOMINANCE_THRESHOLD,
        }
    }
}
