//! File Type Classifier
//!
//! Assigns every file path a [`FileCategory`] through a three-stage cascade:
//!
//! 1. **Fast path** (`high`): name, extension and ancestor rules
//! 2. **Naming** (`medium`): basename casing, source files only
//! 3. **Directory** (`high`): immediate parent name against a keyword table
//!
//! Anything left over is `other` / `low` and flagged for deep inspection.
//! The classifier is a pure function of the path string; file contents are
//! never read.

pub mod directory;
pub mod fast_path;
pub mod naming;
pub mod parts;

use crate::types::utils::normalize_path;
use crate::types::{Confidence, FileCategory, FileClassification};

pub use directory::category_for_dir_name;
pub use parts::PathParts;

/// Classify a single path. Never fails.
pub fn classify(path: &str) -> FileClassification {
    let normalized = normalize_path(path);
    let parts = PathParts::parse(&normalized);

    if parts.name.is_empty() {
        return fallback(&normalized);
    }

    if let Some(rule) = fast_path::first_match(&parts) {
        return FileClassification::new(normalized.as_str(), rule.category, Confidence::High)
            .with_evidence(format!("fast:{}", rule.name));
    }

    if let Some((category, casing)) = naming::classify_by_naming(&parts) {
        let result = FileClassification::new(normalized.as_str(), category, Confidence::Medium)
            .with_evidence(format!("naming:{}", casing.label()));
        return if naming::is_ambiguous(&parts, casing) {
            result.flag_deep_inspection()
        } else {
            result
        };
    }

    if let Some((category, dir)) = directory::classify_by_directory(&parts) {
        return FileClassification::new(normalized.as_str(), category, Confidence::High)
            .with_evidence(format!("directory:{}", dir));
    }

    fallback(&normalized)
}

fn fallback(path: &str) -> FileClassification {
    FileClassification::new(path, FileCategory::Other, Confidence::Low)
        .with_evidence("fallback:unclassified")
        .flag_deep_inspection()
}
