//! Directory Purpose Engine
//!
//! Produces a short human-readable purpose label for every directory through
//! a five-stage cascade: dependency family, structural keyword, business
//! inference, parent inheritance, fallback. Each stage sees the directory's
//! own path, primary categories and the name-only resolution of its parent,
//! so directories can be labelled independently of one another.

pub mod dependency;
pub mod stages;
pub mod tables;

use crate::types::utils::{ancestors, file_name};
use crate::types::{FileCategory, PurposeStage};

pub use dependency::{DEPENDENCY_FAMILIES, DependencyFamily, DependencySet};
use tables::BusinessTerm;

/// Fallback purpose label
pub const FALLBACK_PURPOSE: &str = "其他";

/// A purpose label and the category it implies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurposeLabel {
    pub purpose: String,
    pub category: FileCategory,
    pub stage: PurposeStage,
}

impl PurposeLabel {
    pub fn new(purpose: impl Into<String>, category: FileCategory, stage: PurposeStage) -> Self {
        Self {
            purpose: purpose.into(),
            category,
            stage,
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_PURPOSE, FileCategory::Other, PurposeStage::Fallback)
    }
}

/// What a child may know about its parent: the name and the label the
/// parent's path alone resolves to (dependency family or structural keyword)
#[derive(Debug, Clone)]
pub struct ParentContext<'a> {
    pub name: &'a str,
    pub label: Option<PurposeLabel>,
}

impl<'a> ParentContext<'a> {
    pub fn resolve(path: &'a str, deps: &DependencySet) -> Self {
        Self {
            name: file_name(path),
            label: resolve_by_name(path, deps),
        }
    }
}

/// Label from the path alone, without any file information
pub fn resolve_by_name(path: &str, deps: &DependencySet) -> Option<PurposeLabel> {
    let name = file_name(path);
    let ancestor_names: Vec<&str> = ancestors(path).into_iter().map(file_name).collect();
    stages::dependency_label(name, &ancestor_names, deps).or_else(|| stages::keyword_label(name))
}

/// Everything the cascade needs about one directory
#[derive(Debug)]
pub struct PurposeInput<'a> {
    pub path: &'a str,
    pub name: &'a str,
    /// Ancestor directory names, nearest first
    pub ancestor_names: Vec<&'a str>,
    pub primary: &'a [FileCategory],
    pub parent: Option<&'a ParentContext<'a>>,
    pub deps: &'a DependencySet,
}

impl<'a> PurposeInput<'a> {
    pub fn new(
        path: &'a str,
        primary: &'a [FileCategory],
        parent: Option<&'a ParentContext<'a>>,
        deps: &'a DependencySet,
    ) -> Self {
        Self {
            path,
            name: file_name(path),
            ancestor_names: ancestors(path).into_iter().map(file_name).collect(),
            primary,
            parent,
            deps,
        }
    }
}

/// Working state threaded through the stages
pub struct Cascade<'a> {
    pub input: &'a PurposeInput<'a>,
    /// Keyword label held back because the parent is also a keyword
    pub keyword: Option<PurposeLabel>,
    pub inferred: Option<PurposeLabel>,
    pub qualifier: Option<&'static BusinessTerm>,
}

impl<'a> Cascade<'a> {
    fn new(input: &'a PurposeInput<'a>) -> Self {
        Self {
            input,
            keyword: None,
            inferred: None,
            qualifier: None,
        }
    }

    /// Parent label came from a structural keyword rather than a dependency family
    pub fn parent_is_structural(&self) -> bool {
        self.input
            .parent
            .and_then(|p| p.label.as_ref())
            .is_some_and(|label| label.stage == PurposeStage::Keyword)
    }
}

/// Run the cascade for one directory. Always yields a label.
pub fn infer_purpose(input: &PurposeInput<'_>) -> PurposeLabel {
    let mut cascade = Cascade::new(input);
    for (stage_name, stage) in stages::STAGES {
        if let Some(label) = stage(&mut cascade) {
            tracing::trace!(
                path = input.path,
                stage = *stage_name,
                purpose = %label.purpose,
                "Purpose resolved"
            );
            return label;
        }
    }
    PurposeLabel::fallback()
}
