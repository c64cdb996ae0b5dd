//! Cascade stages, applied in order until one yields a label

use super::dependency::family_for_name;
use super::tables::{BusinessTerm, business_term, category_purpose, structural_keyword};
use super::{Cascade, PurposeLabel};
use crate::types::utils::join_label;
use crate::types::{FileCategory, PurposeStage};

/// A stage either settles the purpose or passes to the next one
pub type Stage = fn(&mut Cascade<'_>) -> Option<PurposeLabel>;

pub const STAGES: &[(&str, Stage)] = &[
    ("dependency", dependency_stage),
    ("keyword", keyword_stage),
    ("inferred", inference_stage),
    ("inherited", inheritance_stage),
    ("fallback", fallback_stage),
];

// =============================================================================
// Stage 1: dependency families
// =============================================================================

/// The directory itself or its nearest identifying ancestor names a family
pub fn dependency_stage(cascade: &mut Cascade<'_>) -> Option<PurposeLabel> {
    let input = cascade.input;
    dependency_label(input.name, &input.ancestor_names, input.deps)
}

pub(super) fn dependency_label(
    name: &str,
    ancestor_names: &[&str],
    deps: &super::DependencySet,
) -> Option<PurposeLabel> {
    if let Some(family) = family_for_name(name, deps) {
        return Some(PurposeLabel::new(
            format!("{}相关", family.label),
            family.category,
            PurposeStage::Dependency,
        ));
    }

    ancestor_names.iter().find_map(|ancestor| {
        family_for_name(ancestor, deps).map(|family| {
            PurposeLabel::new(
                format!("{}相关子模块（{}）", family.label, name),
                family.category,
                PurposeStage::Dependency,
            )
        })
    })
}

// =============================================================================
// Stage 2: structural keywords
// =============================================================================

/// Exact structural keyword match, deferred when the parent is one too
pub fn keyword_stage(cascade: &mut Cascade<'_>) -> Option<PurposeLabel> {
    let label = keyword_label(cascade.input.name)?;

    let parent_is_keyword = cascade
        .input
        .parent
        .is_some_and(|p| structural_keyword(p.name).is_some());
    if parent_is_keyword {
        cascade.keyword = Some(label);
        return None;
    }
    Some(label)
}

pub(super) fn keyword_label(name: &str) -> Option<PurposeLabel> {
    structural_keyword(name).map(|k| PurposeLabel::new(k.purpose, k.category, PurposeStage::Keyword))
}

// =============================================================================
// Stage 3: business qualifier and dominant category
// =============================================================================

/// Combine a business qualifier from the name with the dominant category.
///
/// Final unless the parent carries a bare structural label, in which case
/// the inheritance stage decides.
pub fn inference_stage(cascade: &mut Cascade<'_>) -> Option<PurposeLabel> {
    cascade.qualifier = business_term(cascade.input.name);
    cascade.inferred = inferred_label(cascade.qualifier, cascade.input.primary.first().copied());

    if cascade.parent_is_structural() {
        return None;
    }
    cascade.keyword.clone().or_else(|| cascade.inferred.clone())
}

fn inferred_label(
    qualifier: Option<&BusinessTerm>,
    dominant: Option<FileCategory>,
) -> Option<PurposeLabel> {
    let base = dominant.and_then(|c| category_purpose(c).map(|p| (c, p)));
    match (qualifier, base) {
        (Some(term), Some((category, purpose))) => Some(PurposeLabel::new(
            join_label(&format!("{}相关", term.qualifier), purpose),
            category,
            PurposeStage::Inferred,
        )),
        (Some(term), None) => Some(PurposeLabel::new(
            format!("{}相关业务模块", term.qualifier),
            FileCategory::Other,
            PurposeStage::Inferred,
        )),
        (None, Some((category, purpose))) => {
            Some(PurposeLabel::new(purpose, category, PurposeStage::Inferred))
        }
        (None, None) => None,
    }
}

// =============================================================================
// Stage 4: parent inheritance
// =============================================================================

/// Only runs meaningfully beneath a parent whose label is a bare keyword
pub fn inheritance_stage(cascade: &mut Cascade<'_>) -> Option<PurposeLabel> {
    if !cascade.parent_is_structural() {
        return None;
    }
    let input = cascade.input;
    let parent = input.parent?.label.as_ref()?;

    if let Some(keyword) = cascade.keyword.take() {
        return Some(keyword);
    }
    if let Some(term) = cascade.qualifier {
        return Some(PurposeLabel::new(
            join_label(&format!("{}相关", term.qualifier), &parent.purpose),
            parent.category,
            PurposeStage::Inherited,
        ));
    }
    if let Some(inferred) = cascade.inferred.take() {
        return Some(inferred);
    }
    Some(PurposeLabel::new(
        parent.purpose.clone(),
        parent.category,
        PurposeStage::Inherited,
    ))
}

// =============================================================================
// Stage 5: fallback
// =============================================================================

pub fn fallback_stage(_cascade: &mut Cascade<'_>) -> Option<PurposeLabel> {
    Some(PurposeLabel::fallback())
}
