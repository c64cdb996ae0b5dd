//! Directory analysis and the directory index
//!
//! Each directory is analysed independently from its own histogram, its
//! direct files and its path. Parent/child relations are filled in by a
//! single linking pass once every analysis exists; the index stores them
//! as path strings resolved through a path → slot map.

use std::collections::BTreeMap;

use super::aggregate::primary_categories;
use super::extractors::{co_location, directory_version, has_index_file, naming_convention};
use super::inventory::ModuleMap;
use super::purpose::{DependencySet, ParentContext, PurposeInput, infer_purpose};
use crate::types::utils::{file_name, file_stem, parent_dir, path_depth};
use crate::types::{DirectoryAnalysis, DirectoryHistogram};

/// Shared, read-only inputs for per-directory analysis
pub struct DirectoryContext<'a> {
    pub primary_threshold: f64,
    pub naming_dominance: f64,
    pub deps: &'a DependencySet,
    pub modules: &'a ModuleMap,
}

/// Analyse one directory. `files` are the directory's direct files.
pub fn analyze_directory(
    histogram: &DirectoryHistogram,
    files: &[&str],
    ctx: &DirectoryContext<'_>,
) -> DirectoryAnalysis {
    let path = histogram.directory_path.as_str();
    let primary = primary_categories(histogram, ctx.primary_threshold);

    let parent_path = parent_dir(path);
    let parent = (!path.is_empty() && !parent_path.is_empty())
        .then(|| ParentContext::resolve(parent_path, ctx.deps));
    let input = PurposeInput::new(path, &primary, parent.as_ref(), ctx.deps);
    let label = infer_purpose(&input);

    let naming = naming_convention(files.iter().copied(), ctx.naming_dominance);
    let stems = files.iter().map(|f| file_stem(file_name(f)));

    DirectoryAnalysis {
        path: path.to_string(),
        name: file_name(path).to_string(),
        purpose: label.purpose,
        category: label.category,
        purpose_stage: label.stage,
        naming_pattern: naming.dominant,
        co_location: co_location(histogram),
        has_index_file: has_index_file(stems),
        depth: path_depth(path),
        file_count: histogram.total,
        module: ctx.modules.module_for(path).map(String::from),
        version: directory_version(path),
        parent_directory: None,
        child_directories: Vec::new(),
        primary_categories: primary,
    }
}

// =============================================================================
// Directory Index
// =============================================================================

/// Arena of directory analyses with path lookup
#[derive(Debug, Clone, Default)]
pub struct DirectoryIndex {
    entries: Vec<DirectoryAnalysis>,
    by_path: BTreeMap<String, usize>,
}

impl DirectoryIndex {
    /// Sort by path and link parents and children
    pub fn build(mut analyses: Vec<DirectoryAnalysis>) -> Self {
        analyses.sort_by(|a, b| a.path.cmp(&b.path));
        analyses.dedup_by(|a, b| a.path == b.path);

        let by_path: BTreeMap<String, usize> = analyses
            .iter()
            .enumerate()
            .map(|(idx, d)| (d.path.clone(), idx))
            .collect();

        let mut children: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for dir in analyses.iter_mut().filter(|d| !d.path.is_empty()) {
            // Top-level directories stay unlinked when the root holds no files
            let parent = parent_dir(&dir.path);
            if let Some(&parent_idx) = by_path.get(parent) {
                dir.parent_directory = Some(parent.to_string());
                children.entry(parent_idx).or_default().push(dir.path.clone());
            }
        }
        for (parent_idx, kids) in children {
            analyses[parent_idx].child_directories = kids;
        }

        Self {
            entries: analyses,
            by_path,
        }
    }

    pub fn get(&self, path: &str) -> Option<&DirectoryAnalysis> {
        self.by_path.get(path).map(|&idx| &self.entries[idx])
    }

    pub fn children(&self, path: &str) -> impl Iterator<Item = &DirectoryAnalysis> {
        self.get(path)
            .into_iter()
            .flat_map(|d| d.child_directories.iter())
            .filter_map(|c| self.get(c))
    }

    /// Paths of directories whose own name is one of `names` (case-insensitive)
    pub fn named<'a>(&'a self, names: &'a [&'a str]) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |d| {
                !d.path.is_empty() && names.iter().any(|n| d.name.eq_ignore_ascii_case(n))
            })
            .map(|d| d.path.as_str())
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|d| d.path.as_str())
    }

    pub fn into_vec(self) -> Vec<DirectoryAnalysis> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::aggregate::aggregate;
    use crate::analyzer::classifier::classify;
    use crate::constants::classification::{NAMING_DOMINANCE_THRESHOLD, PRIMARY_CATEGORY_THRESHOLD};
    use crate::types::utils::ROOT_DIR;
    use crate::types::{FileCategory, NamingPattern, PurposeStage};

    fn build(paths: &[&str]) -> DirectoryIndex {
        let deps = DependencySet::default();
        let modules = ModuleMap::default();
        let ctx = DirectoryContext {
            primary_threshold: PRIMARY_CATEGORY_THRESHOLD,
            naming_dominance: NAMING_DOMINANCE_THRESHOLD,
            deps: &deps,
            modules: &modules,
        };
        let files: Vec<_> = paths.iter().map(|p| classify(p)).collect();
        let analyses = aggregate(&files)
            .values()
            .map(|h| {
                let direct: Vec<&str> = paths
                    .iter()
                    .copied()
                    .filter(|p| parent_dir(p) == h.directory_path)
                    .collect();
                analyze_directory(h, &direct, &ctx)
            })
            .collect();
        DirectoryIndex::build(analyses)
    }

    #[test]
    fn test_button_directory() {
        let index = build(&[
            "components/Button/Button.tsx",
            "components/Button/Button.test.tsx",
            "components/Button/index.ts",
        ]);
        let button = index.get("components/Button").unwrap();
        assert_eq!(button.purpose, "组件");
        assert_eq!(button.category, FileCategory::Component);
        assert_eq!(button.file_count, 3);
        assert_eq!(button.depth, 2);
        assert!(button.has_index_file);
        assert!(button.co_location.tests);
        assert_eq!(button.naming_pattern, NamingPattern::PascalCase);
        assert_eq!(button.parent_directory.as_deref(), Some("components"));

        let components = index.get("components").unwrap();
        assert_eq!(components.purpose_stage, PurposeStage::Keyword);
        assert_eq!(components.child_directories, vec!["components/Button"]);
        assert_eq!(components.parent_directory, None);
        assert!(index.get(ROOT_DIR).is_none());
    }

    #[test]
    fn test_root_links_top_level() {
        let index = build(&["README.md", "src/main.ts", "src/lib/util.ts"]);
        let root = index.get(ROOT_DIR).unwrap();
        assert_eq!(root.depth, 0);
        assert_eq!(root.child_directories, vec!["src"]);
        assert_eq!(index.get("src").unwrap().parent_directory.as_deref(), Some(""));
        assert_eq!(
            index.get("src/lib").unwrap().parent_directory.as_deref(),
            Some("src")
        );
        assert_eq!(index.children("src").count(), 1);
    }

    #[test]
    fn test_links_are_consistent() {
        let index = build(&["a/b/c/x.ts", "a/d/y.ts", "e/z.ts"]);
        for dir in index.paths().filter_map(|p| index.get(p)) {
            for child in &dir.child_directories {
                assert_eq!(
                    index.get(child).unwrap().parent_directory.as_deref(),
                    Some(dir.path.as_str())
                );
            }
        }
        assert_eq!(index.paths().count(), 5);
    }

    #[test]
    fn test_version_and_module_fields() {
        let index = build(&["api/v2/users.ts"]);
        assert_eq!(index.get("api/v2").unwrap().version.as_deref(), Some("v2"));
        assert_eq!(index.get("api").unwrap().version, None);
        assert_eq!(index.get("api").unwrap().module, None);
    }

    #[test]
    fn test_named_matches_own_name_case_insensitively() {
        let index = build(&["src/Features/cart/a.ts", "lib/features.ts", "modules/x.ts"]);
        let named: Vec<&str> = index.named(&["features", "modules"]).collect();
        assert_eq!(named, vec!["modules", "src/Features"]);
    }
}
