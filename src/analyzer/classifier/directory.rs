//! Stage 3: immediate parent directory name against a fixed keyword table

use super::parts::PathParts;
use crate::types::FileCategory;

const DIRECTORY_KEYWORDS: &[(&[&str], FileCategory)] = &[
    (&["components", "component", "widgets", "ui"], FileCategory::Component),
    (&["pages", "views", "screens"], FileCategory::Page),
    (&["hooks", "composables"], FileCategory::Hook),
    (&["utils", "util", "helpers", "helper", "lib", "libs"], FileCategory::Utility),
    (&["services", "service", "api", "apis"], FileCategory::Service),
    (&["types", "typings", "interfaces", "@types"], FileCategory::Type),
    (&["enums"], FileCategory::Enum),
    (&["constants", "consts"], FileCategory::Constant),
    (&["config", "configs", "settings"], FileCategory::Config),
    (&["tests", "test", "__tests__", "spec", "specs"], FileCategory::Test),
    (&["styles", "style", "css", "scss", "theme", "themes"], FileCategory::Style),
    (&["layouts", "layout"], FileCategory::Layout),
    (&["middleware", "middlewares"], FileCategory::Middleware),
    (&["models", "model", "entities", "schemas"], FileCategory::Model),
    (&["repositories", "repository", "repos", "dao"], FileCategory::Repository),
    (&["controllers", "controller", "handlers"], FileCategory::Controller),
    (&["routes", "router", "routers", "routing"], FileCategory::Route),
];

/// Category implied by a directory name
pub fn category_for_dir_name(name: &str) -> Option<FileCategory> {
    let lower = name.to_lowercase();
    DIRECTORY_KEYWORDS
        .iter()
        .find(|(names, _)| names.contains(&lower.as_str()))
        .map(|(_, category)| *category)
}

pub fn classify_by_directory(parts: &PathParts) -> Option<(FileCategory, String)> {
    let parent = parts.parent()?;
    category_for_dir_name(parent).map(|c| (c, parent.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_keyword() {
        let parts = PathParts::parse("src/components/logo.svg");
        assert_eq!(
            classify_by_directory(&parts),
            Some((FileCategory::Component, "components".to_string()))
        );
    }

    #[test]
    fn test_only_immediate_parent_counts() {
        let parts = PathParts::parse("src/components/icons/logo.svg");
        assert_eq!(classify_by_directory(&parts), None);
        assert_eq!(classify_by_directory(&PathParts::parse("logo.svg")), None);
    }

    #[test]
    fn test_keyword_lookup_is_case_insensitive() {
        assert_eq!(category_for_dir_name("Models"), Some(FileCategory::Model));
        assert_eq!(category_for_dir_name("misc"), None);
    }
}
