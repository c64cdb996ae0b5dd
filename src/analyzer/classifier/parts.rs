//! Pre-split view of a file path shared by every classification rule

use crate::types::utils::{file_extension, file_name, file_stem, parent_dir, segments};

/// JSX-family extensions (UI files)
pub const JSX_EXTENSIONS: &[&str] = &["tsx", "jsx", "vue", "svelte", "astro"];

/// JavaScript/TypeScript family
pub const SCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "cjs", "mts", "cts"];

/// Extensions whose stem casing is meaningful
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "ts", "tsx", "js", "jsx", "mjs", "cjs", "mts", "cts", "vue", "svelte", "astro", "py", "rb",
    "go", "java", "kt", "kts", "rs", "php", "cs", "swift", "dart", "scala",
];

pub const STYLE_EXTENSIONS: &[&str] = &["css", "scss", "sass", "less", "styl", "pcss"];

pub const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "ini", "env", "conf"];

/// A normalized path split into the pieces the rules look at
#[derive(Debug, Clone)]
pub struct PathParts<'a> {
    pub path: &'a str,
    /// Basename, original case
    pub name: &'a str,
    pub lower_name: String,
    /// Basename up to the first dot, original case
    pub stem: &'a str,
    pub lower_stem: String,
    pub extension: String,
    /// Lowercase directory segments, root first
    pub ancestors: Vec<String>,
}

impl<'a> PathParts<'a> {
    pub fn parse(path: &'a str) -> Self {
        let name = file_name(path);
        let stem = file_stem(name);
        Self {
            path,
            name,
            lower_name: name.to_lowercase(),
            stem,
            lower_stem: stem.to_lowercase(),
            extension: file_extension(name),
            ancestors: segments(parent_dir(path))
                .map(|s| s.to_lowercase())
                .collect(),
        }
    }

    pub fn has_extension(&self, extensions: &[&str]) -> bool {
        extensions.contains(&self.extension.as_str())
    }

    pub fn is_jsx(&self) -> bool {
        self.has_extension(JSX_EXTENSIONS)
    }

    pub fn is_script(&self) -> bool {
        self.has_extension(SCRIPT_EXTENSIONS)
    }

    pub fn is_source(&self) -> bool {
        self.has_extension(SOURCE_EXTENSIONS)
    }

    pub fn is_dotfile(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Basename carries `.<marker>.` (e.g. `user.service.ts`)
    pub fn has_marker(&self, markers: &[&str]) -> bool {
        markers
            .iter()
            .any(|m| self.lower_name.contains(&format!(".{}.", m)))
    }

    pub fn stem_is(&self, stems: &[&str]) -> bool {
        stems.contains(&self.lower_stem.as_str())
    }

    pub fn stem_ends_with(&self, suffixes: &[&str]) -> bool {
        suffixes.iter().any(|s| self.lower_stem.ends_with(s))
    }

    pub fn has_ancestor(&self, names: &[&str]) -> bool {
        self.ancestors.iter().any(|a| names.contains(&a.as_str()))
    }

    /// Source file beneath one of the named directories
    pub fn source_under(&self, names: &[&str]) -> bool {
        self.is_source() && self.has_ancestor(names)
    }

    /// Index of the deepest ancestor among `names`
    pub fn nearest_ancestor(&self, names: &[&str]) -> Option<usize> {
        self.ancestors
            .iter()
            .rposition(|a| names.contains(&a.as_str()))
    }

    /// Immediate parent directory name, lowercase
    pub fn parent(&self) -> Option<&str> {
        self.ancestors.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_parts() {
        let p = PathParts::parse("src/components/Button/Button.test.tsx");
        assert_eq!(p.name, "Button.test.tsx");
        assert_eq!(p.stem, "Button");
        assert_eq!(p.extension, "tsx");
        assert_eq!(p.ancestors, vec!["src", "components", "button"]);
        assert_eq!(p.parent(), Some("button"));
        assert!(p.has_marker(&["test"]));
        assert!(p.is_jsx());
    }

    #[test]
    fn test_nearest_ancestor() {
        let p = PathParts::parse("pages/Home/components/Header.tsx");
        assert_eq!(p.nearest_ancestor(&["pages"]), Some(0));
        assert_eq!(p.nearest_ancestor(&["components"]), Some(2));
        assert_eq!(p.nearest_ancestor(&["hooks"]), None);
    }

    #[test]
    fn test_root_file_has_no_parent() {
        let p = PathParts::parse("README.md");
        assert!(p.ancestors.is_empty());
        assert_eq!(p.parent(), None);
        assert!(!p.is_source());
    }
}
