//! Input normalization
//!
//! Turns the raw path list into root-relative, `/`-separated, de-duplicated
//! paths. Malformed entries are recorded as skipped and never abort a run.

use std::collections::BTreeSet;

use crate::types::utils::{is_under, normalize_path};
use crate::types::{AnalysisInput, InputError, ModuleDescriptor, SkippedInput};

/// Normalized file inventory
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    /// Root-relative file paths, sorted and unique
    pub files: Vec<String>,
    pub skipped: Vec<SkippedInput>,
}

impl Inventory {
    pub fn from_input(input: &AnalysisInput) -> Self {
        let root = input.root.as_deref().map(normalize_root);
        let mut files = BTreeSet::new();
        let mut skipped = Vec::new();

        for raw in &input.paths {
            match resolve_path(raw, root.as_deref()) {
                Ok(path) => {
                    files.insert(path);
                }
                Err(e) => {
                    tracing::warn!("Skipping input {}", e);
                    skipped.push(SkippedInput {
                        path: raw.clone(),
                        reason: e.kind,
                    });
                }
            }
        }

        Self {
            files: files.into_iter().collect(),
            skipped,
        }
    }
}

// =============================================================================
// Path Resolution
// =============================================================================

fn normalize_root(root: &str) -> String {
    root.replace('\\', "/").trim_end_matches('/').to_string()
}

fn is_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    path.starts_with('/')
        || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
}

/// Resolve one raw input path to a root-relative path
pub fn resolve_path(raw: &str, root: Option<&str>) -> std::result::Result<String, InputError> {
    let unified = raw.trim().replace('\\', "/");
    if unified.is_empty() {
        return Err(InputError::empty_path(raw));
    }

    let relative = match root {
        Some(root) if is_absolute(&unified) => {
            if !is_under(&unified, root) {
                return Err(InputError::outside_root(raw, root));
            }
            unified[root.len()..].to_string()
        }
        _ => unified,
    };

    let mut stack: Vec<&str> = Vec::new();
    let normalized = normalize_path(&relative);
    for segment in normalized.split('/').filter(|s| !s.is_empty()) {
        if segment == ".." {
            if stack.pop().is_none() {
                return Err(InputError::escapes_root(raw));
            }
        } else {
            stack.push(segment);
        }
    }

    if stack.is_empty() {
        return Err(InputError::empty_path(raw));
    }
    Ok(stack.join("/"))
}

// =============================================================================
// Module Attribution
// =============================================================================

/// Module descriptors resolved against the inventory
#[derive(Debug, Clone, Default)]
pub struct ModuleMap {
    /// `(path, name)`, longest path first
    entries: Vec<(String, String)>,
    /// Names of modules whose path matched no file
    pub unattributed: Vec<String>,
}

impl ModuleMap {
    pub fn build(modules: &[ModuleDescriptor], inventory: &Inventory, root: Option<&str>) -> Self {
        let root = root.map(normalize_root);
        let mut entries = Vec::new();
        let mut unattributed = Vec::new();

        for module in modules {
            let path = resolve_path(&module.path, root.as_deref())
                .ok()
                .filter(|p| inventory.files.iter().any(|f| is_under(f, p)));
            match path {
                Some(path) => entries.push((path, module.name.clone())),
                None => {
                    tracing::warn!(
                        "Ignoring module {}",
                        InputError::unmatched_module(&module.name, &module.path)
                    );
                    unattributed.push(module.name.clone());
                }
            }
        }

        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        Self {
            entries,
            unattributed,
        }
    }

    /// Name of the most specific module containing `path`
    pub fn module_for(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(prefix, _)| is_under(path, prefix))
            .map(|(_, name)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InputErrorKind;

    fn resolve(raw: &str) -> std::result::Result<String, InputErrorKind> {
        resolve_path(raw, None).map_err(|e| e.kind)
    }

    #[test]
    fn test_relative_paths_are_normalized() {
        assert_eq!(resolve("./src\\App.tsx"), Ok("src/App.tsx".to_string()));
        assert_eq!(resolve("src//a/../b.ts"), Ok("src/b.ts".to_string()));
        assert_eq!(resolve("/src/b.ts"), Ok("src/b.ts".to_string()));
    }

    #[test]
    fn test_malformed_paths() {
        assert_eq!(resolve(""), Err(InputErrorKind::EmptyPath));
        assert_eq!(resolve("  "), Err(InputErrorKind::EmptyPath));
        assert_eq!(resolve("./"), Err(InputErrorKind::EmptyPath));
        assert_eq!(resolve("../secret.ts"), Err(InputErrorKind::EscapesRoot));
        assert_eq!(resolve("src/../../x.ts"), Err(InputErrorKind::EscapesRoot));
    }

    #[test]
    fn test_absolute_paths_against_root() {
        let root = Some("/work/app");
        assert_eq!(
            resolve_path("/work/app/src/main.ts", root).unwrap(),
            "src/main.ts"
        );
        assert_eq!(
            resolve_path("/work/other/main.ts", root).unwrap_err().kind,
            InputErrorKind::OutsideRoot
        );
        assert_eq!(
            resolve_path("/work/application/main.ts", root).unwrap_err().kind,
            InputErrorKind::OutsideRoot
        );
        assert_eq!(
            resolve_path("C:\\repo\\src\\a.ts", Some("C:/repo")).unwrap(),
            "src/a.ts"
        );
    }

    #[test]
    fn test_inventory_dedupes_and_records_skips() {
        let input = AnalysisInput::new(["b.ts", "./b.ts", "a/c.ts", "", "../x.ts"]);
        let inventory = Inventory::from_input(&input);
        assert_eq!(inventory.files, vec!["a/c.ts", "b.ts"]);
        assert_eq!(inventory.skipped.len(), 2);
        assert_eq!(inventory.skipped[0].reason, InputErrorKind::EmptyPath);
        assert_eq!(inventory.skipped[1].reason, InputErrorKind::EscapesRoot);
    }

    #[test]
    fn test_module_longest_prefix_and_unattributed() {
        let input = AnalysisInput::new(["packages/web/src/App.tsx", "packages/api/main.go"]);
        let inventory = Inventory::from_input(&input);
        let modules = vec![
            ModuleDescriptor::new("packages", "packages"),
            ModuleDescriptor::new("web", "packages/web"),
            ModuleDescriptor::new("ghost", "packages/ghost"),
        ];
        let map = ModuleMap::build(&modules, &inventory, None);

        assert_eq!(map.module_for("packages/web/src"), Some("web"));
        assert_eq!(map.module_for("packages/api"), Some("packages"));
        assert_eq!(map.module_for("docs"), None);
        assert_eq!(map.unattributed, vec!["ghost"]);
    }
}
