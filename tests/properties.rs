//! Property checks over generated inventories

use std::collections::BTreeSet;

use codeshape::{AnalysisInput, Confidence, FileCategory, analyze, classify};
use proptest::prelude::*;

const SEGMENTS: &[&str] = &[
    "src", "components", "pages", "hooks", "utils", "services", "api", "v1", "v2", "features",
    "cart", "payment", "store", "models", "controllers", "views", "tests", "styles", "misc",
    "packages", "web", "shared", "domain", "locales",
];

const NAMES: &[&str] = &[
    "Button.tsx", "index.ts", "page.tsx", "useCart.ts", "format.ts", "client.ts", "types.ts",
    "Cart.test.tsx", "cart.module.css", "package.json", "README.md", "Dockerfile", "util.py",
    "user_model.py", "OrderController.java", "routes.ts", "constants.ts", "main.rs", "data.bin",
];

fn path_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop::sample::select(SEGMENTS), 0..4),
        prop::sample::select(NAMES),
    )
        .prop_map(|(dirs, name)| {
            let mut parts: Vec<&str> = dirs;
            parts.push(name);
            parts.join("/")
        })
}

fn inventory_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(path_strategy(), 0..24)
}

proptest! {
    #[test]
    fn category_is_closed_world(path in path_strategy()) {
        let result = classify(&path);
        prop_assert!(FileCategory::ALL.contains(&result.category));
        prop_assert!(!result.evidence.is_empty() || result.category == FileCategory::Other);
        if result.category == FileCategory::Other {
            prop_assert_eq!(result.confidence, Confidence::Low);
            prop_assert!(result.needs_deep_inspection);
        }
    }

    #[test]
    fn fast_path_confidence_is_never_below_later_stages(path in path_strategy()) {
        let result = classify(&path);
        let stage = result.evidence[0].split(':').next().unwrap_or_default().to_string();
        match stage.as_str() {
            "fast" | "directory" => prop_assert_eq!(result.confidence, Confidence::High),
            "naming" => prop_assert_eq!(result.confidence, Confidence::Medium),
            _ => prop_assert_eq!(result.confidence, Confidence::Low),
        }
    }

    #[test]
    fn primary_categories_are_nonzero_and_descending(paths in inventory_strategy()) {
        let fp = analyze(&AnalysisInput::new(paths));
        for dir in &fp.directory_analyses {
            let direct: Vec<FileCategory> = fp
                .file_classifications
                .iter()
                .filter(|f| codeshape::types::utils::parent_dir(&f.path) == dir.path)
                .map(|f| f.category)
                .collect();
            let count = |c: FileCategory| direct.iter().filter(|d| **d == c).count();

            for pair in dir.primary_categories.windows(2) {
                prop_assert!(count(pair[0]) >= count(pair[1]));
            }
            for category in &dir.primary_categories {
                prop_assert!(count(*category) > 0);
            }
            let unique: BTreeSet<_> = dir.primary_categories.iter().collect();
            prop_assert_eq!(unique.len(), dir.primary_categories.len());
        }
    }

    #[test]
    fn directory_links_are_symmetric(paths in inventory_strategy()) {
        let fp = analyze(&AnalysisInput::new(paths));
        for dir in &fp.directory_analyses {
            if let Some(parent) = &dir.parent_directory {
                let parent = fp.directory(parent).unwrap();
                prop_assert!(parent.child_directories.contains(&dir.path));
            }
            for child in &dir.child_directories {
                prop_assert_eq!(
                    fp.directory(child).unwrap().parent_directory.as_deref(),
                    Some(dir.path.as_str())
                );
            }
        }
    }

    #[test]
    fn output_is_deterministic(paths in inventory_strategy()) {
        let mut reversed = paths.clone();
        reversed.reverse();
        let forward = serde_json::to_string(&analyze(&AnalysisInput::new(paths))).unwrap();
        let backward = serde_json::to_string(&analyze(&AnalysisInput::new(reversed))).unwrap();
        prop_assert_eq!(forward, backward);
    }
}
