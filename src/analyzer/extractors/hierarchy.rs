//! Module hierarchy: what each directory depth level represents

use std::collections::BTreeMap;

use crate::constants::hierarchy::{FEATURE_LEVEL_MAX_DEPTH, LEVEL_MAJORITY};
use crate::types::utils::{file_name, parent_dir, path_depth};
use crate::types::{HierarchyLevel, LevelKind, ModuleHierarchy};

/// ISO 3166-1 alpha-2 codes for common markets, plus `uk`. Closed list: two-letter
/// directory names like `ui`, `db` or `js` are far more common than country codes.
const COUNTRY_CODES: &[&str] = &[
    "cn", "hk", "mo", "tw", "jp", "kr", "sg", "th", "vn", "id", "my", "ph", "in", "au", "nz",
    "us", "ca", "mx", "br", "ar", "cl", "co", "pe", "gb", "uk", "ie", "de", "fr", "es", "it",
    "nl", "be", "ch", "at", "se", "no", "dk", "fi", "pl", "pt", "ru", "tr", "ae", "sa", "il",
    "eg", "za", "ng", "ke",
];

const COUNTRY_NAMES: &[&str] = &[
    "china", "hongkong", "taiwan", "japan", "korea", "singapore", "thailand", "vietnam",
    "indonesia", "malaysia", "philippines", "india", "australia", "usa", "canada", "mexico",
    "brazil", "germany", "france", "spain", "italy", "netherlands", "uae",
];

const REGION_NAMES: &[&str] = &[
    "asia", "apac", "emea", "europe", "eu", "americas", "latam", "na", "mena", "sea", "anz",
    "global", "intl", "domestic", "overseas", "north", "south", "east", "west", "central",
];

const FEATURE_KEYWORDS: &[&str] = &["features", "feature", "domains", "domain"];

const MODULE_KEYWORDS: &[&str] = &["modules", "module", "packages", "apps", "libs"];

fn is_country(name: &str) -> bool {
    let lower = name.to_lowercase();
    COUNTRY_CODES.contains(&lower.as_str()) || COUNTRY_NAMES.contains(&lower.as_str())
}

fn is_region(name: &str) -> bool {
    REGION_NAMES.contains(&name.to_lowercase().as_str())
}

fn keyword_kind(path: &str) -> Option<LevelKind> {
    let name = file_name(path).to_lowercase();
    let parent = file_name(parent_dir(path)).to_lowercase();
    let hit = |keywords: &[&str]| keywords.contains(&name.as_str()) || keywords.contains(&parent.as_str());

    if hit(FEATURE_KEYWORDS) {
        Some(LevelKind::Feature)
    } else if hit(MODULE_KEYWORDS) {
        Some(LevelKind::Module)
    } else {
        None
    }
}

/// Bucket directories by depth and label each level
pub fn module_hierarchy<'a, I>(directories: I) -> ModuleHierarchy
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buckets: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for dir in directories {
        let depth = path_depth(dir);
        if depth > 0 {
            buckets.entry(depth).or_default().push(dir);
        }
    }

    let max_depth = buckets.keys().next_back().copied().unwrap_or(0);
    let levels = buckets
        .into_iter()
        .map(|(depth, mut dirs)| {
            dirs.sort_unstable();
            dirs.dedup();
            classify_level(depth, &dirs)
        })
        .collect();

    ModuleHierarchy { max_depth, levels }
}

fn classify_level(depth: usize, dirs: &[&str]) -> HierarchyLevel {
    let majority = |hits: &[&str]| hits.len() as f64 > dirs.len() as f64 * LEVEL_MAJORITY;
    let names = |pred: fn(&str) -> bool| -> Vec<&str> {
        dirs.iter().copied().filter(|d| pred(file_name(d))).collect()
    };

    let countries = names(is_country);
    let regions = names(is_region);

    let (kind, evidence) = if majority(&countries) {
        (LevelKind::Country, countries)
    } else if majority(&regions) {
        (LevelKind::Region, regions)
    } else if depth <= FEATURE_LEVEL_MAX_DEPTH {
        let features: Vec<&str> = dirs
            .iter()
            .copied()
            .filter(|d| keyword_kind(d) == Some(LevelKind::Feature))
            .collect();
        let modules: Vec<&str> = dirs
            .iter()
            .copied()
            .filter(|d| keyword_kind(d) == Some(LevelKind::Module))
            .collect();
        if !features.is_empty() && features.len() >= modules.len() {
            (LevelKind::Feature, features)
        } else if !modules.is_empty() {
            (LevelKind::Module, modules)
        } else {
            (LevelKind::Generic, Vec::new())
        }
    } else {
        (LevelKind::Generic, Vec::new())
    };

    HierarchyLevel {
        depth,
        kind,
        directories: dirs.iter().map(|d| d.to_string()).collect(),
        evidence: evidence.into_iter().map(String::from).collect(),
    }
}
