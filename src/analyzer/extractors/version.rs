//! Version isolation: `v2/`, `legacy-api`, `ButtonV2` and friends

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::types::utils::{file_name, file_stem, parent_dir};
use crate::types::{VersionIsolation, VersionLocation, VersionMechanism};

/// The whole segment is a version token
static DIRECTORY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:(v\d+|legacy|old|new|current))$").expect("directory version pattern")
});

/// A version token leads the segment
static PREFIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?i:(v\d+|legacy|old|new|current))[-_.]|(v\d+|legacy|old|new|current)[A-Z])")
        .expect("prefix version pattern")
});

/// A version token trails the segment
static SUFFIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[-_.](?i:(v\d+|legacy|old|new|current))|[a-z0-9](V\d+|Legacy|Old|New|Current))$")
        .expect("suffix version pattern")
});

/// Version token and placement within one path segment
pub fn segment_version(segment: &str) -> Option<(String, VersionMechanism)> {
    let candidates = [
        (&*DIRECTORY_PATTERN, VersionMechanism::Directory),
        (&*PREFIX_PATTERN, VersionMechanism::Prefix),
        (&*SUFFIX_PATTERN, VersionMechanism::Suffix),
    ];
    candidates.into_iter().find_map(|(pattern, mechanism)| {
        let caps = pattern.captures(segment)?;
        let token = caps.get(1).or_else(|| caps.get(2))?;
        Some((token.as_str().to_lowercase(), mechanism))
    })
}

/// Nearest version token among a directory path's own segments
pub fn directory_version(path: &str) -> Option<String> {
    path.rsplit('/')
        .filter(|s| !s.is_empty())
        .find_map(|segment| segment_version(segment).map(|(token, _)| token))
}

/// Scan directory segments and file stems of every path
pub fn version_isolation<'a, I>(paths: I) -> VersionIsolation
where
    I: IntoIterator<Item = &'a str>,
{
    let mut locations: BTreeMap<String, VersionLocation> = BTreeMap::new();

    for path in paths {
        let dir = parent_dir(path);
        if !dir.is_empty() {
            let ends = dir.match_indices('/').map(|(idx, _)| idx);
            for end in ends.chain(std::iter::once(dir.len())) {
                let prefix = &dir[..end];
                record(&mut locations, prefix, file_name(prefix), true);
            }
        }
        // A bare `new.tsx` is a route or module name, not a version directory
        record(&mut locations, path, file_stem(file_name(path)), false);
    }

    let locations: Vec<VersionLocation> = locations.into_values().collect();
    let versions: BTreeSet<String> = locations.iter().map(|l| l.token.clone()).collect();

    VersionIsolation {
        mechanism: majority_mechanism(&locations),
        versions: versions.into_iter().collect(),
        locations,
    }
}

fn record(
    locations: &mut BTreeMap<String, VersionLocation>,
    path: &str,
    segment: &str,
    is_directory: bool,
) {
    if locations.contains_key(path) {
        return;
    }
    let found = segment_version(segment)
        .filter(|(_, mechanism)| is_directory || *mechanism != VersionMechanism::Directory);
    if let Some((token, mechanism)) = found {
        locations.insert(
            path.to_string(),
            VersionLocation {
                path: path.to_string(),
                token,
                mechanism,
            },
        );
    }
}

/// Most frequent mechanism; ties go to directory, then prefix, then suffix
fn majority_mechanism(locations: &[VersionLocation]) -> VersionMechanism {
    let order = [
        VersionMechanism::Directory,
        VersionMechanism::Prefix,
        VersionMechanism::Suffix,
    ];
    let mut best = VersionMechanism::None;
    let mut best_count = 0;
    for mechanism in order {
        let count = locations.iter().filter(|l| l.mechanism == mechanism).count();
        if count > best_count {
            best = mechanism;
            best_count = count;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_kinds() {
        assert_eq!(
            segment_version("v2"),
            Some(("v2".to_string(), VersionMechanism::Directory))
        );
        assert_eq!(
            segment_version("Legacy"),
            Some(("legacy".to_string(), VersionMechanism::Directory))
        );
        assert_eq!(
            segment_version("v2-dashboard"),
            Some(("v2".to_string(), VersionMechanism::Prefix))
        );
        assert_eq!(
            segment_version("legacyApi"),
            Some(("legacy".to_string(), VersionMechanism::Prefix))
        );
        assert_eq!(
            segment_version("dashboard-v2"),
            Some(("v2".to_string(), VersionMechanism::Suffix))
        );
        assert_eq!(
            segment_version("ButtonV2"),
            Some(("v2".to_string(), VersionMechanism::Suffix))
        );
    }

    #[test]
    fn test_words_containing_tokens_do_not_match() {
        for segment in ["news", "golden", "nav2", "oldest", "currency", "renewal", "src"] {
            assert_eq!(segment_version(segment), None, "{}", segment);
        }
    }

    #[test]
    fn test_directory_mechanism_wins() {
        let isolation = version_isolation([
            "src/api/v1/users.ts",
            "src/api/v2/users.ts",
            "src/components/ButtonV2.tsx",
        ]);
        assert_eq!(isolation.mechanism, VersionMechanism::Directory);
        assert_eq!(isolation.versions, vec!["v1", "v2"]);
        assert_eq!(isolation.locations.len(), 3);
        assert_eq!(isolation.locations[0].path, "src/api/v1");
    }

    #[test]
    fn test_whole_token_file_stem_is_not_a_directory_version() {
        let isolation = version_isolation(["src/pages/users/new.tsx", "src/pages/users/index.tsx"]);
        assert_eq!(isolation, VersionIsolation::default());

        let isolation = version_isolation(["src/api/v2.ts", "src/api/client-v2.ts"]);
        assert_eq!(isolation.mechanism, VersionMechanism::Suffix);
        assert_eq!(isolation.locations.len(), 1);
        assert_eq!(isolation.locations[0].path, "src/api/client-v2.ts");
    }

    #[test]
    fn test_tie_prefers_prefix_over_suffix() {
        let isolation = version_isolation(["legacy-app/a.ts", "pages/home-v2/a.ts"]);
        assert_eq!(isolation.mechanism, VersionMechanism::Prefix);
    }

    #[test]
    fn test_no_versions() {
        let isolation = version_isolation(["src/index.ts"]);
        assert_eq!(isolation, VersionIsolation::default());
    }

    #[test]
    fn test_directory_version_is_nearest() {
        assert_eq!(directory_version("api/v1/legacy-users"), Some("legacy".to_string()));
        assert_eq!(directory_version("api/v1/users"), Some("v1".to_string()));
        assert_eq!(directory_version("api/users"), None);
    }
}
