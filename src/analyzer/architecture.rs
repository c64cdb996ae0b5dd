//! Architecture Pattern Detector
//!
//! Evaluates an ordered registry of pattern detectors against the directory
//! index and the raw file inventory. The first detector that fires wins;
//! microservices is checked separately and overrides the ordered result.
//! Every detector that fires is kept as a candidate, and layer / feature
//! structure is attached whenever its indicators exist.

use std::collections::BTreeMap;

use super::directory::DirectoryIndex;
use crate::types::utils::{file_name, parent_dir, path_depth, segments};
use crate::types::{
    ArchitectureHints, ArchitecturePattern, ArchitectureType, Confidence, FeatureStructure,
    FileCategory, PatternCandidate,
};

// =============================================================================
// Markers
// =============================================================================

const WORKSPACE_MARKERS: &[&str] = &[
    "pnpm-workspace.yaml",
    "lerna.json",
    "nx.json",
    "turbo.json",
    "rush.json",
    "go.work",
];

const PACKAGE_MANIFESTS: &[&str] = &[
    "package.json",
    "Cargo.toml",
    "pyproject.toml",
    "go.mod",
    "pom.xml",
    "build.gradle",
    "build.gradle.kts",
];

const WORKSPACE_DIRS: &[&str] = &["packages", "apps"];

const CLEAN_LAYERS: &[&str] = &["domain", "application", "infrastructure", "presentation"];

const FEATURE_DIRS: &[&str] = &["features", "modules"];

const SHARED_DIRS: &[&str] = &["shared", "common", "core"];

const DDD_SEGMENTS: &[&str] = &["domain", "entities", "aggregates"];

const COMPOSE_FILES: &[&str] = &[
    "docker-compose.yml",
    "docker-compose.yaml",
    "compose.yml",
    "compose.yaml",
];

// =============================================================================
// Detector Registry
// =============================================================================

/// Inputs every detector may inspect
pub struct DetectionContext<'a> {
    pub directories: &'a DirectoryIndex,
    /// Raw inventory, root-relative
    pub files: &'a [String],
}

impl DetectionContext<'_> {
    fn root_files(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .map(String::as_str)
            .filter(|f| !f.contains('/'))
    }

    fn dirs_named<'n>(&'n self, names: &'n [&'n str]) -> impl Iterator<Item = &'n str> + 'n {
        self.directories.named(names)
    }
}

/// A detector's positive verdict
#[derive(Debug, Clone)]
pub struct Detection {
    pub confidence: Confidence,
    pub indicators: Vec<String>,
}

impl Detection {
    fn new(confidence: Confidence, indicators: Vec<String>) -> Option<Self> {
        (!indicators.is_empty()).then_some(Self {
            confidence,
            indicators,
        })
    }
}

pub struct PatternDetector {
    pub pattern: ArchitectureType,
    pub detect: fn(&DetectionContext<'_>) -> Option<Detection>,
}

/// Priority order; the first firing detector wins
pub const DETECTORS: &[PatternDetector] = &[
    PatternDetector {
        pattern: ArchitectureType::Monorepo,
        detect: detect_monorepo,
    },
    PatternDetector {
        pattern: ArchitectureType::CleanArchitecture,
        detect: detect_clean_architecture,
    },
    PatternDetector {
        pattern: ArchitectureType::FeatureBased,
        detect: detect_feature_based,
    },
    PatternDetector {
        pattern: ArchitectureType::Mvc,
        detect: detect_mvc,
    },
    PatternDetector {
        pattern: ArchitectureType::DomainDriven,
        detect: detect_domain_driven,
    },
    PatternDetector {
        pattern: ArchitectureType::Layered,
        detect: detect_layered,
    },
];

// =============================================================================
// Detectors
// =============================================================================

fn detect_monorepo(ctx: &DetectionContext<'_>) -> Option<Detection> {
    let mut indicators: Vec<String> = ctx
        .root_files()
        .filter(|f| WORKSPACE_MARKERS.contains(f))
        .map(|f| format!("workspace marker: {}", f))
        .collect();

    for file in ctx.files {
        let mut parts = segments(file);
        let top = parts.next().unwrap_or_default();
        if WORKSPACE_DIRS.contains(&top)
            && path_depth(file) >= 3
            && PACKAGE_MANIFESTS.contains(&file_name(file))
        {
            indicators.push(format!("workspace package: {}", parent_dir(file)));
        }
    }
    Detection::new(Confidence::High, indicators)
}

fn detect_clean_architecture(ctx: &DetectionContext<'_>) -> Option<Detection> {
    let layers = layer_structure(ctx)?;
    let indicators = layers
        .iter()
        .map(|(layer, paths)| format!("layer {}: {}", layer, paths.join(", ")))
        .collect();
    Detection::new(Confidence::High, indicators)
}

fn detect_feature_based(ctx: &DetectionContext<'_>) -> Option<Detection> {
    let indicators = ctx
        .dirs_named(FEATURE_DIRS)
        .map(|p| format!("feature root: {}", p))
        .collect();
    Detection::new(Confidence::High, indicators)
}

fn detect_mvc(ctx: &DetectionContext<'_>) -> Option<Detection> {
    let mut by_parent: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for path in ctx.dirs_named(&["models", "views", "controllers"]) {
        by_parent.entry(parent_dir(path)).or_default().push(path);
    }

    let indicators = by_parent
        .into_iter()
        .filter(|(_, siblings)| siblings.len() == 3)
        .filter(|(_, siblings)| {
            let primary: Vec<FileCategory> = siblings
                .iter()
                .filter_map(|p| ctx.directories.get(p))
                .flat_map(|d| d.primary_categories.iter().copied())
                .collect();
            primary.contains(&FileCategory::Model) && primary.contains(&FileCategory::Controller)
        })
        .map(|(parent, _)| {
            let at = if parent.is_empty() { "<root>" } else { parent };
            format!("models/views/controllers under {}", at)
        })
        .collect();
    Detection::new(Confidence::Medium, indicators)
}

fn detect_domain_driven(ctx: &DetectionContext<'_>) -> Option<Detection> {
    let indicators = ctx
        .dirs_named(DDD_SEGMENTS)
        .map(|p| format!("domain directory: {}", p))
        .collect();
    Detection::new(Confidence::High, indicators)
}

fn detect_layered(ctx: &DetectionContext<'_>) -> Option<Detection> {
    let controllers: Vec<&str> = ctx.dirs_named(&["controllers"]).collect();
    let services: Vec<&str> = ctx.dirs_named(&["services"]).collect();
    let repositories: Vec<&str> = ctx.dirs_named(&["repositories", "dao"]).collect();
    if controllers.is_empty() || services.is_empty() || repositories.is_empty() {
        return None;
    }
    let indicators = [controllers, services, repositories]
        .into_iter()
        .flatten()
        .map(|p| format!("tier: {}", p))
        .collect();
    Detection::new(Confidence::Medium, indicators)
}

/// Compose file at the root plus at least one Dockerfile anywhere
fn detect_microservices(ctx: &DetectionContext<'_>) -> Option<Detection> {
    let compose: Vec<&str> = ctx
        .root_files()
        .filter(|f| COMPOSE_FILES.contains(f))
        .collect();
    if compose.is_empty() {
        return None;
    }
    let dockerfiles: Vec<&str> = ctx
        .files
        .iter()
        .map(String::as_str)
        .filter(|f| file_name(f) == "Dockerfile")
        .collect();
    if dockerfiles.is_empty() {
        return None;
    }

    let indicators = compose
        .into_iter()
        .map(|f| format!("compose file: {}", f))
        .chain(dockerfiles.into_iter().map(|f| format!("dockerfile: {}", f)))
        .collect();
    Detection::new(Confidence::High, indicators)
}

// =============================================================================
// Structure Details
// =============================================================================

/// Clean-architecture layer → directories carrying that name
fn layer_structure(ctx: &DetectionContext<'_>) -> Option<BTreeMap<String, Vec<String>>> {
    let mut layers: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for path in ctx.dirs_named(CLEAN_LAYERS) {
        layers
            .entry(file_name(path).to_lowercase())
            .or_default()
            .push(path.to_string());
    }
    (!layers.is_empty()).then_some(layers)
}

/// Immediate children of feature roots, plus shared siblings
fn feature_structure(ctx: &DetectionContext<'_>) -> Option<FeatureStructure> {
    let roots: Vec<&str> = ctx.dirs_named(FEATURE_DIRS).collect();
    if roots.is_empty() {
        return None;
    }

    let features: Vec<String> = roots
        .iter()
        .flat_map(|root| ctx.directories.children(root))
        .map(|d| d.path.clone())
        .collect();
    let shared: Vec<String> = ctx
        .dirs_named(SHARED_DIRS)
        .filter(|p| roots.iter().any(|root| parent_dir(root) == parent_dir(p)))
        .map(String::from)
        .collect();

    Some(FeatureStructure {
        features,
        shared: (!shared.is_empty()).then_some(shared),
    })
}

// =============================================================================
// Entry Point
// =============================================================================

/// Pick exactly one architecture pattern for the project
pub fn detect_pattern(
    directories: &DirectoryIndex,
    files: &[String],
    hints: &ArchitectureHints,
) -> ArchitecturePattern {
    let ctx = DetectionContext { directories, files };

    let mut candidates: Vec<PatternCandidate> = DETECTORS
        .iter()
        .filter_map(|d| {
            (d.detect)(&ctx).map(|det| PatternCandidate {
                pattern_type: d.pattern,
                confidence: det.confidence,
                indicators: det.indicators,
            })
        })
        .collect();
    if let Some(det) = detect_microservices(&ctx) {
        candidates.push(PatternCandidate {
            pattern_type: ArchitectureType::Microservices,
            confidence: det.confidence,
            indicators: det.indicators,
        });
    }

    let winner = choose_winner(&candidates, hints);
    let mut pattern = match winner {
        Some((candidate, promoted)) => {
            let mut indicators = candidate.indicators.clone();
            if promoted {
                indicators.push(format!("preferred by host hint: {}", candidate.pattern_type));
            }
            ArchitecturePattern {
                pattern_type: candidate.pattern_type,
                confidence: candidate.confidence,
                indicators,
                ..ArchitecturePattern::unknown()
            }
        }
        None => ArchitecturePattern::unknown(),
    };

    pattern.layer_structure = layer_structure(&ctx);
    pattern.feature_structure = feature_structure(&ctx);
    pattern.candidates = candidates;

    tracing::debug!(
        pattern = %pattern.pattern_type,
        confidence = %pattern.confidence,
        candidates = pattern.candidates.len(),
        "Architecture detected"
    );
    pattern
}

/// Microservices overrides; then a hinted candidate; then priority order
fn choose_winner<'a>(
    candidates: &'a [PatternCandidate],
    hints: &ArchitectureHints,
) -> Option<(&'a PatternCandidate, bool)> {
    if let Some(micro) = candidates
        .iter()
        .find(|c| c.pattern_type == ArchitectureType::Microservices)
    {
        return Some((micro, false));
    }

    let first = candidates.first()?;
    let hinted = hints
        .preferred_pattern
        .and_then(|preferred| candidates.iter().find(|c| c.pattern_type == preferred));
    match hinted {
        Some(c) if c.pattern_type != first.pattern_type => Some((c, true)),
        _ => Some((first, false)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::pipeline::ProjectAnalyzer;
    use crate::types::AnalysisInput;

    fn detect_with(paths: &[&str], hints: ArchitectureHints) -> ArchitecturePattern {
        let input = AnalysisInput::new(paths.iter().copied()).with_hints(hints);
        ProjectAnalyzer::default().analyze(&input).architecture_pattern
    }

    fn detect(paths: &[&str]) -> ArchitecturePattern {
        detect_with(paths, ArchitectureHints::default())
    }

    #[test]
    fn test_monorepo_by_marker() {
        let p = detect(&["pnpm-workspace.yaml", "src/index.ts"]);
        assert_eq!(p.pattern_type, ArchitectureType::Monorepo);
        assert_eq!(p.confidence, Confidence::High);
        assert_eq!(p.indicators, vec!["workspace marker: pnpm-workspace.yaml"]);
    }

    #[test]
    fn test_monorepo_beats_feature_based() {
        let p = detect(&[
            "packages/web/package.json",
            "packages/web/src/features/cart/Cart.tsx",
        ]);
        assert_eq!(p.pattern_type, ArchitectureType::Monorepo);
        assert!(
            p.candidates
                .iter()
                .any(|c| c.pattern_type == ArchitectureType::FeatureBased)
        );
        assert!(p.feature_structure.is_some());
    }

    #[test]
    fn test_packages_without_manifest_is_not_monorepo() {
        let p = detect(&["packages/readme.md"]);
        assert_eq!(p.pattern_type, ArchitectureType::Unknown);
        assert_eq!(p.confidence, Confidence::Low);
        assert!(p.indicators.is_empty());
    }

    #[test]
    fn test_clean_architecture_layers() {
        let p = detect(&[
            "src/domain/user.ts",
            "src/application/create-user.ts",
            "src/infrastructure/db.ts",
        ]);
        assert_eq!(p.pattern_type, ArchitectureType::CleanArchitecture);
        let layers = p.layer_structure.unwrap();
        assert_eq!(layers["domain"], vec!["src/domain"]);
        assert_eq!(layers.len(), 3);
    }

    #[test]
    fn test_feature_based_structure() {
        let p = detect(&[
            "src/features/cart/Cart.tsx",
            "src/features/auth/Login.tsx",
            "src/shared/Button.tsx",
        ]);
        assert_eq!(p.pattern_type, ArchitectureType::FeatureBased);
        let fs = p.feature_structure.unwrap();
        assert_eq!(fs.features, vec!["src/features/auth", "src/features/cart"]);
        assert_eq!(fs.shared, Some(vec!["src/shared".to_string()]));
    }

    #[test]
    fn test_mvc() {
        let p = detect(&[
            "app/models/user.model.js",
            "app/views/user.ejs",
            "app/controllers/user.controller.js",
        ]);
        assert_eq!(p.pattern_type, ArchitectureType::Mvc);
        assert_eq!(p.confidence, Confidence::Medium);
    }

    #[test]
    fn test_domain_driven_without_clean_layers() {
        let p = detect(&["src/entities/order.ts", "src/aggregates/cart.ts"]);
        assert_eq!(p.pattern_type, ArchitectureType::DomainDriven);
    }

    #[test]
    fn test_layered() {
        let p = detect(&[
            "src/controllers/user.ts",
            "src/services/user.ts",
            "src/repositories/user.ts",
        ]);
        assert_eq!(p.pattern_type, ArchitectureType::Layered);
        assert_eq!(p.confidence, Confidence::Medium);
    }

    #[test]
    fn test_microservices_overrides_everything() {
        let p = detect(&[
            "docker-compose.yml",
            "service-a/Dockerfile",
            "service-b/Dockerfile",
            "packages/web/package.json",
        ]);
        assert_eq!(p.pattern_type, ArchitectureType::Microservices);
        assert_eq!(p.confidence, Confidence::High);
    }

    #[test]
    fn test_compose_without_dockerfile() {
        let p = detect(&["docker-compose.yml", "src/index.ts"]);
        assert_eq!(p.pattern_type, ArchitectureType::Unknown);
    }

    #[test]
    fn test_hint_promotes_only_detected_pattern() {
        let paths = ["src/features/cart/Cart.tsx", "src/domain/order.ts"];
        let hinted = detect_with(
            &paths,
            ArchitectureHints {
                preferred_pattern: Some(ArchitectureType::FeatureBased),
            },
        );
        assert_eq!(hinted.pattern_type, ArchitectureType::FeatureBased);
        assert!(hinted.indicators.iter().any(|i| i.contains("hint")));

        let ignored = detect_with(
            &paths,
            ArchitectureHints {
                preferred_pattern: Some(ArchitectureType::Mvc),
            },
        );
        assert_eq!(ignored.pattern_type, ArchitectureType::CleanArchitecture);
    }
}
