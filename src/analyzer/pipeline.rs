//! Classification pipeline
//!
//! Fork-join orchestration over a per-run rayon pool:
//!
//! 1. Inventory normalization and module attribution
//! 2. File classification (parallel, per file)
//! 3. Directory aggregation
//! 4. Directory analysis (parallel, per directory)
//! 5. Linking, architecture detection and auxiliary extraction (single owner)
//!
//! Nothing is shared mutably between workers and the core performs no I/O.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{info, instrument, warn};

use super::aggregate::aggregate;
use super::architecture::detect_pattern;
use super::classifier::classify;
use super::directory::{DirectoryContext, DirectoryIndex, analyze_directory};
use super::extractors::{module_hierarchy, naming_convention, version_isolation};
use super::inventory::{Inventory, ModuleMap};
use super::purpose::DependencySet;
use crate::constants::classification::{NAMING_DOMINANCE_THRESHOLD, PRIMARY_CATEGORY_THRESHOLD};
use crate::constants::pipeline::{AUTO_WORKERS, MAX_WORKERS};
use crate::types::utils::parent_dir;
use crate::types::{AnalysisInput, DirectoryAnalysis, FileClassification, ProjectFingerprint};

/// Tunables for one run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    /// Worker threads; 0 lets rayon decide
    pub workers: usize,
    pub primary_threshold: f64,
    pub naming_dominance: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            workers: AUTO_WORKERS,
            primary_threshold: PRIMARY_CATEGORY_THRESHOLD,
            naming_dominance: NAMING_DOMINANCE_THRESHOLD,
        }
    }
}

impl AnalysisOptions {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Replace out-of-range values with defaults
    fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let ratio = |value: f64, default: f64, name: &str| {
            if value > 0.0 && value <= 1.0 {
                value
            } else {
                warn!("{} {} out of range (0, 1], using {}", name, value, default);
                default
            }
        };
        Self {
            workers: self.workers.min(MAX_WORKERS),
            primary_threshold: ratio(
                self.primary_threshold,
                defaults.primary_threshold,
                "primary_threshold",
            ),
            naming_dominance: ratio(
                self.naming_dominance,
                defaults.naming_dominance,
                "naming_dominance",
            ),
        }
    }
}

/// Re-entrant project analyzer
#[derive(Debug, Clone, Default)]
pub struct ProjectAnalyzer {
    options: AnalysisOptions,
}

impl ProjectAnalyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self {
            options: options.sanitized(),
        }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Produce the structural fingerprint for `input`
    #[instrument(skip(self, input), fields(paths = input.paths.len(), workers = self.options.workers))]
    pub fn analyze(&self, input: &AnalysisInput) -> ProjectFingerprint {
        match self.build_pool() {
            Some(pool) => pool.install(|| self.run(input)),
            None => self.run(input),
        }
    }

    fn build_pool(&self) -> Option<rayon::ThreadPool> {
        let result = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.workers)
            .thread_name(|i| format!("codeshape-{}", i))
            .build();
        match result {
            Ok(pool) => Some(pool),
            Err(e) => {
                warn!("Failed to build worker pool, using global pool: {}", e);
                None
            }
        }
    }

    fn run(&self, input: &AnalysisInput) -> ProjectFingerprint {
        info!("Phase 1: Normalizing {} input paths", input.paths.len());
        let inventory = Inventory::from_input(input);
        let modules = ModuleMap::build(&input.modules, &inventory, input.root.as_deref());
        let deps = DependencySet::new(&input.dependencies);

        info!("Phase 2: Classifying {} files", inventory.files.len());
        let file_classifications: Vec<FileClassification> =
            inventory.files.par_iter().map(|path| classify(path)).collect();
        let flagged = file_classifications
            .iter()
            .filter(|c| c.needs_deep_inspection)
            .count();
        tracing::debug!("{} files flagged for deep inspection", flagged);

        info!("Phase 3: Aggregating directories");
        let histograms = aggregate(&file_classifications);
        let mut direct_files: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for file in &inventory.files {
            direct_files.entry(parent_dir(file)).or_default().push(file);
        }

        info!("Phase 4: Analyzing {} directories", histograms.len());
        let ctx = DirectoryContext {
            primary_threshold: self.options.primary_threshold,
            naming_dominance: self.options.naming_dominance,
            deps: &deps,
            modules: &modules,
        };
        let analyses: Vec<DirectoryAnalysis> = histograms
            .par_iter()
            .map(|(path, histogram)| {
                let files = direct_files
                    .get(path.as_str())
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                analyze_directory(histogram, files, &ctx)
            })
            .collect();

        info!("Phase 5: Linking and project-level detection");
        let index = DirectoryIndex::build(analyses);
        let architecture_pattern = detect_pattern(&index, &inventory.files, &input.hints);
        let file_paths = || inventory.files.iter().map(String::as_str);
        let naming_convention = naming_convention(file_paths(), self.options.naming_dominance);
        let version_isolation = version_isolation(file_paths());
        let module_hierarchy = module_hierarchy(index.paths());

        let fingerprint = ProjectFingerprint {
            file_classifications,
            directory_analyses: index.into_vec(),
            architecture_pattern,
            naming_convention,
            version_isolation,
            module_hierarchy,
            skipped: inventory.skipped,
            unattributed_modules: modules.unattributed,
        };
        info!("{}", fingerprint.summary());
        fingerprint
    }
}

/// Analyze with default options
pub fn analyze(input: &AnalysisInput) -> ProjectFingerprint {
    ProjectAnalyzer::default().analyze(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArchitectureType, FileCategory, InputErrorKind, ModuleDescriptor};

    #[test]
    fn test_button_scenario() {
        let input = AnalysisInput::new([
            "components/Button/Button.tsx",
            "components/Button/Button.test.tsx",
            "components/Button/index.ts",
        ]);
        let fp = analyze(&input);
        assert_eq!(fp.file_classifications.len(), 3);
        let button = fp.directory("components/Button").unwrap();
        assert_eq!(button.purpose, "组件");
        assert_eq!(
            button.primary_categories,
            vec![FileCategory::Component, FileCategory::Utility, FileCategory::Test]
        );
    }

    #[test]
    fn test_payment_scenario() {
        let fp = analyze(&AnalysisInput::new(["services/payment/client.ts"]));
        assert_eq!(fp.file("services/payment/client.ts").unwrap().category, FileCategory::Service);
        assert_eq!(fp.directory("services/payment").unwrap().purpose, "支付相关 API 服务");
    }

    #[test]
    fn test_empty_input() {
        let fp = analyze(&AnalysisInput::default());
        assert!(fp.file_classifications.is_empty());
        assert!(fp.directory_analyses.is_empty());
        assert_eq!(fp.architecture_pattern.pattern_type, ArchitectureType::Unknown);
        assert_eq!(fp.module_hierarchy.max_depth, 0);
    }

    #[test]
    fn test_skips_and_unattributed_modules() {
        let input = AnalysisInput::new(["/elsewhere/a.ts", "src/a.ts", ""])
            .with_root("/repo")
            .with_modules(vec![
                ModuleDescriptor::new("core", "src"),
                ModuleDescriptor::new("ghost", "lib"),
            ]);
        let fp = analyze(&input);
        assert_eq!(fp.file_classifications.len(), 1);
        assert_eq!(fp.skipped.len(), 2);
        assert_eq!(fp.skipped[0].reason, InputErrorKind::OutsideRoot);
        assert_eq!(fp.unattributed_modules, vec!["ghost"]);
        assert_eq!(fp.directory("src").unwrap().module.as_deref(), Some("core"));
    }

    #[test]
    fn test_worker_count_does_not_change_output() {
        let input = AnalysisInput::new([
            "src/pages/Home/page.tsx",
            "src/components/Card.tsx",
            "src/hooks/useCard.ts",
            "src/utils/format.ts",
            "src/api/v1/users.ts",
        ]);
        let single = ProjectAnalyzer::new(AnalysisOptions::default().with_workers(1)).analyze(&input);
        let many = ProjectAnalyzer::new(AnalysisOptions::default().with_workers(4)).analyze(&input);
        assert_eq!(single, many);
    }

    #[test]
    fn test_invalid_thresholds_fall_back() {
        let analyzer = ProjectAnalyzer::new(AnalysisOptions {
            workers: 10_000,
            primary_threshold: 0.0,
            naming_dominance: 1.5,
        });
        assert_eq!(analyzer.options().workers, MAX_WORKERS);
        assert_eq!(analyzer.options().primary_threshold, PRIMARY_CATEGORY_THRESHOLD);
        assert_eq!(analyzer.options().naming_dominance, NAMING_DOMINANCE_THRESHOLD);
    }
}
