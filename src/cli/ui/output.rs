use console::style;

use crate::types::{
    ArchitecturePattern, DirectoryAnalysis, FileClassification, ModuleHierarchy, NamingConvention,
    ProjectFingerprint, VersionIsolation, VersionMechanism,
};

/// Directories listed in the text summary
const TOP_DIRECTORIES: usize = 15;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    // =========================================================================
    // Fingerprint rendering
    // =========================================================================

    pub fn fingerprint(&self, fp: &ProjectFingerprint) {
        self.header("Project Fingerprint");
        println!(
            "  {} files in {} directories",
            style(fp.file_classifications.len()).cyan(),
            style(fp.directory_analyses.len()).cyan()
        );

        self.architecture(&fp.architecture_pattern);
        self.naming(&fp.naming_convention);
        self.versions(&fp.version_isolation);
        self.hierarchy(&fp.module_hierarchy);
        self.directories(&fp.directory_analyses);

        if !fp.skipped.is_empty() {
            self.section("Skipped Input");
            for skipped in &fp.skipped {
                self.warning(&format!("{} ({})", skipped.path, skipped.reason));
            }
        }
        for module in &fp.unattributed_modules {
            self.warning(&format!("module '{}' matched no file", module));
        }
    }

    fn architecture(&self, pattern: &ArchitecturePattern) {
        self.section("Architecture");
        println!(
            "  {} ({} confidence)",
            style(pattern.pattern_type).green().bold(),
            pattern.confidence
        );
        for indicator in &pattern.indicators {
            println!("    {} {}", style("•").dim(), indicator);
        }
        let others: Vec<String> = pattern
            .candidates
            .iter()
            .filter(|c| c.pattern_type != pattern.pattern_type)
            .map(|c| format!("{} ({})", c.pattern_type, c.confidence))
            .collect();
        if !others.is_empty() {
            println!("  {} {}", style("also matched:").dim(), others.join(", "));
        }
        if let Some(features) = &pattern.feature_structure {
            println!("  features: {}", features.features.join(", "));
        }
        if let Some(layers) = &pattern.layer_structure {
            for (layer, dirs) in layers {
                println!("  layer {}: {}", style(layer).cyan(), dirs.join(", "));
            }
        }
    }

    fn naming(&self, naming: &NamingConvention) {
        self.section("Naming");
        println!(
            "  {} ({} of {} names classified)",
            style(naming.dominant).green(),
            naming.classified,
            naming.total
        );
        for (pattern, count) in &naming.counts {
            println!("    {:<12} {}", pattern.as_str(), count);
        }
    }

    fn versions(&self, versions: &VersionIsolation) {
        if versions.mechanism == VersionMechanism::None {
            return;
        }
        self.section("Versions");
        println!(
            "  {} isolation: {}",
            style(versions.mechanism.as_str()).green(),
            versions.versions.join(", ")
        );
    }

    fn hierarchy(&self, hierarchy: &ModuleHierarchy) {
        if hierarchy.levels.is_empty() {
            return;
        }
        self.section("Hierarchy");
        for level in &hierarchy.levels {
            println!(
                "  depth {} {:<8} {} directories",
                level.depth,
                style(level.kind.as_str()).cyan(),
                level.directories.len()
            );
        }
    }

    fn directories(&self, dirs: &[DirectoryAnalysis]) {
        if dirs.is_empty() {
            return;
        }
        self.section("Directories");
        let mut shown: Vec<&DirectoryAnalysis> = dirs.iter().filter(|d| d.depth > 0).collect();
        shown.sort_by(|a, b| b.file_count.cmp(&a.file_count).then_with(|| a.path.cmp(&b.path)));
        for dir in shown.iter().take(TOP_DIRECTORIES) {
            println!(
                "  {:<40} {:>5}  {}",
                dir.path,
                dir.file_count,
                style(&dir.purpose).yellow()
            );
        }
        if shown.len() > TOP_DIRECTORIES {
            println!(
                "  {}",
                style(format!("… {} more", shown.len() - TOP_DIRECTORIES)).dim()
            );
        }
    }

    pub fn classification(&self, file: &FileClassification) {
        let marker = if file.needs_deep_inspection {
            style("?").yellow()
        } else {
            style(" ").dim()
        };
        println!(
            "{} {:<50} {:<10} {:<6} {}",
            marker,
            file.path,
            style(file.category).green(),
            file.confidence,
            style(file.evidence.join("; ")).dim()
        );
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
