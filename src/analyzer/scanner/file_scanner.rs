use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::constants::scanner::DEFAULT_MAX_FILE_SIZE;
use crate::types::{Result, ShapeError, log_filter_error};

/// Directories never worth fingerprinting
const DEFAULT_SKIP_DIRS: &[&str] = &[
    "node_modules",
    "target",
    ".git",
    "build",
    "dist",
    "out",
    "coverage",
    "__pycache__",
    "vendor",
    ".venv",
    ".next",
    ".nuxt",
    ".turbo",
];

/// Gitignore-aware inventory provider producing root-relative paths
pub struct FileScanner {
    root: PathBuf,
    include: Vec<String>,
    exclude: Vec<String>,
    max_file_size: u64,
}

impl FileScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            include: Vec::new(),
            exclude: Vec::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Only keep paths matching at least one pattern (all paths when empty)
    pub fn with_include(mut self, patterns: Vec<String>) -> Self {
        self.include = patterns;
        self
    }

    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Root-relative, `/`-separated file paths, sorted
    pub fn paths(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Err(ShapeError::scan(
                self.root.display().to_string(),
                "not a directory",
            ));
        }
        let include = compile(&self.include)?;
        let exclude = compile(&self.exclude)?;

        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false) // Security: prevent symlink traversal attacks
            .filter_entry(|entry| {
                let name = entry.file_name().to_string_lossy();
                !(entry.depth() > 0 && DEFAULT_SKIP_DIRS.contains(&name.as_ref()))
            })
            .build();

        let mut paths = Vec::new();
        for entry in walker.filter_map(|e| log_filter_error(e, "walking project tree")) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(relative) = self.relative(path) else {
                continue;
            };
            if !include.is_empty() && !include.iter().any(|p| p.matches(&relative)) {
                continue;
            }
            if exclude.iter().any(|p| p.matches(&relative)) {
                continue;
            }
            if !self.check_size(path) {
                tracing::debug!("Skipping oversized file {}", relative);
                continue;
            }
            paths.push(relative);
        }

        paths.sort();
        tracing::debug!("Scanned {} files under {}", paths.len(), self.root.display());
        Ok(paths)
    }

    fn relative(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        (!parts.is_empty()).then(|| parts.join("/"))
    }

    fn check_size(&self, path: &Path) -> bool {
        path.metadata()
            .map(|m| m.len() <= self.max_file_size)
            .unwrap_or(false)
    }
}

fn compile(patterns: &[String]) -> Result<Vec<glob::Pattern>> {
    patterns
        .iter()
        .map(|p| {
            glob::Pattern::new(p)
                .map_err(|e| ShapeError::Config(format!("invalid glob pattern '{}': {}", p, e)))
        })
        .collect()
}
