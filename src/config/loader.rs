//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/codeshape/config.toml)
//! 3. Project config (<project>/.codeshape/config.toml)
//! 4. Environment variables (CODESHAPE_* prefix, `__` between sections)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use super::types::Config;
use crate::types::{Result, ShapeError};

const PROJECT_DIR: &str = ".codeshape";
const CONFIG_FILE: &str = "config.toml";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for the current directory:
    /// defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        Self::load_for(Path::new("."))
    }

    /// Load configuration for the project rooted at `project_root`
    pub fn load_for(project_root: &Path) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        let project_path = Self::project_config_path(project_root);
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // CODESHAPE_ANALYSIS__PRIMARY_THRESHOLD -> analysis.primary_threshold
        figment = figment.merge(Env::prefixed("CODESHAPE_").split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ShapeError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| ShapeError::Config(format!("Configuration error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/codeshape/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join("codeshape"))
    }

    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    pub fn project_dir(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_DIR)
    }

    pub fn project_config_path(project_root: &Path) -> PathBuf {
        Self::project_dir(project_root).join(CONFIG_FILE)
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file paths
    pub fn show_path(project_root: &Path) {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = Self::project_config_path(project_root);
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());
    }

    /// Show current effective configuration
    pub fn show_config(project_root: &Path, as_json: bool) -> Result<()> {
        let config = Self::load_for(project_root)?;

        if as_json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(&config).map_err(|e| ShapeError::Config(e.to_string()))?
            );
        }

        Ok(())
    }

    /// Edit config file with default editor
    pub fn edit_config(project_root: &Path, global: bool) -> Result<()> {
        let path = if global {
            Self::global_config_path().ok_or_else(|| {
                ShapeError::Config("Cannot determine global config path".to_string())
            })?
        } else {
            Self::project_config_path(project_root)
        };

        if !path.exists() {
            println!("Config file does not exist: {}", path.display());
            println!(
                "Run: codeshape config init {}",
                if global { "--global" } else { "" }
            );
            return Ok(());
        }

        let editor = env::var("EDITOR").unwrap_or_else(|_| {
            if cfg!(target_os = "macos") {
                "open".to_string()
            } else if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "vi".to_string()
            }
        });

        let status = Command::new(&editor).arg(&path).status().map_err(|e| {
            ShapeError::Config(format!("Failed to launch editor {}: {}", editor, e))
        })?;

        if !status.success() {
            return Err(ShapeError::Config("Editor exited with error".to_string()));
        }

        println!("Config saved: {}", path.display());
        Ok(())
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Write the global config template, returning its path
    pub fn init_global(force: bool) -> Result<PathBuf> {
        let global_dir = Self::global_dir().ok_or_else(|| {
            ShapeError::Config("Cannot determine global config directory".to_string())
        })?;
        fs::create_dir_all(&global_dir)?;

        let config_path = global_dir.join(CONFIG_FILE);
        Self::write_template(&config_path, &Self::default_global_config(), force)?;
        Ok(config_path)
    }

    /// Write the project config template, returning its path
    pub fn init_project(project_root: &Path, force: bool) -> Result<PathBuf> {
        let project_dir = Self::project_dir(project_root);
        fs::create_dir_all(&project_dir)?;

        let config_path = project_dir.join(CONFIG_FILE);
        Self::write_template(&config_path, &Self::default_project_config(), force)?;
        Ok(config_path)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn write_template(path: &Path, contents: &str, force: bool) -> Result<()> {
        if path.exists() && !force {
            info!("Config exists: {}", path.display());
            return Ok(());
        }
        fs::write(path, contents)?;
        info!("Created config: {}", path.display());
        Ok(())
    }

    fn default_global_config() -> String {
        r#"# codeshape global configuration
# User-wide defaults. Settings in <project>/.codeshape/config.toml override these.

version = "1.0"

[analysis]
# 0 = one worker per core
workers = 0
primary_threshold = 0.2
naming_dominance = 0.6
"#
        .to_string()
    }

    fn default_project_config() -> String {
        r#"# codeshape project configuration

version = "1.0"

# Third-party packages the project depends on. Activates framework-aware
# directory purposes (e.g. "redux" makes a `store` directory state management).
dependencies = []

[analysis]
exclude = [
    "**/*.min.js",
    "**/*.map",
]

# Prefer a pattern when its own indicators are present.
# [hints]
# preferred_pattern = "feature-based"

# Attribute directories to named modules by path prefix.
# [[modules]]
# name = "web"
# path = "packages/web"
"#
        .to_string()
    }
}
