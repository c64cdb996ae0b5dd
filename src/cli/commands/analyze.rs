//! Analyze Command
//!
//! Scans a project tree and prints its structural fingerprint.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::analyzer::ProjectAnalyzer;
use crate::analyzer::scanner::FileScanner;
use crate::cli::ui::Output;
use crate::config::{Config, ConfigLoader};
use crate::types::{ProjectFingerprint, Result, ResultExt, ShapeError};

pub struct AnalyzeArgs {
    pub path: PathBuf,
    pub format: String,
    pub workers: Option<usize>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let format = OutputFormat::parse(&args.format)?;
    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load_for(&args.path)?,
    };
    if let Some(workers) = args.workers {
        config.analysis.workers = workers;
        config.validate()?;
    }

    let fingerprint = fingerprint(&args.path, &config)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&fingerprint)?;
            match &args.output {
                Some(path) => write_output(path, &json)?,
                None => println!("{}", json),
            }
        }
        OutputFormat::Text => {
            Output::new().fingerprint(&fingerprint);
            if let Some(path) = &args.output {
                write_output(path, &serde_json::to_string_pretty(&fingerprint)?)?;
            }
        }
    }
    Ok(())
}

/// Scan `root` and run the pipeline with `config`
pub fn fingerprint(root: &Path, config: &Config) -> Result<ProjectFingerprint> {
    let paths = FileScanner::new(root)
        .with_include(config.analysis.include.clone())
        .with_exclude(config.analysis.exclude.clone())
        .with_max_file_size(config.analysis.max_file_size)
        .paths()?;
    info!("Found {} files under {}", paths.len(), root.display());

    let analyzer = ProjectAnalyzer::new(config.to_options());
    Ok(analyzer.analyze(&config.to_input(paths)))
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context_fn(|| format!("writing {}", path.display()))?;
    Output::new().success(&format!("Fingerprint written to {}", path.display()));
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ShapeError::Config(format!(
                "Invalid format '{}'. Valid values: text, json",
                s
            ))),
        }
    }
}
