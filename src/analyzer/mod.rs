//! Structural Analyzer
//!
//! Path-only project analysis:
//! - File classification and directory aggregation
//! - Directory purpose inference
//! - Architecture pattern detection and auxiliary extractors
//! - Gitignore-aware inventory scanning (host side)

pub mod aggregate;
pub mod architecture;
pub mod classifier;
pub mod directory;
pub mod extractors;
pub mod inventory;
pub mod pipeline;
pub mod purpose;
pub mod scanner;

pub use aggregate::{aggregate, primary_categories};
pub use architecture::detect_pattern;
pub use classifier::classify;
pub use directory::DirectoryIndex;
pub use pipeline::{AnalysisOptions, ProjectAnalyzer, analyze};
pub use purpose::{PurposeInput, PurposeLabel, infer_purpose};
pub use scanner::FileScanner;
