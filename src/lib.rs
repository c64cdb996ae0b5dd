//! codeshape - Structural Fingerprinting for Source Trees
//!
//! Infers the shape of a project from its file paths alone: what each file
//! is, what each directory is for, and which architecture the tree follows.
//! File contents are never read.
//!
//! ## Core Features
//!
//! - **File Classifier**: three-stage cascade (fast path, naming, directory)
//! - **Directory Purposes**: dependency, keyword, business-term and inherited labels
//! - **Architecture Detection**: monorepo, clean, feature-based, MVC, DDD, microservices, layered
//! - **Auxiliary Signals**: naming convention, co-location, version isolation, module hierarchy
//!
//! ## Quick Start
//!
//! ```
//! use codeshape::{AnalysisInput, analyze};
//!
//! let input = AnalysisInput::new([
//!     "components/Button/Button.tsx",
//!     "components/Button/index.ts",
//! ]);
//! let fingerprint = analyze(&input);
//! assert_eq!(fingerprint.directory("components/Button").unwrap().purpose, "组件");
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: classification pipeline, purpose engine, detectors, scanner
//! - [`types`]: input, output and error types
//! - [`config`]: layered configuration
//! - [`cli`]: command handlers for the `codeshape` binary

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{AnalysisConfig, Config, ConfigLoader};

// Error Types
pub use types::error::{InputError, InputErrorKind, Result, ResultExt, ShapeError};

// Input / Output
pub use types::{
    AnalysisInput, ArchitectureHints, ArchitecturePattern, ArchitectureType, Confidence,
    DirectoryAnalysis, FileCategory, FileClassification, ModuleDescriptor, ProjectFingerprint,
};

// =============================================================================
// Analyzer Re-exports
// =============================================================================

pub use analyzer::{AnalysisOptions, FileScanner, ProjectAnalyzer, analyze, classify};
