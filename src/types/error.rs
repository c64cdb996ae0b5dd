//! Unified Error Type System
//!
//! Centralized error types for the library and the CLI host.
//!
//! The classification cascades never fail: they fall through to a fallback
//! label. Errors only arise at the boundaries:
//!
//! - **Input malformation**: a path outside the declared root or a module
//!   descriptor matching no file. Recorded and skipped, never fatal.
//! - **Host errors**: filesystem scanning, configuration and serialization.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Input Error
// =============================================================================

/// Kind of malformed input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputErrorKind {
    /// Path is empty after normalization
    EmptyPath,
    /// Absolute path not under the declared root
    OutsideRoot,
    /// Relative path whose `..` segments climb above the root
    EscapesRoot,
    /// Module descriptor resolving to no file
    UnmatchedModule,
}

impl std::fmt::Display for InputErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "EMPTY_PATH"),
            Self::OutsideRoot => write!(f, "OUTSIDE_ROOT"),
            Self::EscapesRoot => write!(f, "ESCAPES_ROOT"),
            Self::UnmatchedModule => write!(f, "UNMATCHED_MODULE"),
        }
    }
}

/// Structured input error with the offending value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    pub kind: InputErrorKind,
    /// Offending path or module name
    pub subject: String,
    pub message: String,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] '{}': {}", self.kind, self.subject, self.message)
    }
}

impl std::error::Error for InputError {}

impl InputError {
    pub fn new(
        kind: InputErrorKind,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn empty_path(subject: impl Into<String>) -> Self {
        Self::new(InputErrorKind::EmptyPath, subject, "path is empty")
    }

    pub fn outside_root(subject: impl Into<String>, root: &str) -> Self {
        Self::new(
            InputErrorKind::OutsideRoot,
            subject,
            format!("not under declared root {}", root),
        )
    }

    pub fn escapes_root(subject: impl Into<String>) -> Self {
        Self::new(
            InputErrorKind::EscapesRoot,
            subject,
            "parent segments climb above the project root",
        )
    }

    pub fn unmatched_module(name: impl Into<String>, path: &str) -> Self {
        Self::new(
            InputErrorKind::UnmatchedModule,
            name,
            format!("module path {} matches no file", path),
        )
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum ShapeError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Scan error in {root}: {message}")]
    Scan { root: String, message: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Context(String),
}

pub type Result<T> = std::result::Result<T, ShapeError>;

impl ShapeError {
    /// Create a scan error
    pub fn scan(root: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Scan {
            root: root.into(),
            message: message.into(),
        }
    }
}

/// Context extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> Result<T>;

    /// Add context using a closure (lazy evaluation)
    fn with_context_fn<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| ShapeError::Context(format!("{}: {}", context.into(), e)))
    }

    fn with_context_fn<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| ShapeError::Context(format!("{}: {}", f().into(), e)))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_kind_display() {
        assert_eq!(InputErrorKind::EmptyPath.to_string(), "EMPTY_PATH");
        assert_eq!(InputErrorKind::OutsideRoot.to_string(), "OUTSIDE_ROOT");
        assert_eq!(
            InputErrorKind::UnmatchedModule.to_string(),
            "UNMATCHED_MODULE"
        );
    }

    #[test]
    fn test_input_error_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&InputErrorKind::EscapesRoot).unwrap(),
            "\"escapes-root\""
        );
    }

    #[test]
    fn test_input_error_display() {
        let err = InputError::outside_root("/tmp/x.ts", "/repo");
        assert_eq!(
            err.to_string(),
            "[OUTSIDE_ROOT] '/tmp/x.ts': not under declared root /repo"
        );
    }

    #[test]
    fn test_host_error_display() {
        assert_eq!(
            ShapeError::scan("/repo", "not a directory").to_string(),
            "Scan error in /repo: not a directory"
        );
        assert_eq!(
            ShapeError::Config("bad".to_string()).to_string(),
            "Config error: bad"
        );
    }

    #[test]
    fn test_result_ext_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = res.with_context("reading inventory").unwrap_err();
        assert_eq!(err.to_string(), "reading inventory: missing");
    }
}
