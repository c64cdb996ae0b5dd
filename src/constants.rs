//! Global Constants
//!
//! Centralized constants for classification tuning.
//! All magic numbers should be defined here with documentation.

/// Classification thresholds
pub mod classification {
    /// Share of a directory's direct files a category needs to count as primary
    pub const PRIMARY_CATEGORY_THRESHOLD: f64 = 0.20;

    /// Share of classifiable names a casing needs to be reported as dominant
    pub const NAMING_DOMINANCE_THRESHOLD: f64 = 0.60;
}

/// Module hierarchy leveling constants
pub mod hierarchy {
    /// Deepest level that may be labelled feature/module
    pub const FEATURE_LEVEL_MAX_DEPTH: usize = 2;

    /// Share of a level's directory names that must agree on country/region
    pub const LEVEL_MAJORITY: f64 = 0.5;
}

/// Pipeline constants
pub mod pipeline {
    /// Worker count meaning "let rayon decide"
    pub const AUTO_WORKERS: usize = 0;

    /// Upper bound on explicitly requested workers
    pub const MAX_WORKERS: usize = 256;
}

/// Inventory scanning constants
pub mod scanner {
    /// Default maximum file size for the inventory (1MB)
    pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;
}
