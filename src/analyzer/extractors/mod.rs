//! Auxiliary signal extractors
//!
//! Secondary project signals that run after directory analysis: naming
//! convention, co-location, version isolation and module hierarchy. All
//! are pure functions of path strings and category histograms.

pub mod colocation;
pub mod hierarchy;
pub mod naming;
pub mod version;

pub use colocation::{co_location, has_index_file};
pub use hierarchy::module_hierarchy;
pub use naming::naming_convention;
pub use version::{directory_version, segment_version, version_isolation};
