//! Configuration Management
//!
//! Hierarchical resolution, later sources winning:
//! 1. Built-in defaults
//! 2. Global config (~/.config/codeshape/config.toml)
//! 3. Project config (.codeshape/config.toml)
//! 4. Environment variables (CODESHAPE_*)
//! 5. CLI arguments
//!
//! The analyzer core never reads configuration; [`Config::to_options`] and
//! [`Config::to_input`] hand it explicit values.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
