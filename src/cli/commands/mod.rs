pub mod analyze;
pub mod classify;
pub mod config;
