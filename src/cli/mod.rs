//! Command-line host: scanning, rendering and configuration commands.
//! The binary in `main.rs` only parses arguments and dispatches here.

pub mod commands;
pub mod ui;
