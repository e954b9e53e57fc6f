//! Command-line interface
//!
//! Argument parsing and command handlers for the `arc-diem-config` binary.

pub mod args;
pub mod commands;
