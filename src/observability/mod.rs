//! Observability module
//!
//! Structured logging for `arc-diem-config` commands.

pub mod logging;

pub use logging::{LogFormat, LogSettings, init_logging};
