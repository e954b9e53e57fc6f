//! Logging initialization.
//!
//! `tracing` output goes to stderr so stdout stays clean for documents and
//! selections. Verbosity comes from `-v` counts, `--quiet` drops everything
//! below errors, and `ARC_DIEM_LOG_LEVEL` overrides both.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, ColorChoice};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_LEVEL_ENV: &str = "ARC_DIEM_LOG_LEVEL";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Resolved logging options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogSettings {
    pub format: LogFormat,
    pub verbosity: u8,
    pub quiet: bool,
    pub color: ColorChoice,
}

impl LogSettings {
    /// Picks the logging options out of the global CLI flags.
    #[must_use]
    pub const fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.log_format,
            verbosity: cli.verbose,
            quiet: cli.quiet,
            color: cli.color,
        }
    }

    /// Default filter directive when `ARC_DIEM_LOG_LEVEL` is unset.
    ///
    /// - quiet → `"error"`
    /// - 0 → `"warn"`, 1 → `"info"`, 2 → `"debug"`, 3+ → `"trace"`
    #[must_use]
    pub const fn directive(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn use_ansi(&self) -> bool {
        match self.color {
            ColorChoice::Auto => {
                std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// Uses `try_init()`, so a second call (e.g. across tests) is a no-op.
pub fn init_logging(settings: LogSettings) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(settings.directive()));
    let show_target = settings.verbosity >= 2;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(show_target)
        .with_writer(std::io::stderr);

    let _ = match settings.format {
        LogFormat::Human => builder.with_ansi(settings.use_ansi()).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn settings(verbosity: u8, quiet: bool) -> LogSettings {
        LogSettings {
            verbosity,
            quiet,
            ..LogSettings::default()
        }
    }

    #[test]
    fn directive_follows_verbosity() {
        assert_eq!(settings(0, false).directive(), "warn");
        assert_eq!(settings(1, false).directive(), "info");
        assert_eq!(settings(2, false).directive(), "debug");
        assert_eq!(settings(3, false).directive(), "trace");
        assert_eq!(settings(255, false).directive(), "trace");
    }

    #[test]
    fn quiet_wins_over_verbosity() {
        assert_eq!(settings(3, true).directive(), "error");
    }

    #[test]
    fn from_cli_reads_global_flags() {
        let cli = Cli::try_parse_from([
            "arc-diem-config",
            "-vv",
            "--log-format",
            "json",
            "--color",
            "never",
            "form",
        ])
        .unwrap();
        let resolved = LogSettings::from_cli(&cli);
        assert_eq!(resolved.format, LogFormat::Json);
        assert_eq!(resolved.verbosity, 2);
        assert_eq!(resolved.color, ColorChoice::Never);
        assert!(!resolved.quiet);
    }

    #[test]
    fn init_logging_does_not_panic() {
        init_logging(settings(0, false));
        init_logging(LogSettings {
            format: LogFormat::Json,
            ..settings(3, false)
        });
    }
}
