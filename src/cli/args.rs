//! CLI argument definitions
//!
//! All Clap derive structs for `arc-diem-config` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::render::FormFormat;
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Settings form tooling for the Arc Diem watch face.
#[derive(Parser, Debug)]
#[command(name = "arc-diem-config", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "ARC_DIEM_COLOR")]
    pub color: ColorChoice,

    /// Log line format.
    #[arg(long, default_value = "human", global = true, env = "ARC_DIEM_LOG_FORMAT")]
    pub log_format: LogFormat,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the Arc Diem settings form.
    Form(FormArgs),

    /// Validate form documents (the built-in form when no files are given).
    Validate(ValidateArgs),

    /// Print the settings selected when the user changes nothing.
    Defaults(DefaultsArgs),

    /// Apply submitted values to the defaults and print the result.
    Apply(ApplyArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `form`.
#[derive(Args, Debug)]
pub struct FormArgs {
    /// Document format.
    #[arg(short, long, default_value = "json")]
    pub format: FormFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Form documents to validate (.json, .yaml, .yml, or Clay .js).
    pub files: Vec<PathBuf>,

    /// Parse every file as this format instead of using the extension.
    #[arg(long)]
    pub input_format: Option<FormFormat>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable strict validation (warnings become errors).
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `defaults`.
#[derive(Args, Debug)]
pub struct DefaultsArgs {
    /// Form document to read instead of the built-in form.
    #[arg(long, env = "ARC_DIEM_FORM")]
    pub form: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `apply`.
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Form document to read instead of the built-in form.
    #[arg(long, env = "ARC_DIEM_FORM")]
    pub form: Option<PathBuf>,

    /// Submitted value as KEY=VALUE (repeatable).
    #[arg(short, long = "set", value_name = "KEY=VALUE", required = true)]
    pub set: Vec<String>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: clap_complete::Shell,

    /// Write the script into this directory instead of stdout.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================
