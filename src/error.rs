//! Error types for `arc-diem-config`
//!
//! One error hierarchy for form loading, form validation and settings
//! application, plus the exit codes the CLI maps them to.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Form error (unparseable document, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Submitted settings rejected (unknown key, out of range, bad option)
    pub const SETTINGS_ERROR: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `arc-diem-config` operations.
///
/// Aggregates the domain errors and maps each one to an exit code.
#[derive(Debug, Error)]
pub enum ArcDiemError {
    /// Form loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Submitted settings were rejected
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ArcDiemError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(ConfigError::MissingFile { .. } | ConfigError::ReadError { .. })
            | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Config(_) | Self::Json(_) | Self::Yaml(_) => ExitCode::CONFIG_ERROR,
            Self::Settings(SettingsError::MalformedAssignment { .. }) => ExitCode::USAGE_ERROR,
            Self::Settings(_) => ExitCode::SETTINGS_ERROR,
        }
    }
}

// ============================================================================
// Form Errors
// ============================================================================

/// Form document loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Document parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the form document
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Document contains nothing to parse
    #[error("form document is empty: {path}")]
    EmptyFile {
        /// Path to the form document
        path: PathBuf,
    },

    /// Form validation failed
    #[error("validation failed for {path}: {}", summarize(errors))]
    ValidationError {
        /// Path (or name) of the form that failed
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Referenced form document not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Form document exists but could not be read
    #[error("cannot read {path}: {source}")]
    ReadError {
        /// Path to the form document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },

    /// One or more form documents failed validation.
    #[error("{count} form(s) failed validation")]
    ValidationFailed {
        /// Number of forms that failed validation.
        count: usize,
    },
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// Settings Errors
// ============================================================================

/// Errors raised while applying submitted values to a form's selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// No field in the form carries this message key
    #[error("unknown setting '{key}'{}", suggestion.as_ref().map_or_else(String::new, |s| format!(" (did you mean '{s}'?)")))]
    UnknownKey {
        /// The key that was submitted
        key: String,
        /// Closest known key, if one is close enough
        suggestion: Option<String>,
    },

    /// Value has the wrong shape for the field
    #[error("setting '{key}' expects {expected}, got '{value}'")]
    TypeMismatch {
        /// Message key of the field
        key: String,
        /// What the field accepts
        expected: &'static str,
        /// The value that was submitted
        value: String,
    },

    /// Slider value outside its bounds
    #[error("setting '{key}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Message key of the slider
        key: String,
        /// Submitted value
        value: i64,
        /// Lower bound (inclusive)
        min: i64,
        /// Upper bound (inclusive)
        max: i64,
    },

    /// Radiogroup value not among the declared options
    #[error("setting '{key}' must be one of [{}], got '{value}'", allowed.join(", "))]
    InvalidOption {
        /// Message key of the radiogroup
        key: String,
        /// Submitted value
        value: String,
        /// Declared option values, in order
        allowed: Vec<String>,
    },

    /// `KEY=VALUE` assignment could not be split
    #[error("malformed assignment '{input}', expected KEY=VALUE")]
    MalformedAssignment {
        /// The raw assignment text
        input: String,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found in a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Path to the offending descriptor (e.g., "items[1].items[2]")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        if self.path.is_empty() {
            write!(f, "{prefix}: {}", self.message)
        } else {
            write!(f, "{prefix}: {} at {}", self.message, self.path)
        }
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Validation failure that makes the form unusable
    Error,
    /// Potential issue that does not prevent the form from rendering
    Warning,
}
