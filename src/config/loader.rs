//! Form document loader
//!
//! This module implements the loading pipeline for form documents on disk:
//! 1. Existence and size checks
//! 2. UTF-8 BOM removal, empty-document detection
//! 3. Parsing (format forced or inferred from the extension)
//! 4. Validation, with warnings optionally promoted to errors

use crate::config::render::{self, FormFormat};
use crate::config::schema::Form;
use crate::config::validation::Validator;
use crate::error::{ArcDiemError, ConfigError};

use std::path::{Path, PathBuf};

// ============================================================================
// Public API
// ============================================================================

/// Options for the form loader.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Parse every document as this format instead of inferring it.
    pub format: Option<FormFormat>,

    /// Treat validation warnings as errors.
    pub strict: bool,

    /// Maximum document size in bytes.
    pub max_config_size: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            format: None,
            strict: false,
            max_config_size: env_or("ARC_DIEM_MAX_CONFIG_SIZE", 1024 * 1024),
        }
    }
}

/// Result of loading a form document.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded and validated form.
    pub form: Form,

    /// Warnings encountered during loading.
    pub warnings: Vec<LoadWarning>,
}

/// Warning during form loading.
#[derive(Debug, Clone)]
pub struct LoadWarning {
    /// Warning message.
    pub message: String,

    /// Location where the warning occurred.
    pub location: Option<String>,
}

/// Form document loader.
#[derive(Debug, Default)]
pub struct FormLoader {
    options: LoaderOptions,
}

impl FormLoader {
    /// Creates a new loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a new loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LoaderOptions::default())
    }

    /// Loads, parses and validates a form document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file exceeds the size limit or is empty
    /// - Parsing fails
    /// - Validation reports errors (or warnings, in strict mode)
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        let form = self.parse_file(path)?;
        self.finish(form, path)
    }

    /// Parses and validates a form document held in memory.
    ///
    /// # Errors
    ///
    /// Returns a parse error, an empty-document error, or a validation error.
    pub fn load_from_str(&self, text: &str, format: FormFormat) -> Result<LoadResult, ConfigError> {
        let path = Path::new("<memory>");
        let form = parse_text(text, format, path)?;
        self.finish(form, path)
    }

    /// Reads and parses a form document without validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, too large, unreadable,
    /// empty, or not a form document.
    pub fn parse_file(&self, path: &Path) -> Result<Form, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

        let file_size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if file_size > self.options.max_config_size {
            return Err(ConfigError::InvalidValue {
                field: "file_size".to_string(),
                value: format!("{file_size} bytes"),
                expected: format!("at most {} bytes", self.options.max_config_size),
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            // not UTF-8
            std::io::ErrorKind::InvalidData => ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: e.to_string(),
            },
            _ => io_error(path, e),
        })?;

        let format = self
            .options
            .format
            .or_else(|| FormFormat::from_path(path))
            .unwrap_or_default();

        tracing::debug!(file = %path.display(), ?format, "parsing form document");
        parse_text(&raw, format, path)
    }

    fn finish(&self, form: Form, path: &Path) -> Result<LoadResult, ConfigError> {
        let result = Validator::new().validate(&form);

        let mut errors = result.errors;
        if self.options.strict {
            errors.extend(result.warnings.iter().cloned());
        }
        if !errors.is_empty() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                errors,
            });
        }

        let warnings = result
            .warnings
            .into_iter()
            .map(|issue| LoadWarning {
                message: issue.message,
                location: Some(issue.path).filter(|p| !p.is_empty()),
            })
            .collect();

        Ok(LoadResult { form, warnings })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_text(text: &str, format: FormFormat, path: &Path) -> Result<Form, ConfigError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.trim().is_empty() {
        return Err(ConfigError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    render::parse(text, format).map_err(|e| parse_error(path, &e))
}

fn io_error(path: &Path, err: std::io::Error) -> ConfigError {
    if err.kind() == std::io::ErrorKind::NotFound {
        ConfigError::MissingFile {
            path: path.to_path_buf(),
        }
    } else {
        ConfigError::ReadError {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

fn parse_error(path: &Path, err: &ArcDiemError) -> ConfigError {
    let (line, message) = match err {
        ArcDiemError::Json(e) => (Some(e.line()).filter(|l| *l > 0), e.to_string()),
        ArcDiemError::Yaml(e) => (e.location().map(|l| l.line()), e.to_string()),
        other => (None, other.to_string()),
    };
    ConfigError::ParseError {
        path: PathBuf::from(path),
        line,
        message,
    }
}

/// Reads an environment variable, falling back to `default` when unset or
/// unparseable.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ============================================================================
// Tests
// ============================================================================
