//! `validate` command: check form documents.

use std::path::Path;

use serde::Serialize;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::{
    FormFormat, FormLoader, LoaderOptions, ValidationResult, Validator, arc_diem_form,
};
use crate::error::{ArcDiemError, ConfigError, ValidationIssue};

const BUILTIN_NAME: &str = "<built-in>";

#[derive(Debug, Serialize)]
struct FileReport {
    path: String,
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Summary {
    total: usize,
    passed: usize,
    failed: usize,
}

#[derive(Debug, Serialize)]
struct Report {
    files: Vec<FileReport>,
    summary: Summary,
}

/// Validates every listed document, or the built-in form when none are
/// listed, and reports all of them before failing.
///
/// # Errors
///
/// Returns [`ConfigError::ValidationFailed`] if any document is invalid
/// (or has warnings under `--strict`).
pub fn run(args: &ValidateArgs) -> Result<(), ArcDiemError> {
    let reports: Vec<FileReport> = if args.files.is_empty() {
        let result = Validator::new().validate(&arc_diem_form());
        vec![report_for(BUILTIN_NAME, &result, args.strict)]
    } else {
        args.files
            .iter()
            .map(|path| validate_file(path, args.input_format, args.strict))
            .collect()
    };

    let failed = reports.iter().filter(|r| !r.valid).count();
    let report = Report {
        summary: Summary {
            total: reports.len(),
            passed: reports.len() - failed,
            failed,
        },
        files: reports,
    };

    match args.format {
        OutputFormat::Human => print_human(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if failed > 0 {
        return Err(ConfigError::ValidationFailed { count: failed }.into());
    }
    Ok(())
}

fn validate_file(path: &Path, forced: Option<FormFormat>, strict: bool) -> FileReport {
    let name = path.display().to_string();
    tracing::info!(file = %name, "validating form document");

    let loader = FormLoader::new(LoaderOptions {
        format: forced,
        ..LoaderOptions::default()
    });
    match loader.parse_file(path) {
        Ok(form) => report_for(&name, &Validator::new().validate(&form), strict),
        Err(e) => failure(name, e.to_string()),
    }
}

fn report_for(name: &str, result: &ValidationResult, strict: bool) -> FileReport {
    FileReport {
        path: name.to_string(),
        valid: result.passes(strict),
        errors: result.errors.iter().map(ToString::to_string).collect(),
        warnings: result.warnings.iter().map(ToString::to_string).collect(),
    }
}

fn failure(path: String, message: String) -> FileReport {
    FileReport {
        path,
        valid: false,
        errors: vec![message],
        warnings: Vec::new(),
    }
}

fn print_human(report: &Report) {
    for file in &report.files {
        let status = if file.valid { "ok" } else { "FAILED" };
        println!("{}: {status}", file.path);
        for issue in file.errors.iter().chain(&file.warnings) {
            println!("  {issue}");
        }
    }
    let Summary {
        total,
        passed,
        failed,
    } = report.summary;
    println!("{total} checked, {passed} passed, {failed} failed");
}
