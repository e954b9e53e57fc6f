//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod form;
pub mod settings;
pub mod validate;
pub mod version;

use std::path::Path;

use crate::cli::args::{Cli, Commands};
use crate::config::{Form, FormLoader, arc_diem_form};
use crate::error::ArcDiemError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), ArcDiemError> {
    match cli.command {
        Commands::Form(args) => form::run(&args),
        Commands::Validate(args) => validate::run(&args),
        Commands::Defaults(args) => settings::defaults(&args),
        Commands::Apply(args) => settings::apply(&args),
        Commands::Completions(args) => completions::run(&args),
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

/// Loads the form at `path`, or the built-in Arc Diem form when absent.
fn load_form(path: Option<&Path>) -> Result<Form, ArcDiemError> {
    let Some(path) = path else {
        return Ok(arc_diem_form());
    };

    tracing::info!(form = %path.display(), "loading form document");
    let loaded = FormLoader::with_defaults().load(path)?;
    for warning in &loaded.warnings {
        tracing::warn!(
            location = warning.location.as_deref().unwrap_or("<form>"),
            "{}",
            warning.message
        );
    }
    Ok(loaded.form)
}
