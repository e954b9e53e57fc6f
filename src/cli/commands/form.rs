//! `form` command: print the built-in settings form.

use crate::cli::args::FormArgs;
use crate::config::{arc_diem_form, render};
use crate::error::ArcDiemError;

/// Renders the Arc Diem form in the requested format.
///
/// # Errors
///
/// Returns a serialization error, or an I/O error if `--output` cannot be
/// written.
pub fn run(args: &FormArgs) -> Result<(), ArcDiemError> {
    let document = render::render(&arc_diem_form(), args.format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &document)?;
            tracing::info!(path = %path.display(), format = ?args.format, "form written");
        }
        None => print!("{document}"),
    }
    Ok(())
}
