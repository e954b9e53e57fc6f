//! Shell completion generation

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::ArcDiemError;

const BIN_NAME: &str = "arc-diem-config";

/// Writes a completion script to stdout, or into `--out-dir` when given.
///
/// # Errors
///
/// Returns an I/O error if the output directory cannot be written.
pub fn run(args: &CompletionsArgs) -> Result<(), ArcDiemError> {
    let mut cmd = Cli::command();

    if let Some(dir) = &args.out_dir {
        let path = clap_complete::generate_to(args.shell, &mut cmd, BIN_NAME, dir)?;
        tracing::info!(shell = %args.shell, path = %path.display(), "completion script written");
    } else {
        clap_complete::generate(args.shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
    }
    Ok(())
}
