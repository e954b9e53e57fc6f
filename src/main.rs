//! `arc-diem-config` - settings form tooling for the Arc Diem watch face

use clap::Parser;

use arc_diem_config::cli::args::Cli;
use arc_diem_config::cli::commands;
use arc_diem_config::error::ExitCode;
use arc_diem_config::observability::{LogSettings, init_logging};

fn main() {
    let cli = Cli::parse();

    init_logging(LogSettings::from_cli(&cli));

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
