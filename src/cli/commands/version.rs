//! Version information display
//!
//! Prints the package version and the message keys the form exports.

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::config::arc_diem::MESSAGE_KEYS;

/// Print version information.
pub fn run(args: &VersionArgs) {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    match args.format {
        OutputFormat::Human => {
            println!("{name} {version}");
            println!("message keys: {}", MESSAGE_KEYS.join(", "));
        }
        OutputFormat::Json => {
            let info = serde_json::json!({
                "name": name,
                "version": version,
                "messageKeys": MESSAGE_KEYS,
            });
            println!("{info}");
        }
    }
}
