//! `defaults` and `apply` commands: compute the selection the settings host
//! would return.

use crate::cli::args::{ApplyArgs, DefaultsArgs, OutputFormat};
use crate::cli::commands::load_form;
use crate::error::ArcDiemError;
use crate::settings::{ArcDiemSettings, Phase, Selection, parse_assignment};

/// Prints the selection produced without any user input.
///
/// # Errors
///
/// Returns an error if the form document cannot be loaded.
pub fn defaults(args: &DefaultsArgs) -> Result<(), ArcDiemError> {
    let form = load_form(args.form.as_deref())?;
    let selection = Selection::defaults(&form);
    tracing::info!(fields = selection.len(), "computed default selection");
    print_selection(&selection, args.format)
}

/// Applies `--set` values on top of the defaults and prints the result.
///
/// # Errors
///
/// Returns an error if the form cannot be loaded, an assignment is
/// malformed, or a value is rejected by its field.
pub fn apply(args: &ApplyArgs) -> Result<(), ArcDiemError> {
    let form = load_form(args.form.as_deref())?;

    let updates = args
        .set
        .iter()
        .map(|raw| parse_assignment(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let selection = Selection::defaults(&form).apply(&form, updates)?;
    tracing::info!(updated = args.set.len(), "applied submitted settings");
    print_selection(&selection, args.format)?;

    if args.form.is_none() && args.format == OutputFormat::Human {
        let settings = ArcDiemSettings::from_selection(&selection)?;
        print_watchface(&settings);
    }
    Ok(())
}

fn print_selection(selection: &Selection, format: OutputFormat) -> Result<(), ArcDiemError> {
    match format {
        OutputFormat::Human => {
            for (key, value) in selection.iter() {
                println!("{key} = {value}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(selection)?),
    }
    Ok(())
}

fn print_watchface(settings: &ArcDiemSettings) {
    let cycle = settings.day_cycle();
    let hours = |phase| cycle.span_minutes(phase) / 60;

    println!();
    println!(
        "day {:02}:00 -> {:02}:00 ({}h day, {}h night)",
        settings.day_start,
        settings.day_end,
        hours(Phase::Day),
        hours(Phase::Night)
    );
    println!("battery meter: {}", settings.battery_status.value());
    println!("bluetooth icon: {}", settings.bluetooth_status.value());
    println!(
        "vibrate on disconnect/connect: {}/{}",
        settings.vibrate_on_disconnect.value(),
        settings.vibrate_on_connect.value()
    );
}
