//! The Arc Diem settings form.
//!
//! Message keys are the identifiers the watch face reads its settings
//! under and must stay stable across releases.

use crate::config::schema::{Descriptor, Form, RadioGroup, Slider};

pub const DAY_START: &str = "DayStart";
pub const DAY_END: &str = "DayEnd";
pub const BATTERY_STATUS: &str = "BatteryStatus";
pub const BLUETOOTH_STATUS: &str = "BluetoothStatus";
pub const BLUETOOTH_DISCONNECT: &str = "BluetoothDisconnect";
pub const BLUETOOTH_CONNECT: &str = "BluetoothConnect";

/// All message keys in form order.
pub const MESSAGE_KEYS: [&str; 6] = [
    DAY_START,
    DAY_END,
    BATTERY_STATUS,
    BLUETOOTH_STATUS,
    BLUETOOTH_DISCONNECT,
    BLUETOOTH_CONNECT,
];

/// First and last selectable hour of day.
pub const HOUR_MIN: i64 = 0;
pub const HOUR_MAX: i64 = 23;

const YES_NO: [(&str, &str); 2] = [("Yes", "yes"), ("No", "no")];

/// Builds the Arc Diem settings form.
#[must_use]
pub fn arc_diem_form() -> Form {
    Form::new(vec![
        Descriptor::heading("Arc Diem Configuration"),
        Descriptor::section(vec![
            Descriptor::heading("Daytime hours"),
            Slider::new(DAY_START, "Day starts at:", 7, HOUR_MIN, HOUR_MAX).into(),
            Slider::new(DAY_END, "Day ends at:", 23, HOUR_MIN, HOUR_MAX)
                .with_description(
                    "Choose hours from 0 to 23. You can set the end time \"earlier\" \
                     than the start time, if you like.",
                )
                .into(),
        ]),
        Descriptor::section(vec![
            Descriptor::heading("Notifications"),
            RadioGroup::new(
                BATTERY_STATUS,
                "Display battery status?",
                "low",
                [("Yes", "yes"), ("No", "no"), ("When Low", "low")],
            )
            .into(),
            RadioGroup::new(
                BLUETOOTH_STATUS,
                "Display Bluetooth status?",
                "disconnected",
                [
                    ("Yes", "yes"),
                    ("No", "no"),
                    ("When Disconnected", "disconnected"),
                ],
            )
            .into(),
            RadioGroup::new(
                BLUETOOTH_DISCONNECT,
                "Bluetooth Disconnect Vibration?",
                "yes",
                YES_NO,
            )
            .into(),
            RadioGroup::new(
                BLUETOOTH_CONNECT,
                "Bluetooth Connect Vibration?",
                "yes",
                YES_NO,
            )
            .into(),
        ]),
        Descriptor::submit("Save Settings"),
    ])
}
