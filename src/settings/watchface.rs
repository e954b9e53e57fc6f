//! Typed Arc Diem settings and the watch-face decisions they drive.
//!
//! [`ArcDiemSettings`] decodes a [`Selection`] produced from the Arc Diem
//! form. Keys missing from the selection keep their form default, so a
//! partial payload from the settings host is still usable.

use serde::{Deserialize, Serialize};

use crate::config::arc_diem::{
    BATTERY_STATUS, BLUETOOTH_CONNECT, BLUETOOTH_DISCONNECT, BLUETOOTH_STATUS, DAY_END, DAY_START,
    HOUR_MAX, HOUR_MIN,
};
use crate::error::SettingsError;
use crate::settings::{SettingValue, Selection};

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// Battery percentage below which `WhenLow` shows the meter.
pub const LOW_BATTERY_PERCENT: u8 = 30;

// ============================================================================
// Option Enums
// ============================================================================

/// When to show the battery meter (`BatteryStatus`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BatteryDisplay {
    #[serde(rename = "yes")]
    Always,
    #[serde(rename = "no")]
    Never,
    #[default]
    #[serde(rename = "low")]
    WhenLow,
}

impl BatteryDisplay {
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Always => "yes",
            Self::Never => "no",
            Self::WhenLow => "low",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(Self::Always),
            "no" => Some(Self::Never),
            "low" => Some(Self::WhenLow),
            _ => None,
        }
    }
}

/// When to show the Bluetooth icon (`BluetoothStatus`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BluetoothDisplay {
    #[serde(rename = "yes")]
    Always,
    #[serde(rename = "no")]
    Never,
    #[default]
    #[serde(rename = "disconnected")]
    WhenDisconnected,
}

impl BluetoothDisplay {
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Always => "yes",
            Self::Never => "no",
            Self::WhenDisconnected => "disconnected",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(Self::Always),
            "no" => Some(Self::Never),
            "disconnected" => Some(Self::WhenDisconnected),
            _ => None,
        }
    }
}

/// Vibrate on a connection change (`BluetoothDisconnect`, `BluetoothConnect`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VibrationToggle {
    #[default]
    Yes,
    No,
}

impl VibrationToggle {
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::Yes)
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Decoded Arc Diem settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcDiemSettings {
    /// Hour the day starts (0..=23)
    pub day_start: u8,
    /// Hour the day ends (0..=23); may be "earlier" than `day_start`
    pub day_end: u8,
    pub battery_status: BatteryDisplay,
    pub bluetooth_status: BluetoothDisplay,
    pub vibrate_on_disconnect: VibrationToggle,
    pub vibrate_on_connect: VibrationToggle,
}

impl Default for ArcDiemSettings {
    fn default() -> Self {
        Self {
            day_start: 7,
            day_end: 23,
            battery_status: BatteryDisplay::WhenLow,
            bluetooth_status: BluetoothDisplay::WhenDisconnected,
            vibrate_on_disconnect: VibrationToggle::Yes,
            vibrate_on_connect: VibrationToggle::Yes,
        }
    }
}

impl ArcDiemSettings {
    /// Decodes a selection, keeping defaults for absent keys.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if a present value has the wrong type, is
    /// not a valid hour, or is not a declared option.
    pub fn from_selection(selection: &Selection) -> Result<Self, SettingsError> {
        let defaults = Self::default();
        Ok(Self {
            day_start: hour(selection, DAY_START)?.unwrap_or(defaults.day_start),
            day_end: hour(selection, DAY_END)?.unwrap_or(defaults.day_end),
            battery_status: option(
                selection,
                BATTERY_STATUS,
                BatteryDisplay::from_value,
                &["yes", "no", "low"],
            )?
            .unwrap_or(defaults.battery_status),
            bluetooth_status: option(
                selection,
                BLUETOOTH_STATUS,
                BluetoothDisplay::from_value,
                &["yes", "no", "disconnected"],
            )?
            .unwrap_or(defaults.bluetooth_status),
            vibrate_on_disconnect: option(
                selection,
                BLUETOOTH_DISCONNECT,
                VibrationToggle::from_value,
                &["yes", "no"],
            )?
            .unwrap_or(defaults.vibrate_on_disconnect),
            vibrate_on_connect: option(
                selection,
                BLUETOOTH_CONNECT,
                VibrationToggle::from_value,
                &["yes", "no"],
            )?
            .unwrap_or(defaults.vibrate_on_connect),
        })
    }

    /// Encodes the settings back into a selection keyed by message key.
    #[must_use]
    pub fn to_selection(&self) -> Selection {
        let mut selection = Selection::default();
        selection.insert(DAY_START, SettingValue::Int(i64::from(self.day_start)));
        selection.insert(DAY_END, SettingValue::Int(i64::from(self.day_end)));
        selection.insert(BATTERY_STATUS, self.battery_status.value().into());
        selection.insert(BLUETOOTH_STATUS, self.bluetooth_status.value().into());
        selection.insert(BLUETOOTH_DISCONNECT, self.vibrate_on_disconnect.value().into());
        selection.insert(BLUETOOTH_CONNECT, self.vibrate_on_connect.value().into());
        selection
    }

    #[must_use]
    pub const fn day_cycle(&self) -> DayCycle {
        DayCycle {
            start_hour: self.day_start,
            end_hour: self.day_end,
        }
    }

    /// What the battery meter shows for the given charge state.
    #[must_use]
    pub const fn battery_indicator(&self, level_percent: u8, charging: bool) -> BatteryIndicator {
        let visible = match self.battery_status {
            BatteryDisplay::Always => true,
            BatteryDisplay::Never => false,
            BatteryDisplay::WhenLow => level_percent < LOW_BATTERY_PERCENT || charging,
        };
        if !visible {
            BatteryIndicator::Hidden
        } else if charging {
            BatteryIndicator::Charging
        } else {
            BatteryIndicator::Level
        }
    }

    /// Which Bluetooth icon is shown for the given connection state.
    #[must_use]
    pub const fn bluetooth_icon(&self, connected: bool) -> BluetoothIcon {
        match (connected, self.bluetooth_status) {
            (true, BluetoothDisplay::Always) => BluetoothIcon::Connected,
            (true, _) | (false, BluetoothDisplay::Never) => BluetoothIcon::Hidden,
            (false, BluetoothDisplay::Always) => BluetoothIcon::Off,
            (false, BluetoothDisplay::WhenDisconnected) => BluetoothIcon::Disconnected,
        }
    }

    /// Vibration played when the phone connection changes to `connected`.
    #[must_use]
    pub const fn connection_vibration(&self, connected: bool) -> Option<&'static VibePattern> {
        if connected && self.vibrate_on_connect.is_on() {
            Some(&VibePattern::SIGNAL_FOUND)
        } else if !connected && self.vibrate_on_disconnect.is_on() {
            Some(&VibePattern::SIGNAL_LOST)
        } else {
            None
        }
    }
}

fn hour(selection: &Selection, key: &str) -> Result<Option<u8>, SettingsError> {
    let Some(value) = selection.get(key) else {
        return Ok(None);
    };
    let SettingValue::Int(number) = value else {
        return Err(SettingsError::TypeMismatch {
            key: key.to_string(),
            expected: "an hour of day",
            value: value.to_string(),
        });
    };
    if !(HOUR_MIN..=HOUR_MAX).contains(number) {
        return Err(SettingsError::OutOfRange {
            key: key.to_string(),
            value: *number,
            min: HOUR_MIN,
            max: HOUR_MAX,
        });
    }
    // bounded to 0..=23 above
    Ok(u8::try_from(*number).ok())
}

fn option<T>(
    selection: &Selection,
    key: &str,
    decode: fn(&str) -> Option<T>,
    allowed: &[&str],
) -> Result<Option<T>, SettingsError> {
    let Some(value) = selection.get(key) else {
        return Ok(None);
    };
    let text = value.to_string();
    decode(&text)
        .map(Some)
        .ok_or_else(|| SettingsError::InvalidOption {
            key: key.to_string(),
            value: text,
            allowed: allowed.iter().map(ToString::to_string).collect(),
        })
}

// ============================================================================
// Day Cycle
// ============================================================================

/// Half of the day the face is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Day,
    Night,
}

/// Daytime window between two hours of day.
///
/// Times are minutes since midnight. The face is in daytime when the next
/// day end comes strictly before the next day start; an hour mark equal to
/// the current minute is "next" at distance zero. Daytime therefore covers
/// the minutes after `start_hour:00` up to and including `end_hour:00`,
/// wrapping past midnight when the end is earlier than the start. Equal
/// start and end hours mean permanent night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCycle {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl DayCycle {
    #[must_use]
    pub const fn new(start_hour: u8, end_hour: u8) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Phase at `minute_of_day` (taken modulo one day).
    #[must_use]
    pub const fn phase_at(&self, minute_of_day: u16) -> Phase {
        if self.minutes_until(self.end_hour, minute_of_day)
            < self.minutes_until(self.start_hour, minute_of_day)
        {
            Phase::Day
        } else {
            Phase::Night
        }
    }

    /// Total length of a phase in minutes.
    #[must_use]
    pub const fn span_minutes(&self, phase: Phase) -> u16 {
        let (from, to) = match phase {
            Phase::Day => (self.start_hour, self.end_hour),
            Phase::Night => (self.end_hour, self.start_hour),
        };
        let hours = ((to as u16 % 24) + 24 - (from as u16 % 24)) % 24;
        hours * MINUTES_PER_HOUR
    }

    /// Current phase and the minutes left in it.
    #[must_use]
    pub const fn remaining_minutes(&self, minute_of_day: u16) -> (Phase, u16) {
        match self.phase_at(minute_of_day) {
            Phase::Day => (Phase::Day, self.minutes_until(self.end_hour, minute_of_day)),
            Phase::Night => (
                Phase::Night,
                self.minutes_until(self.start_hour, minute_of_day),
            ),
        }
    }

    const fn minutes_until(&self, hour: u8, minute_of_day: u16) -> u16 {
        let target = (hour as u16 % 24) * MINUTES_PER_HOUR;
        let now = minute_of_day % MINUTES_PER_DAY;
        (target + MINUTES_PER_DAY - now) % MINUTES_PER_DAY
    }
}

// ============================================================================
// Indicators
// ============================================================================

/// Battery meter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryIndicator {
    Hidden,
    /// Meter with the plain battery icon
    Level,
    /// Meter with the charging icon
    Charging,
}

/// Bluetooth icon state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BluetoothIcon {
    Hidden,
    /// Phone connected
    Connected,
    /// Phone disconnected, shown because status is "yes"
    Off,
    /// Phone disconnected, shown because status is "disconnected"
    Disconnected,
}

/// Vibration pattern: alternating on/off segment durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VibePattern {
    pub name: &'static str,
    pub durations_ms: &'static [u32],
}

impl VibePattern {
    /// Played when the phone connection drops.
    pub const SIGNAL_LOST: Self = Self {
        name: "signal_lost",
        durations_ms: &[200, 300, 500],
    };

    /// Played when the phone connection returns.
    pub const SIGNAL_FOUND: Self = Self {
        name: "signal_found",
        durations_ms: &[100, 200, 100],
    };
}

// ============================================================================
// Tests
// ============================================================================
