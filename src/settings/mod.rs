//! Selected settings
//!
//! A [`Selection`] is the key -> value mapping the settings host hands back
//! to the watch face. It starts from the form defaults; submitted values are
//! checked against their field before they replace a default.

pub mod watchface;

pub use watchface::{
    ArcDiemSettings, BatteryDisplay, BatteryIndicator, BluetoothDisplay, BluetoothIcon, DayCycle,
    Phase, VibePattern, VibrationToggle,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::schema::{Field, Form};
use crate::error::SettingsError;

/// Maximum edit distance for "did you mean" key suggestions.
const SUGGESTION_DISTANCE: usize = 3;

// ============================================================================
// Values
// ============================================================================

/// A single selected value: a slider position or a radio option value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Int(i64),
    Text(String),
}

impl SettingValue {
    /// Value a field holds before the user changes it.
    #[must_use]
    pub fn default_for(field: Field<'_>) -> Self {
        match field {
            Field::Slider(s) => Self::Int(s.default_value),
            Field::RadioGroup(g) => Self::Text(g.default_value.clone()),
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

// ============================================================================
// Selection
// ============================================================================

/// Ordered mapping from message key to selected value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    values: IndexMap<String, SettingValue>,
}

impl Selection {
    /// The selection a user gets without touching any input.
    #[must_use]
    pub fn defaults(form: &Form) -> Self {
        let values = form
            .fields()
            .into_iter()
            .map(|field| {
                (
                    field.message_key().to_string(),
                    SettingValue::default_for(field),
                )
            })
            .collect();
        Self { values }
    }

    /// Applies submitted values on top of this selection.
    ///
    /// Every update is checked against its field; a single rejected update
    /// leaves `self` untouched and returns the error. Each slider is checked
    /// on its own, so a day end "earlier" than the day start is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] for an unknown key, a value of the wrong
    /// shape, a slider value out of bounds, or an undeclared radio option.
    pub fn apply<I, K>(&self, form: &Form, updates: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = (K, SettingValue)>,
        K: AsRef<str>,
    {
        let mut next = self.clone();

        for (key, value) in updates {
            let key = key.as_ref();
            let field = form.field(key).ok_or_else(|| SettingsError::UnknownKey {
                key: key.to_string(),
                suggestion: suggest_key(form, key),
            })?;
            let value = coerce(field, &value)?;
            tracing::debug!(key, %value, "setting applied");
            next.values.insert(key.to_string(), value);
        }

        // keep declaration order regardless of update order
        let keys = form.message_keys();
        next.values.sort_by_cached_key(|k, _| {
            keys.iter()
                .position(|known| *known == k.as_str())
                .unwrap_or(usize::MAX)
        });

        Ok(next)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    /// Integer value under `key`, if present and numeric.
    #[must_use]
    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(SettingValue::as_int)
    }

    /// Text value under `key`, if present and textual.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(SettingValue::as_text)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn insert(&mut self, key: &str, value: SettingValue) {
        self.values.insert(key.to_string(), value);
    }
}

impl<K: Into<String>> FromIterator<(K, SettingValue)> for Selection {
    fn from_iter<T: IntoIterator<Item = (K, SettingValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ============================================================================
// Field Checks
// ============================================================================

/// Checks `value` against `field` and normalizes it to the field's type.
///
/// Sliders accept integers or integer text; radio groups accept any value
/// whose text matches a declared option.
///
/// # Errors
///
/// Returns [`SettingsError`] describing why the value is not legal.
pub fn coerce(field: Field<'_>, value: &SettingValue) -> Result<SettingValue, SettingsError> {
    match field {
        Field::Slider(slider) => {
            let number = match value {
                SettingValue::Int(v) => *v,
                SettingValue::Text(s) => {
                    s.trim()
                        .parse::<i64>()
                        .map_err(|_| SettingsError::TypeMismatch {
                            key: slider.message_key.clone(),
                            expected: "an integer",
                            value: s.clone(),
                        })?
                }
            };
            if !slider.contains(number) {
                let (min, max) = slider.bounds();
                return Err(SettingsError::OutOfRange {
                    key: slider.message_key.clone(),
                    value: number,
                    min,
                    max,
                });
            }
            Ok(SettingValue::Int(number))
        }
        Field::RadioGroup(group) => {
            let text = value.to_string();
            if group.option(&text).is_none() {
                return Err(SettingsError::InvalidOption {
                    key: group.message_key.clone(),
                    value: text,
                    allowed: group.values().into_iter().map(String::from).collect(),
                });
            }
            Ok(SettingValue::Text(text))
        }
    }
}

/// Splits a `KEY=VALUE` assignment.
///
/// The value is kept as text exactly as typed (trimmed); [`coerce`] turns
/// it into an integer when the target field is a slider.
///
/// # Errors
///
/// Returns [`SettingsError::MalformedAssignment`] when there is no `=` or
/// the key is empty.
pub fn parse_assignment(input: &str) -> Result<(String, SettingValue), SettingsError> {
    let malformed = || SettingsError::MalformedAssignment {
        input: input.to_string(),
    };

    let (key, value) = input.split_once('=').ok_or_else(malformed)?;
    let key = key.trim();
    if key.is_empty() {
        return Err(malformed());
    }

    Ok((key.to_string(), SettingValue::from(value.trim())))
}

/// Closest message key to `input`, for typo correction.
fn suggest_key(form: &Form, input: &str) -> Option<String> {
    form.message_keys()
        .into_iter()
        .map(|k| (k, strsim::damerau_levenshtein(input, k)))
        .filter(|(_, dist)| *dist <= SUGGESTION_DISTANCE)
        .min_by_key(|(_, dist)| *dist)
        .map(|(k, _)| k.to_string())
}

// ============================================================================
// Tests
// ============================================================================
