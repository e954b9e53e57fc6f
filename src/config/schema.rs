//! Form schema types
//!
//! Typed descriptors for a Clay settings form. A [`Form`] is an ordered list
//! of [`Descriptor`]s; the serde representation is the JSON array Clay
//! renders into a settings page (internally tagged by `type`, camelCase
//! field names).

use serde::{Deserialize, Serialize};

// ============================================================================
// Form
// ============================================================================

/// An ordered settings form.
///
/// Entry order is render order. The form is built once and only read
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Form {
    items: Vec<Descriptor>,
}

impl Form {
    /// Creates a form from its top-level descriptors.
    #[must_use]
    pub const fn new(items: Vec<Descriptor>) -> Self {
        Self { items }
    }

    /// Top-level descriptors in render order.
    #[must_use]
    pub fn items(&self) -> &[Descriptor] {
        &self.items
    }

    /// Number of top-level descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the form has no descriptors at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every input field, depth-first in declaration order.
    #[must_use]
    pub fn fields(&self) -> Vec<Field<'_>> {
        let mut out = Vec::new();
        collect_fields(&self.items, &mut out);
        out
    }

    /// Message keys of every input field, in declaration order.
    #[must_use]
    pub fn message_keys(&self) -> Vec<&str> {
        self.fields().into_iter().map(|f| f.message_key()).collect()
    }

    /// Looks up an input field by its message key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<Field<'_>> {
        self.fields().into_iter().find(|f| f.message_key() == key)
    }

    /// Label of the first top-level submit button.
    #[must_use]
    pub fn submit_label(&self) -> Option<&str> {
        self.items.iter().find_map(|item| match item {
            Descriptor::Submit(submit) => Some(submit.default_value.as_str()),
            _ => None,
        })
    }
}

fn collect_fields<'a>(items: &'a [Descriptor], out: &mut Vec<Field<'a>>) {
    for item in items {
        match item {
            Descriptor::Section(section) => collect_fields(&section.items, out),
            Descriptor::Slider(slider) => out.push(Field::Slider(slider)),
            Descriptor::RadioGroup(group) => out.push(Field::RadioGroup(group)),
            Descriptor::Heading(_) | Descriptor::Submit(_) => {}
        }
    }
}

// ============================================================================
// Descriptors
// ============================================================================

/// A single form entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Descriptor {
    /// Display-only text
    Heading(Heading),
    /// Group of nested descriptors
    Section(Section),
    /// Bounded integer input
    Slider(Slider),
    /// Single choice over a closed option set
    RadioGroup(RadioGroup),
    /// Save button
    Submit(Submit),
}

impl Descriptor {
    /// Heading with the given text.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading(Heading {
            default_value: text.into(),
        })
    }

    /// Section wrapping the given descriptors.
    #[must_use]
    pub const fn section(items: Vec<Self>) -> Self {
        Self::Section(Section { items })
    }

    /// Submit button with the given label.
    pub fn submit(label: impl Into<String>) -> Self {
        Self::Submit(Submit {
            default_value: label.into(),
        })
    }

    /// The descriptor's tag.
    #[must_use]
    pub const fn kind(&self) -> DescriptorKind {
        match self {
            Self::Heading(_) => DescriptorKind::Heading,
            Self::Section(_) => DescriptorKind::Section,
            Self::Slider(_) => DescriptorKind::Slider,
            Self::RadioGroup(_) => DescriptorKind::RadioGroup,
            Self::Submit(_) => DescriptorKind::Submit,
        }
    }
}

impl From<Slider> for Descriptor {
    fn from(slider: Slider) -> Self {
        Self::Slider(slider)
    }
}

impl From<RadioGroup> for Descriptor {
    fn from(group: RadioGroup) -> Self {
        Self::RadioGroup(group)
    }
}

/// Closed set of descriptor tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    Heading,
    Section,
    Slider,
    RadioGroup,
    Submit,
}

impl DescriptorKind {
    /// Tag as it appears in the `type` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Section => "section",
            Self::Slider => "slider",
            Self::RadioGroup => "radiogroup",
            Self::Submit => "submit",
        }
    }
}

impl std::fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heading text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    /// Text shown on the page
    pub default_value: String,
}

/// Group of nested descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Nested headings and input fields
    pub items: Vec<Descriptor>,
}

/// Submit button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submit {
    /// Button label
    pub default_value: String,
}

// ============================================================================
// Slider
// ============================================================================

/// Bounded integer input.
///
/// `min` and `max` are kept exactly as declared; a reversed pair is legal
/// and bounds the same closed interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slider {
    /// Key the selected value is delivered under
    pub message_key: String,

    /// Initial value
    pub default_value: i64,

    /// Field label
    pub label: String,

    /// Declared lower bound
    pub min: i64,

    /// Declared upper bound
    pub max: i64,

    /// Increment between selectable values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<i64>,

    /// Help text shown under the slider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Slider {
    pub fn new(
        message_key: impl Into<String>,
        label: impl Into<String>,
        default_value: i64,
        min: i64,
        max: i64,
    ) -> Self {
        Self {
            message_key: message_key.into(),
            default_value,
            label: label.into(),
            min,
            max,
            step: None,
            description: None,
        }
    }

    /// Adds help text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The interval bounded by `min` and `max`, low end first.
    #[must_use]
    pub fn bounds(&self) -> (i64, i64) {
        (self.min.min(self.max), self.min.max(self.max))
    }

    /// Returns `true` if `value` lies in the closed interval bounded by
    /// `min` and `max`, whichever order they were declared in.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        let (lo, hi) = self.bounds();
        (lo..=hi).contains(&value)
    }
}

// ============================================================================
// Radio Group
// ============================================================================

/// Single choice over a closed set of labeled options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioGroup {
    /// Key the selected value is delivered under
    pub message_key: String,

    /// Field label
    pub label: String,

    /// Value selected initially; must match one option
    pub default_value: String,

    /// Help text shown under the group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Options in display order
    pub options: Vec<RadioOption>,
}

impl RadioGroup {
    pub fn new<L, V>(
        message_key: impl Into<String>,
        label: impl Into<String>,
        default_value: impl Into<String>,
        options: impl IntoIterator<Item = (L, V)>,
    ) -> Self
    where
        L: Into<String>,
        V: Into<String>,
    {
        Self {
            message_key: message_key.into(),
            label: label.into(),
            default_value: default_value.into(),
            description: None,
            options: options
                .into_iter()
                .map(|(label, value)| RadioOption {
                    label: label.into(),
                    value: value.into(),
                })
                .collect(),
        }
    }

    /// Finds the option carrying `value`.
    #[must_use]
    pub fn option(&self, value: &str) -> Option<&RadioOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Option values in display order.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }
}

/// A (label, value) pair in a radio group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioOption {
    /// Text shown next to the radio button
    pub label: String,
    /// Value delivered when selected
    pub value: String,
}

// ============================================================================
// Field View
// ============================================================================

/// Borrowed view of an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    Slider(&'a Slider),
    RadioGroup(&'a RadioGroup),
}

impl<'a> Field<'a> {
    #[must_use]
    pub fn message_key(self) -> &'a str {
        match self {
            Self::Slider(s) => &s.message_key,
            Self::RadioGroup(g) => &g.message_key,
        }
    }

    #[must_use]
    pub fn label(self) -> &'a str {
        match self {
            Self::Slider(s) => &s.label,
            Self::RadioGroup(g) => &g.label,
        }
    }

    #[must_use]
    pub const fn kind(self) -> DescriptorKind {
        match self {
            Self::Slider(_) => DescriptorKind::Slider,
            Self::RadioGroup(_) => DescriptorKind::RadioGroup,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> Form {
        Form::new(vec![
            Descriptor::heading("Title"),
            Descriptor::section(vec![
                Descriptor::heading("Hours"),
                Slider::new("Start", "Start at:", 7, 0, 23).into(),
            ]),
            Descriptor::section(vec![
                RadioGroup::new("Mode", "Mode?", "b", [("A", "a"), ("B", "b")]).into(),
            ]),
            Descriptor::submit("Save"),
        ])
    }

    #[test]
    fn test_descriptor_tags_serialize_lowercase() {
        let json = serde_json::to_value(sample_form()).unwrap();
        let tags: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["type"].as_str().unwrap())
            .collect();
        assert_eq!(tags, ["heading", "section", "section", "submit"]);
        assert_eq!(json[2]["items"][0]["type"], "radiogroup");
    }

    #[test]
    fn test_slider_uses_clay_field_names() {
        let slider = Slider::new("DayEnd", "Day ends at:", 23, 0, 23).with_description("help");
        let json = serde_json::to_value(Descriptor::from(slider)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "slider",
                "messageKey": "DayEnd",
                "defaultValue": 23,
                "label": "Day ends at:",
                "min": 0,
                "max": 23,
                "description": "help"
            })
        );
    }

    #[test]
    fn test_optional_fields_omitted() {
        let json = serde_json::to_value(Descriptor::from(Slider::new("K", "L", 1, 0, 2))).unwrap();
        assert!(json.get("step").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_deserialize_clay_radiogroup() {
        let raw = r#"{
            "type": "radiogroup",
            "messageKey": "BluetoothConnect",
            "label": "Vibrate?",
            "defaultValue": "yes",
            "options": [{"label": "Yes", "value": "yes"}, {"label": "No", "value": "no"}]
        }"#;
        let descriptor: Descriptor = serde_json::from_str(raw).unwrap();
        let Descriptor::RadioGroup(group) = descriptor else {
            panic!("expected radiogroup, got {descriptor:?}");
        };
        assert_eq!(group.values(), ["yes", "no"]);
        assert_eq!(group.option("no").unwrap().label, "No");
        assert!(group.option("maybe").is_none());
    }

    #[test]
    fn test_unknown_type_rejected() {
        let raw = r#"{"type": "toggle", "messageKey": "X"}"#;
        assert!(serde_json::from_str::<Descriptor>(raw).is_err());
    }

    #[test]
    fn test_fields_are_depth_first_in_order() {
        let form = sample_form();
        assert_eq!(form.message_keys(), ["Start", "Mode"]);
        assert_eq!(form.field("Mode").unwrap().kind(), DescriptorKind::RadioGroup);
        assert_eq!(form.field("Start").unwrap().label(), "Start at:");
        assert!(form.field("Missing").is_none());
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(sample_form().submit_label(), Some("Save"));
        assert_eq!(Form::default().submit_label(), None);
    }

    #[test]
    fn test_slider_contains_reversed_bounds() {
        let reversed = Slider::new("K", "L", 3, 23, 0);
        assert_eq!(reversed.bounds(), (0, 23));
        assert!(reversed.contains(0));
        assert!(reversed.contains(23));
        assert!(!reversed.contains(24));
        assert!(!reversed.contains(-1));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(DescriptorKind::RadioGroup.to_string(), "radiogroup");
        assert_eq!(Descriptor::submit("x").kind(), DescriptorKind::Submit);
    }
}
