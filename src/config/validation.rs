//! Form validation
//!
//! Checks the authoring invariants of a [`Form`]: legal defaults, unique
//! message keys, non-empty option sets, and a well-formed section layout.
//!
//! Validation collects ALL issues (doesn't stop at first) so a form author
//! sees every problem in one pass.

use crate::config::schema::{Descriptor, Form, RadioGroup, Slider};
use crate::error::{Severity, ValidationIssue};

use std::collections::{HashMap, HashSet};

// ============================================================================
// Public API
// ============================================================================

/// Result of form validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (form unusable).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if validation passed, treating warnings as errors
    /// when `strict` is set.
    #[must_use]
    pub fn passes(&self, strict: bool) -> bool {
        self.is_valid() && (!strict || self.warnings.is_empty())
    }
}

/// Form validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
    // message key -> path of first declaration
    seen_keys: HashMap<String, String>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a form and returns every issue found.
    pub fn validate(&mut self, form: &Form) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();
        self.seen_keys.clear();

        if form.is_empty() {
            self.add_error("", "Form has no items");
        }

        self.validate_submit_buttons(form);

        for (idx, item) in form.items().iter().enumerate() {
            self.validate_descriptor(item, &format!("items[{idx}]"), false);
        }

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Layout
    // ========================================================================

    fn validate_submit_buttons(&mut self, form: &Form) {
        let submits = form
            .items()
            .iter()
            .filter(|d| matches!(d, Descriptor::Submit(_)))
            .count();

        match submits {
            0 => self.add_warning("", "Form has no submit button; settings cannot be saved"),
            1 => {}
            n => self.add_warning("", &format!("Form has {n} submit buttons")),
        }
    }

    fn validate_descriptor(&mut self, descriptor: &Descriptor, path: &str, nested: bool) {
        match descriptor {
            Descriptor::Heading(heading) => {
                if heading.default_value.trim().is_empty() {
                    self.add_warning(path, "Heading text is empty");
                }
            }
            Descriptor::Section(section) => {
                if nested {
                    self.add_error(path, "Sections cannot be nested inside a section");
                }
                if section.items.is_empty() {
                    self.add_warning(path, "Section has no items");
                }
                for (idx, item) in section.items.iter().enumerate() {
                    self.validate_descriptor(item, &format!("{path}.items[{idx}]"), true);
                }
            }
            Descriptor::Slider(slider) => self.validate_slider(slider, path),
            Descriptor::RadioGroup(group) => self.validate_radio_group(group, path),
            Descriptor::Submit(submit) => {
                if nested {
                    self.add_error(path, "Submit button must be a top-level item");
                }
                if submit.default_value.trim().is_empty() {
                    self.add_warning(path, "Submit button label is empty");
                }
            }
        }
    }

    // ========================================================================
    // Fields
    // ========================================================================

    fn validate_message_key(&mut self, key: &str, label: &str, path: &str) {
        if key.trim().is_empty() {
            self.add_error(path, "Message key is required and cannot be empty");
        } else if let Some(first) = self.seen_keys.get(key) {
            let message = format!("Duplicate message key '{key}' (first declared at {first})");
            self.add_error(path, &message);
        } else {
            self.seen_keys.insert(key.to_string(), path.to_string());
        }

        if label.trim().is_empty() {
            self.add_warning(path, "Field label is empty");
        }
    }

    fn validate_slider(&mut self, slider: &Slider, path: &str) {
        self.validate_message_key(&slider.message_key, &slider.label, path);

        // min > max is legal: the interval is bounded by the pair either way
        if !slider.contains(slider.default_value) {
            let (lo, hi) = slider.bounds();
            let message = format!(
                "Slider default {} is outside {lo}..={hi}",
                slider.default_value
            );
            self.add_error(path, &message);
        }

        if let Some(step) = slider.step {
            if step <= 0 {
                self.add_error(path, &format!("Slider step must be positive, got {step}"));
            }
        }
    }

    fn validate_radio_group(&mut self, group: &RadioGroup, path: &str) {
        self.validate_message_key(&group.message_key, &group.label, path);

        if group.options.is_empty() {
            self.add_error(path, "Radiogroup has no options");
            return;
        }

        let mut values = HashSet::new();
        let mut labels = HashSet::new();
        for (idx, option) in group.options.iter().enumerate() {
            let option_path = format!("{path}.options[{idx}]");
            if !values.insert(option.value.as_str()) {
                let message = format!("Duplicate option value '{}'", option.value);
                self.add_error(&option_path, &message);
            }
            if !labels.insert(option.label.as_str()) {
                let message = format!("Duplicate option label '{}'", option.label);
                self.add_warning(&option_path, &message);
            }
        }

        if group.option(&group.default_value).is_none() {
            let message = format!(
                "Default value '{}' does not match any option (expected one of: {})",
                group.default_value,
                group.values().join(", ")
            );
            self.add_error(path, &message);
        }
    }

    // ========================================================================
    // Issue Collection
    // ========================================================================

    /// Adds an error to the collection.
    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    /// Adds a warning to the collection.
    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
