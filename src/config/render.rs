//! Form documents
//!
//! Renders a [`Form`] into the documents a settings host consumes and parses
//! them back. Three formats are supported:
//! - `json`: the descriptor array Clay renders
//! - `yaml`: the same structure as YAML, for hand-authored forms
//! - `clay`: a `config.js` CommonJS module exporting the JSON array

use std::path::Path;

use crate::config::schema::Form;
use crate::error::ArcDiemError;

const CLAY_PREFIX: &str = "module.exports =";

/// Form document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FormFormat {
    /// JSON descriptor array.
    #[default]
    Json,
    /// YAML descriptor sequence.
    Yaml,
    /// Clay `config.js` module.
    Clay,
}

impl FormFormat {
    /// Infers the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "js" => Some(Self::Clay),
            _ => None,
        }
    }
}

/// Renders a form into a document of the given format.
///
/// # Errors
///
/// Returns a JSON or YAML serialization error.
pub fn render(form: &Form, format: FormFormat) -> Result<String, ArcDiemError> {
    let text = match format {
        FormFormat::Json => serde_json::to_string_pretty(form)?,
        FormFormat::Yaml => serde_yaml::to_string(form)?,
        FormFormat::Clay => {
            let json = serde_json::to_string_pretty(form)?;
            format!("{CLAY_PREFIX} {json};\n")
        }
    };
    tracing::debug!(?format, bytes = text.len(), "rendered form");
    Ok(text)
}

/// Parses a form document of the given format.
///
/// # Errors
///
/// Returns a JSON or YAML error if the document does not describe a form.
pub fn parse(text: &str, format: FormFormat) -> Result<Form, ArcDiemError> {
    let form = match format {
        FormFormat::Json => serde_json::from_str(text)?,
        FormFormat::Yaml => serde_yaml::from_str(text)?,
        FormFormat::Clay => serde_json::from_str(&clay_module_body(text))?,
    };
    Ok(form)
}

/// Extracts the exported JSON array from a `config.js` module.
///
/// Comments are removed first; Clay configs routinely comment out options.
/// String literals are respected so a `/*` or `//` inside a label stays.
/// Everything that is not JSON is blanked rather than removed, so line
/// numbers in parse errors still point into the original module.
#[must_use]
pub fn clay_module_body(text: &str) -> String {
    let mut body = blank_comments(text);

    if let Some(start) = body.find(|c: char| !c.is_whitespace()) {
        if body[start..].starts_with(CLAY_PREFIX) {
            body.replace_range(start..start + CLAY_PREFIX.len(), &" ".repeat(CLAY_PREFIX.len()));
        }
    }
    if let Some((end, ';')) = body.char_indices().rev().find(|(_, c)| !c.is_whitespace()) {
        body.replace_range(end..=end, " ");
    }

    body
}

/// Replaces `/* */` and `//` comments with spaces, keeping their newlines.
fn blank_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    let blank = |out: &mut String, c: char| out.push(if c == '\n' { '\n' } else { ' ' });

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('/', Some('*')) => {
                chars.next();
                out.push_str("  ");
                let mut prev = '\0';
                for inner in chars.by_ref() {
                    blank(&mut out, inner);
                    if prev == '*' && inner == '/' {
                        break;
                    }
                    prev = inner;
                }
            }
            ('/', Some('/')) => {
                while let Some(inner) = chars.next_if(|n| *n != '\n') {
                    blank(&mut out, inner);
                }
                out.push(' ');
            }
            _ => {
                if c == '"' {
                    in_string = true;
                }
                out.push(c);
            }
        }
    }

    out
}
