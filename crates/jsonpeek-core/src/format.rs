//! Parse-and-format engine: raw selection text to canonical pretty JSON.

use serde_json::Value;
use thiserror::Error;

use crate::preprocess;

/// Why a selection produced no formatted document.
///
/// Failures are values, never panics; callers branch on the variant. Both
/// variants currently flow into the same sticky-policy handling, but an
/// empty selection is a distinct condition from malformed text.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("selection is empty")]
    EmptySelection,
    #[error("selection is not valid JSON")]
    InvalidJson,
}

/// Canonical 2-space-indented serialization of a successfully parsed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDocument {
    text: String,
}

impl FormattedDocument {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

/// Turn raw selection text into a [`FormattedDocument`], or fail.
///
/// Trims the selection, then tries each preprocessor candidate with a strict
/// JSON parse (no comments, no trailing commas; object keys keep their
/// encounter order). The first candidate that parses is re-serialized with
/// 2-space indentation. Formatting is all-or-nothing: no partial output.
pub fn format_selection(raw: &str) -> Result<FormattedDocument, FormatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormatError::EmptySelection);
    }
    for candidate in preprocess::candidates(trimmed) {
        let Ok(value) = serde_json::from_str::<Value>(&candidate) else {
            continue;
        };
        if let Ok(text) = serde_json::to_string_pretty(&value) {
            return Ok(FormattedDocument { text });
        }
    }
    Err(FormatError::InvalidJson)
}
