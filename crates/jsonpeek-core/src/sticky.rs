//! Single-slot cache holding the last successfully formatted document.

use crate::format::{FormatError, FormattedDocument};

/// What the panel should display after a render decision.
///
/// Empty content renders as an empty code block, never an error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayContent {
    Empty,
    Document(String),
}

impl DisplayContent {
    pub fn text(&self) -> &str {
        match self {
            DisplayContent::Empty => "",
            DisplayContent::Document(text) => text,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DisplayContent::Empty)
    }
}

/// Session-lifetime memory for the most recent good render.
///
/// A fresh success always overwrites the slot, sticky or not. A failure
/// leaves the slot intact when sticky is enabled and clears it otherwise.
#[derive(Debug, Default)]
pub struct StickySlot {
    last_good: Option<String>,
}

impl StickySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide what to display for one render cycle and update the slot.
    pub fn resolve(
        &mut self,
        outcome: Result<FormattedDocument, FormatError>,
        sticky_enabled: bool,
    ) -> DisplayContent {
        match outcome {
            Ok(doc) => {
                let text = doc.into_text();
                self.last_good = Some(text.clone());
                DisplayContent::Document(text)
            }
            Err(_) if sticky_enabled => match &self.last_good {
                Some(text) => DisplayContent::Document(text.clone()),
                None => DisplayContent::Empty,
            },
            Err(_) => {
                self.last_good = None;
                DisplayContent::Empty
            }
        }
    }

    pub fn last_good(&self) -> Option<&str> {
        self.last_good.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_selection;

    #[test]
    fn success_overwrites_slot_even_when_not_sticky() {
        let mut slot = StickySlot::new();
        let shown = slot.resolve(format_selection(r#"{"a":1}"#), false);
        assert_eq!(shown.text(), "{\n  \"a\": 1\n}");
        assert_eq!(slot.last_good(), Some("{\n  \"a\": 1\n}"));
    }

    #[test]
    fn sticky_failure_keeps_showing_last_good() {
        let mut slot = StickySlot::new();
        slot.resolve(format_selection(r#"{"a":1}"#), true);
        let shown = slot.resolve(format_selection("not json"), true);
        assert_eq!(shown.text(), "{\n  \"a\": 1\n}");
        assert!(slot.last_good().is_some());
    }

    #[test]
    fn sticky_failure_with_no_prior_success_is_empty() {
        let mut slot = StickySlot::new();
        let shown = slot.resolve(format_selection("not json"), true);
        assert!(shown.is_empty());
    }

    #[test]
    fn non_sticky_failure_clears_slot_and_blanks() {
        let mut slot = StickySlot::new();
        slot.resolve(format_selection(r#"{"a":1}"#), true);
        let shown = slot.resolve(format_selection("not json"), false);
        assert!(shown.is_empty());
        assert_eq!(slot.last_good(), None);
    }

    #[test]
    fn empty_selection_follows_the_same_policy_as_invalid_json() {
        let mut slot = StickySlot::new();
        slot.resolve(format_selection(r#"[1]"#), true);
        let shown = slot.resolve(format_selection("   "), true);
        assert_eq!(shown.text(), "[\n  1\n]");
    }
}
