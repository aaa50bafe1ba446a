//! Text-repair strategies tried before each parse attempt.

use std::borrow::Cow;

/// Parse candidates for a trimmed selection, in priority order.
///
/// The selection itself is always the first candidate. The escaped-quote
/// repair (for JSON that was embedded as a string literal inside another
/// document or a log line) is only attempted for object-looking text;
/// top-level arrays and scalars go through the identity candidate alone.
pub fn candidates(trimmed: &str) -> Vec<Cow<'_, str>> {
    let mut out = vec![Cow::Borrowed(trimmed)];
    if trimmed.starts_with('{') && trimmed.contains("\\\"") {
        out.push(Cow::Owned(trimmed.replace("\\\"", "\"")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_always_first() {
        let cands = candidates("[1, 2]");
        assert_eq!(cands, vec![Cow::Borrowed("[1, 2]")]);
    }

    #[test]
    fn escaped_quote_repair_follows_identity() {
        let cands = candidates(r#"{\"a\":1}"#);
        assert_eq!(cands.len(), 2);
        assert_eq!(cands[0], r#"{\"a\":1}"#);
        assert_eq!(cands[1], r#"{"a":1}"#);
    }

    #[test]
    fn repair_skipped_for_non_object_text() {
        let cands = candidates(r#"[\"a\"]"#);
        assert_eq!(cands.len(), 1);
    }

    #[test]
    fn repair_skipped_when_nothing_to_repair() {
        let cands = candidates(r#"{"a": 1}"#);
        assert_eq!(cands.len(), 1);
    }
}
