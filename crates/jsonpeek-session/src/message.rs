//! Wire messages from the rendered panel back to the session.

use serde::{Deserialize, Serialize};

/// Control event originating from user interaction inside the panel,
/// delivered across the display channel as tagged JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PanelMessage {
    ThemeChanged { theme: String },
    WrapChanged { wrap: bool },
    StickyChanged { sticky: bool },
    Log { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_format_is_kind_tagged_camel_case() {
        let msg = PanelMessage::ThemeChanged {
            theme: "monokai".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&msg).expect("serialize"),
            json!({"kind": "themeChanged", "theme": "monokai"})
        );
    }

    #[test]
    fn every_message_kind_round_trips() {
        for raw in [
            r#"{"kind":"themeChanged","theme":"arta"}"#,
            r#"{"kind":"wrapChanged","wrap":true}"#,
            r#"{"kind":"stickyChanged","sticky":false}"#,
            r#"{"kind":"log","text":"hello from the panel"}"#,
        ] {
            let msg: PanelMessage = serde_json::from_str(raw).expect("deserialize");
            let back = serde_json::to_string(&msg).expect("serialize");
            assert_eq!(
                serde_json::from_str::<serde_json::Value>(raw).expect("raw value"),
                serde_json::from_str::<serde_json::Value>(&back).expect("round-trip value"),
            );
        }
    }

    #[test]
    fn unknown_kinds_are_rejected() {
        assert!(serde_json::from_str::<PanelMessage>(r#"{"kind":"resize","w":10}"#).is_err());
    }
}
