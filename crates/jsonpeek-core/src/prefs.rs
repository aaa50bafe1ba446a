//! User preferences and the durable key/value store boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

// Settings-file keys, one per preference. The wire messages from the panel
// use the same camelCase names.
pub const PREF_THEME: &str = "theme";
pub const PREF_WRAP_ENABLED: &str = "wrapEnabled";
pub const PREF_STICKY_ENABLED: &str = "stickyEnabled";

/// Durable key/value persistence for preferences.
///
/// Writes are independent per key and idempotent; there are no transactional
/// guarantees. A `set` failure is reported but never retried — the caller's
/// in-memory value stays authoritative for the rest of the session.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

/// Process-wide appearance preferences, persisted across sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_theme")]
    pub theme: String,
    pub wrap_enabled: bool,
    #[serde(default = "default_sticky_enabled")]
    pub sticky_enabled: bool,
}

fn default_theme() -> String {
    "default".to_string()
}
fn default_sticky_enabled() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            wrap_enabled: false,
            sticky_enabled: default_sticky_enabled(),
        }
    }
}

impl Preferences {
    /// Read each preference from the store, falling back to its default.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        Self {
            theme: store
                .get(PREF_THEME)
                .and_then(|v| v.as_str().map(str::to_owned))
                .unwrap_or_else(default_theme),
            wrap_enabled: store
                .get(PREF_WRAP_ENABLED)
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            sticky_enabled: store
                .get(PREF_STICKY_ENABLED)
                .and_then(|v| v.as_bool())
                .unwrap_or_else(default_sticky_enabled),
        }
    }

    pub fn persist_theme(&self, store: &mut dyn PreferenceStore) -> Result<()> {
        store.set(PREF_THEME, Value::String(self.theme.clone()))
    }

    pub fn persist_wrap(&self, store: &mut dyn PreferenceStore) -> Result<()> {
        store.set(PREF_WRAP_ENABLED, Value::Bool(self.wrap_enabled))
    }

    pub fn persist_sticky(&self, store: &mut dyn PreferenceStore) -> Result<()> {
        store.set(PREF_STICKY_ENABLED, Value::Bool(self.sticky_enabled))
    }
}
