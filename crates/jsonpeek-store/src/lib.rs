//! File-backed preference persistence.
//!
//! Preferences live in `<workspace>/.jsonpeek/settings.json` as one flat JSON
//! object, one top-level key per preference. The whole file is rewritten on
//! every `set`; unrelated keys already present in the file are preserved.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use jsonpeek_core::{PreferenceStore, Result, runtime_dir};
use serde_json::{Map, Value};

/// Durable settings file implementing [`PreferenceStore`].
///
/// A missing or unreadable file behaves as an empty store; the file and its
/// parent directory are created on first write.
pub struct SettingsFile {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl SettingsFile {
    /// Open the settings file for a workspace, reading current contents.
    pub fn open(workspace: &Path) -> Self {
        Self::open_path(runtime_dir(workspace).join("settings.json"))
    }

    /// Open a settings file at an explicit path.
    pub fn open_path(path: PathBuf) -> Self {
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default();
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create settings dir {}", parent.display()))?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(&self.entries)?)
            .with_context(|| format!("write settings file {}", self.path.display()))?;
        Ok(())
    }
}

impl PreferenceStore for SettingsFile {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonpeek_core::{PREF_THEME, Preferences};
    use serde_json::json;

    #[test]
    fn set_round_trips_through_a_fresh_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = SettingsFile::open(dir.path());
        store
            .set(PREF_THEME, json!("base16-ocean.dark"))
            .expect("set theme");

        let reopened = SettingsFile::open(dir.path());
        assert_eq!(reopened.get(PREF_THEME), Some(json!("base16-ocean.dark")));
        assert_eq!(Preferences::load(&reopened).theme, "base16-ocean.dark");
    }

    #[test]
    fn unrelated_keys_survive_writes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"somebodyElses": {"nested": true}}"#).expect("seed file");

        let mut store = SettingsFile::open_path(path.clone());
        store.set(PREF_THEME, json!("monokai")).expect("set theme");

        let reopened = SettingsFile::open_path(path);
        assert_eq!(reopened.get("somebodyElses"), Some(json!({"nested": true})));
        assert_eq!(reopened.get(PREF_THEME), Some(json!("monokai")));
    }

    #[test]
    fn missing_and_malformed_files_behave_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = SettingsFile::open(dir.path());
        assert_eq!(missing.get(PREF_THEME), None);

        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").expect("seed file");
        let malformed = SettingsFile::open_path(path);
        assert_eq!(malformed.get(PREF_THEME), None);
    }

    #[test]
    fn set_is_an_idempotent_overwrite() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = SettingsFile::open(dir.path());
        store.set(PREF_THEME, json!("monokai")).expect("first set");
        store.set(PREF_THEME, json!("monokai")).expect("second set");
        let reopened = SettingsFile::open(dir.path());
        assert_eq!(reopened.get(PREF_THEME), Some(json!("monokai")));
    }
}
