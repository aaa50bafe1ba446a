//! Theme listing and preference administration.

use std::path::Path;

use anyhow::{Result, bail};
use clap::Subcommand;
use jsonpeek_core::{
    PREF_STICKY_ENABLED, PREF_THEME, PREF_WRAP_ENABLED, PreferenceStore, Preferences,
};
use jsonpeek_render::{ThemeProvider, theme_display_order};
use jsonpeek_store::SettingsFile;
use serde_json::Value;

use super::theme_catalog;

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print all preferences (stored values merged over defaults).
    Show,
    /// Print one preference value.
    Get { key: String },
    /// Set one preference. `theme` takes a name; the others take true/false.
    Set { key: String, value: String },
}

pub(crate) fn run_themes(theme_dir: Option<&Path>, json: bool) -> Result<()> {
    let catalog = theme_catalog(theme_dir)?;
    let names = theme_display_order(&catalog.theme_names());
    if json {
        println!("{}", serde_json::to_string(&names)?);
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

pub(crate) fn run_config(workspace: &Path, action: ConfigAction, json: bool) -> Result<()> {
    let mut store = SettingsFile::open(workspace);
    match action {
        ConfigAction::Show => {
            let prefs = Preferences::load(&store);
            if json {
                println!("{}", serde_json::to_string(&prefs)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&prefs)?);
            }
        }
        ConfigAction::Get { key } => {
            validate_key(&key)?;
            let prefs = serde_json::to_value(Preferences::load(&store))?;
            // Known keys always resolve after the defaults merge.
            match prefs.get(&key) {
                Some(value) => println!("{value}"),
                None => bail!("unknown preference key: {key}"),
            }
        }
        ConfigAction::Set { key, value } => {
            validate_key(&key)?;
            let parsed = parse_value(&key, value)?;
            store.set(&key, parsed.clone())?;
            println!("{key} = {parsed}");
        }
    }
    Ok(())
}

fn validate_key(key: &str) -> Result<()> {
    if ![PREF_THEME, PREF_WRAP_ENABLED, PREF_STICKY_ENABLED].contains(&key) {
        bail!(
            "unknown preference key: {key} (expected {PREF_THEME}, {PREF_WRAP_ENABLED} or {PREF_STICKY_ENABLED})"
        );
    }
    Ok(())
}

fn parse_value(key: &str, value: String) -> Result<Value> {
    if key == PREF_THEME {
        return Ok(Value::String(value));
    }
    match value.as_str() {
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        other => bail!("{key} takes true or false, got {other:?}"),
    }
}
