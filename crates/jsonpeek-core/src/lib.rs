//! Core preview pipeline: selection text in, display decision out.
//!
//! This crate owns the pure half of jsonpeek — the repair-candidate chain,
//! the parse-and-format engine, the sticky last-good cache, and the
//! preference model. Everything here is synchronous and side-effect free
//! except [`PreferenceStore::set`], which is a trait boundary for the
//! durable settings file.

use std::path::{Path, PathBuf};

pub mod format;
pub mod prefs;
pub mod preprocess;
pub mod sticky;

pub use format::{FormatError, FormattedDocument, format_selection};
pub use prefs::{
    PREF_STICKY_ENABLED, PREF_THEME, PREF_WRAP_ENABLED, PreferenceStore, Preferences,
};
pub use sticky::{DisplayContent, StickySlot};

pub type Result<T> = anyhow::Result<T>;

/// Directory holding jsonpeek's runtime files (settings, logs) for a workspace.
pub fn runtime_dir(workspace: &Path) -> PathBuf {
    workspace.join(".jsonpeek")
}
