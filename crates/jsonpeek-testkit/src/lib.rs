//! Scripted and capturing fakes for the collaborator traits, used by
//! integration tests and the session crate's scenario suite.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use jsonpeek_core::{PreferenceStore, Result};
use jsonpeek_render::{Colorize, DEFAULT_THEME, ThemeProvider};
use jsonpeek_session::{Panel, PanelHost, SelectionSource};
use serde_json::Value;

/// Selection source replaying a scripted queue of snapshots.
///
/// `Some(text)` is a selection; `None` models "no active selection source".
/// An exhausted script also reads as no source.
pub struct ScriptedSelection {
    snapshots: VecDeque<Option<String>>,
}

impl ScriptedSelection {
    pub fn new<I, S>(snapshots: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            snapshots: snapshots
                .into_iter()
                .map(|snapshot| snapshot.map(Into::into))
                .collect(),
        }
    }

    pub fn push<S: Into<String>>(&mut self, snapshot: Option<S>) {
        self.snapshots.push_back(snapshot.map(Into::into));
    }
}

impl SelectionSource for ScriptedSelection {
    fn current_selection(&mut self) -> Option<String> {
        self.snapshots.pop_front().flatten()
    }
}

/// Shared view into what a [`CapturingHost`]'s panels received.
#[derive(Clone, Default)]
pub struct RenderLog {
    documents: Arc<Mutex<Vec<String>>>,
    panels_created: Arc<AtomicUsize>,
}

impl RenderLog {
    pub fn documents(&self) -> Vec<String> {
        self.documents.lock().expect("render log lock").clone()
    }

    pub fn last(&self) -> Option<String> {
        self.documents.lock().expect("render log lock").last().cloned()
    }

    pub fn len(&self) -> usize {
        self.documents.lock().expect("render log lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many panels the host has handed out.
    pub fn panels_created(&self) -> usize {
        self.panels_created.load(Ordering::SeqCst)
    }

    fn record(&self, html: &str) {
        self.documents
            .lock()
            .expect("render log lock")
            .push(html.to_string());
    }
}

/// Panel host whose panels record every rendered document.
#[derive(Default)]
pub struct CapturingHost {
    log: RenderLog,
}

impl CapturingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the shared log; clone before moving the host into a
    /// controller.
    pub fn log(&self) -> RenderLog {
        self.log.clone()
    }
}

impl PanelHost for CapturingHost {
    fn create_panel(&mut self) -> Result<Box<dyn Panel>> {
        self.log.panels_created.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(CapturingPanel {
            log: self.log.clone(),
        }))
    }
}

struct CapturingPanel {
    log: RenderLog,
}

impl Panel for CapturingPanel {
    fn render(&mut self, html: &str) -> Result<()> {
        self.log.record(html);
        Ok(())
    }
}

/// Host whose panel creation always fails, for dead-channel paths.
#[derive(Default)]
pub struct BrokenHost;

impl PanelHost for BrokenHost {
    fn create_panel(&mut self) -> Result<Box<dyn Panel>> {
        Err(anyhow!("panel host is gone"))
    }
}

/// In-memory preference store. Clones share the same entries, so a test can
/// keep a handle to a store it moved into a controller.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.lock().expect("store lock").get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries
            .lock()
            .expect("store lock")
            .insert(key.to_string(), value);
        Ok(())
    }
}

/// Fixed theme list with placeholder CSS.
pub struct StaticThemes(pub Vec<String>);

impl ThemeProvider for StaticThemes {
    fn theme_names(&self) -> Vec<String> {
        self.0.clone()
    }

    fn theme_css(&self, name: &str) -> Option<String> {
        (name == DEFAULT_THEME || self.0.iter().any(|n| n == name))
            .then(|| format!("/* theme: {name} */"))
    }
}

/// Pass-through colorizer: no spans, no escaping, so assertions can match
/// displayed text directly. Test use only — not HTML-safe.
pub struct RawColorizer;

impl Colorize for RawColorizer {
    fn colorize(&self, text: &str) -> String {
        text.to_string()
    }
}
