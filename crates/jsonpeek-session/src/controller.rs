//! The session controller: owns the panel handle, preferences, and sticky
//! slot, and runs one full render cycle per external event.

use jsonpeek_core::{PreferenceStore, Preferences, StickySlot, format_selection};
use jsonpeek_observe::Observer;
use jsonpeek_render::{Renderer, ThemeProvider};
use thiserror::Error;

use crate::host::{Panel, PanelHost, SelectionSource};
use crate::message::PanelMessage;

/// Failures surfaced to the event dispatcher. Fatal to the triggering event
/// only; the session itself keeps running.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("display channel unavailable: {0}")]
    MissingCollaborator(anyhow::Error),
}

/// Panel lifecycle. There is no transition back to `NoPanel`: close and
/// disposal belong to the host.
enum PanelState {
    NoPanel,
    PanelOpen(Box<dyn Panel>),
}

pub struct SessionController {
    selection: Box<dyn SelectionSource>,
    host: Box<dyn PanelHost>,
    themes: Box<dyn ThemeProvider>,
    store: Box<dyn PreferenceStore>,
    renderer: Renderer,
    observer: Observer,
    prefs: Preferences,
    sticky: StickySlot,
    panel: PanelState,
}

impl SessionController {
    /// Construct a session. Preferences are loaded from the store once,
    /// here; afterwards the in-memory copy is authoritative and the store
    /// only receives writes.
    pub fn new(
        selection: Box<dyn SelectionSource>,
        host: Box<dyn PanelHost>,
        themes: Box<dyn ThemeProvider>,
        store: Box<dyn PreferenceStore>,
        renderer: Renderer,
        observer: Observer,
    ) -> Self {
        let prefs = Preferences::load(store.as_ref());
        Self {
            selection,
            host,
            themes,
            store,
            renderer,
            observer,
            prefs,
            sticky: StickySlot::new(),
            panel: PanelState::NoPanel,
        }
    }

    /// Command invocation: create the panel if this session has none yet,
    /// then run one full render cycle.
    pub fn open_preview(&mut self) -> Result<(), SessionError> {
        if let PanelState::NoPanel = self.panel {
            let panel = self.host.create_panel().map_err(|err| {
                self.observer
                    .warn_log(&format!("panel creation failed: {err:#}"));
                SessionError::MissingCollaborator(err)
            })?;
            self.panel = PanelState::PanelOpen(panel);
            self.observer.record("panel opened");
        }
        self.render_cycle()
    }

    /// Selection-change notification. A no-op until the first command
    /// invocation has opened the panel.
    pub fn selection_changed(&mut self) -> Result<(), SessionError> {
        match self.panel {
            PanelState::NoPanel => Ok(()),
            PanelState::PanelOpen(_) => self.render_cycle(),
        }
    }

    /// Inbound control event: update the matching in-memory preference and
    /// persist it. Never forces a re-render — the panel applied the visual
    /// change itself, and the next selection change picks up the rest.
    pub fn handle_message(&mut self, message: PanelMessage) {
        match message {
            PanelMessage::ThemeChanged { theme } => {
                self.observer.verbose_log(&format!("theme changed: {theme}"));
                self.prefs.theme = theme;
                if let Err(err) = self.prefs.persist_theme(self.store.as_mut()) {
                    self.observer
                        .warn_log(&format!("persisting theme failed: {err:#}"));
                }
            }
            PanelMessage::WrapChanged { wrap } => {
                self.observer.verbose_log(&format!("wrap changed: {wrap}"));
                self.prefs.wrap_enabled = wrap;
                if let Err(err) = self.prefs.persist_wrap(self.store.as_mut()) {
                    self.observer
                        .warn_log(&format!("persisting wrap failed: {err:#}"));
                }
            }
            PanelMessage::StickyChanged { sticky } => {
                self.observer
                    .verbose_log(&format!("sticky changed: {sticky}"));
                self.prefs.sticky_enabled = sticky;
                if let Err(err) = self.prefs.persist_sticky(self.store.as_mut()) {
                    self.observer
                        .warn_log(&format!("persisting sticky failed: {err:#}"));
                }
            }
            PanelMessage::Log { text } => {
                self.observer.record(&format!("panel: {text}"));
            }
        }
    }

    /// One full render cycle: selection → format → sticky decision →
    /// document → panel. Runs to completion before the next event.
    fn render_cycle(&mut self) -> Result<(), SessionError> {
        let PanelState::PanelOpen(panel) = &mut self.panel else {
            return Ok(());
        };
        let Some(text) = self.selection.current_selection() else {
            // No active selection source: prior displayed content stays.
            self.observer.verbose_log("no active selection source");
            return Ok(());
        };
        let outcome = format_selection(&text);
        if let Err(err) = &outcome {
            self.observer.verbose_log(&format!("format failed: {err}"));
        }
        let content = self.sticky.resolve(outcome, self.prefs.sticky_enabled);
        let html = self.renderer.render(&content, &self.prefs, self.themes.as_ref());
        panel.render(&html).map_err(|err| {
            self.observer
                .warn_log(&format!("panel render failed: {err:#}"));
            SessionError::MissingCollaborator(err)
        })?;
        Ok(())
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn panel_open(&self) -> bool {
        matches!(self.panel, PanelState::PanelOpen(_))
    }

    /// Last successfully formatted document, if any (the sticky slot).
    pub fn last_good(&self) -> Option<&str> {
        self.sticky.last_good()
    }
}
