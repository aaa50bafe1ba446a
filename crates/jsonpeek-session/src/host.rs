//! Collaborator boundaries owned by the host editor integration.

use jsonpeek_core::Result;

/// Source of the current editor selection.
///
/// `None` means there is no active selection source (no focused editor);
/// `Some("")` is an empty selection, which is a different condition and
/// flows through the format engine as `EmptySelection`.
pub trait SelectionSource {
    fn current_selection(&mut self) -> Option<String>;
}

/// Outbound half of the display channel: delivers a full document to the
/// panel surface. Regenerated in full on every render cycle; there is no
/// incremental patching.
pub trait Panel {
    fn render(&mut self, html: &str) -> Result<()>;
}

/// Creates the displayable surface. At most one panel exists per session;
/// the controller calls this lazily, once.
pub trait PanelHost {
    fn create_panel(&mut self) -> Result<Box<dyn Panel>>;
}
