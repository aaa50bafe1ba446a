//! Preview rendering wired to real collaborators: file/stdin selections, a
//! file-writing panel, the settings store, and the syntect theme catalog.

use std::collections::VecDeque;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jsonpeek_observe::Observer;
use jsonpeek_render::{JsonColorizer, Renderer};
use jsonpeek_session::{Panel, PanelHost, SelectionSource, SessionController};
use jsonpeek_store::SettingsFile;

use super::theme_catalog;

/// Selection source handing out queued snapshots, one per render cycle.
struct QueuedSelection {
    snapshots: VecDeque<String>,
}

impl SelectionSource for QueuedSelection {
    fn current_selection(&mut self) -> Option<String> {
        self.snapshots.pop_front()
    }
}

/// Panel writing each delivered document to one file, last write wins.
struct FilePanel {
    path: PathBuf,
}

impl Panel for FilePanel {
    fn render(&mut self, html: &str) -> jsonpeek_core::Result<()> {
        fs::write(&self.path, html)
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}

struct FilePanelHost {
    path: PathBuf,
}

impl PanelHost for FilePanelHost {
    fn create_panel(&mut self) -> jsonpeek_core::Result<Box<dyn Panel>> {
        Ok(Box::new(FilePanel {
            path: self.path.clone(),
        }))
    }
}

fn session(
    workspace: &Path,
    out: &Path,
    snapshots: VecDeque<String>,
    theme_dir: Option<&Path>,
    verbose: bool,
) -> Result<SessionController> {
    let mut observer = Observer::new(workspace)?;
    observer.set_verbose(verbose);
    Ok(SessionController::new(
        Box::new(QueuedSelection { snapshots }),
        Box::new(FilePanelHost {
            path: out.to_path_buf(),
        }),
        Box::new(theme_catalog(theme_dir)?),
        Box::new(SettingsFile::open(workspace)),
        Renderer::new(Box::new(JsonColorizer::new())),
        observer,
    ))
}

pub(crate) fn run_render(
    workspace: &Path,
    input: Option<&Path>,
    out: &Path,
    theme_dir: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let text = match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        }
        None => read_stdin()?,
    };
    let mut session = session(workspace, out, VecDeque::from([text]), theme_dir, verbose)?;
    session.open_preview()?;
    println!("{}", out.display());
    Ok(())
}

pub(crate) fn run_frames(
    workspace: &Path,
    out: &Path,
    theme_dir: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let raw = read_stdin()?;
    let frames: VecDeque<String> = raw.split('\x0c').map(str::to_string).collect();
    let count = frames.len();

    let mut session = session(workspace, out, frames, theme_dir, verbose)?;
    session.open_preview()?;
    for _ in 1..count {
        session.selection_changed()?;
    }
    println!("{}", out.display());
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("read selection text from stdin")?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_writes_a_full_document_for_a_file_selection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("selection.txt");
        let out = dir.path().join("preview.html");
        fs::write(&input, r#"{"a":1,"b":[1,2,3]}"#).expect("write input");

        run_render(dir.path(), Some(&input), &out, None, false).expect("render");

        let html = fs::read_to_string(&out).expect("rendered document");
        assert!(html.contains("<title>Prettified JSON</title>"));
        assert!(html.contains("<span class=\"ln\">1</span>"));
        assert!(html.contains("<span class=\"ln\">8</span>"));
        assert!(html.contains("<select id=\"theme\">"));
    }

    #[test]
    fn frame_queue_renders_once_per_snapshot_with_sticky_fallback() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("preview.html");
        let frames = VecDeque::from([r#"{"a":1}"#.to_string(), "not json".to_string()]);

        let mut session = session(dir.path(), &out, frames, None, false).expect("session");
        session.open_preview().expect("first frame");
        session.selection_changed().expect("second frame");

        // Sticky is on by default, so the bad frame keeps the good content.
        let html = fs::read_to_string(&out).expect("rendered document");
        assert!(html.contains("span"), "colorized spans expected");
        assert!(html.contains("ln\">3</span>"), "three numbered lines");
    }
}
