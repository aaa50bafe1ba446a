use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use jsonpeek_core::{Result, runtime_dir};

/// Session logger: append-only file under the workspace runtime dir, with
/// optional stderr echo.
///
/// Logging is best-effort. Render cycles must never fail because the log
/// file is unwritable, so `record` and friends swallow I/O errors.
pub struct Observer {
    log_path: PathBuf,
    verbose: bool,
}

impl Observer {
    pub fn new(workspace: &Path) -> Result<Self> {
        let dir = runtime_dir(workspace);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            log_path: dir.join("observe.log"),
            verbose: false,
        })
    }

    /// Enable or disable verbose logging to stderr.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Record a line in the session log.
    pub fn record(&self, msg: &str) {
        let _ = self.append_log_line(&format!("{} {msg}", Utc::now().to_rfc3339()));
    }

    /// Log to stderr with a `[jsonpeek]` prefix when verbose mode is on,
    /// and to the session log always.
    pub fn verbose_log(&self, msg: &str) {
        if self.verbose {
            eprintln!("[jsonpeek] {msg}");
        }
        self.record(msg);
    }

    /// Log a warning — always written to the session log and to stderr.
    pub fn warn_log(&self, msg: &str) {
        eprintln!("[jsonpeek WARN] {msg}");
        let _ = self.append_log_line(&format!("{} WARN {msg}", Utc::now().to_rfc3339()));
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    fn append_log_line(&self, line: &str) -> Result<()> {
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(f, "{line}")?;
        Ok(())
    }
}
