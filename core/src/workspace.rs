//! Workspace pane control consumed from the host.

use std::path::{Path, PathBuf};

use super::Result;

/// Pane capabilities the command needs: what is focused, and focusing
/// something else.
pub trait Workspace {
    /// Vault-relative path of the file in the foreground pane, if any.
    fn active_file(&self) -> Option<PathBuf>;

    /// Display `path` in the foreground pane.
    fn open_file(&mut self, path: &Path) -> Result<()>;
}

/// Reference pane that tracks the focused file as plain state.
///
/// Embedding hosts bridge their own pane objects through [`Workspace`]; this
/// implementation backs tests and headless use.
#[derive(Debug, Default)]
pub struct Pane {
    active: Option<PathBuf>,
}

impl Pane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(path: impl Into<PathBuf>) -> Self {
        Self { active: Some(path.into()) }
    }
}

impl Workspace for Pane {
    fn active_file(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    fn open_file(&mut self, path: &Path) -> Result<()> {
        tracing::debug!(target: "workspace", file = %path.display(), "focused file");
        self.active = Some(path.to_path_buf());
        Ok(())
    }
}
