//! The chuck command: open the next sibling, archive the current file.

use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use thiserror::Error;

use crate::settings::Settings;
use crate::sort::SortOrder;
use crate::types::{ChuckOutcome, FileMeta, SkipReason, VaultEntry};
use crate::vault::{Vault, sibling_files};
use crate::workspace::Workspace;

use super::Result;

/// Aborting failures a host should surface as a user notification.
///
/// The silent no-op cases are not errors; they come back as
/// [`ChuckOutcome::Skipped`].
#[derive(Debug, Error)]
pub enum ChuckError {
    /// The active file was not found in its own sibling listing. Guards the
    /// wraparound index against going out of range.
    #[error("active file {0:?} not found among its siblings")]
    ActiveFileMissing(String),

    /// The archive folder already holds a file with the same name.
    #[error("{name:?} already exists in {}", folder.display())]
    MoveCollision { name: String, folder: PathBuf },

    /// The configured archive path names a file, not a folder.
    #[error("archive path {} is a file", .0.display())]
    ArchiveIsFile(PathBuf),
}

/// Select the sibling immediately after `current_name`, wrapping from the
/// last entry back to the first. A single-entry listing resolves to that
/// entry itself.
pub fn next_file<'a>(siblings: &'a [FileMeta], current_name: &str) -> Result<&'a FileMeta> {
    let position = siblings
        .iter()
        .position(|file| file.name == current_name)
        .ok_or_else(|| ChuckError::ActiveFileMissing(current_name.to_string()))?;

    Ok(&siblings[(position + 1) % siblings.len()])
}

/// Run one chuck invocation.
///
/// Sequencing is load-bearing: the next file is opened before the rename so
/// that a sole file in its folder reopens itself and is still moved, instead
/// of colliding with its own move target.
pub fn chuck<V: Vault, W: Workspace>(
    vault: &V,
    pane: &mut W,
    settings: &Settings,
    order: SortOrder,
) -> Result<ChuckOutcome> {
    let Some(current) = pane.active_file() else {
        tracing::debug!(target: "chuck", "no active file, nothing to do");
        return Ok(ChuckOutcome::Skipped(SkipReason::NoActiveFile));
    };

    let archive = settings.archive_folder.trim();
    if archive.is_empty() {
        tracing::debug!(target: "chuck", "archive folder unset, nothing to do");
        return Ok(ChuckOutcome::Skipped(SkipReason::ArchiveUnset));
    }
    let archive = Path::new(archive);

    let parent = vault.parent(&current)?;
    if archive == parent {
        tracing::debug!(
            target: "chuck",
            file = %current.display(),
            "active file already lives in the archive folder"
        );
        return Ok(ChuckOutcome::Skipped(SkipReason::AlreadyInArchive));
    }

    let current_name = current
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("active file {} has no readable name", current.display()))?
        .to_string();

    let siblings = sibling_files(vault, &parent, order)?;
    let next = next_file(&siblings, &current_name)?.path.clone();

    ensure_archive_folder(vault, archive)?;

    let target = archive.join(&current_name);
    if vault.entry(&target)?.is_some() {
        return Err(ChuckError::MoveCollision {
            name: current_name,
            folder: archive.to_path_buf(),
        }
        .into());
    }

    pane.open_file(&next)?;
    vault
        .rename(&current, &target)
        .with_context(|| format!("archiving {}", current.display()))?;

    tracing::info!(
        target: "chuck",
        opened = %next.display(),
        moved_to = %target.display(),
        "chucked file"
    );

    Ok(ChuckOutcome::Chucked { opened: next, moved_to: target })
}

fn ensure_archive_folder<V: Vault>(vault: &V, archive: &Path) -> Result<()> {
    match vault.entry(archive)? {
        Some(VaultEntry::Folder(_)) => Ok(()),
        Some(VaultEntry::File(_)) => Err(ChuckError::ArchiveIsFile(archive.to_path_buf()).into()),
        None => vault.create_folder(archive),
    }
}
