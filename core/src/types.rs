//! Shared data structures exchanged between the chucker core and its host shell.

use std::path::{Path, PathBuf};

/// Metadata for a file-type entry in the host's file tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    /// File name including extension, e.g. `note 12.md`.
    pub name: String,
    /// Vault-relative path of the file.
    pub path: PathBuf,
    /// Creation timestamp in epoch milliseconds. Filesystems that do not
    /// report a birth time fall back to the modification time.
    pub created_ms: u64,
    /// Modification timestamp in epoch milliseconds.
    pub modified_ms: u64,
}

/// Metadata for a folder-type entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderMeta {
    pub name: String,
    /// Vault-relative path of the folder.
    pub path: PathBuf,
}

/// A single entry in the host's file tree, classified at read time.
///
/// Hosts hand back polymorphic tree nodes; this tagged variant replaces
/// runtime type inspection with explicit classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultEntry {
    File(FileMeta),
    Folder(FolderMeta),
}

impl VaultEntry {
    pub fn as_file(&self) -> Option<&FileMeta> {
        match self {
            VaultEntry::File(meta) => Some(meta),
            VaultEntry::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&FolderMeta> {
        match self {
            VaultEntry::File(_) => None,
            VaultEntry::Folder(meta) => Some(meta),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, VaultEntry::Folder(_))
    }

    pub fn path(&self) -> &Path {
        match self {
            VaultEntry::File(meta) => &meta.path,
            VaultEntry::Folder(meta) => &meta.path,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            VaultEntry::File(meta) => &meta.name,
            VaultEntry::Folder(meta) => &meta.name,
        }
    }
}

/// Result of a single chuck invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChuckOutcome {
    /// The next sibling was opened and the original moved into the archive.
    Chucked { opened: PathBuf, moved_to: PathBuf },
    /// Nothing happened; see the reason.
    Skipped(SkipReason),
}

/// Silent no-op cases. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No file is focused in the workspace pane.
    NoActiveFile,
    /// The archive folder setting is blank.
    ArchiveUnset,
    /// The active file already lives in the configured archive folder.
    AlreadyInArchive,
}
