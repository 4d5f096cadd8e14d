//! Host file-tree capabilities: queries, mutation, and the disk-backed vault.

mod disk;

pub use disk::DiskVault;

use std::path::{Path, PathBuf};

use crate::sort::SortOrder;
use crate::types::{FileMeta, FolderMeta, VaultEntry};

/// Shared result type for vault operations.
pub type Result<T> = crate::Result<T>;

/// File-tree capabilities the command consumes from the host.
///
/// All paths are vault-relative; the empty path names the vault root.
pub trait Vault {
    /// List the entries directly inside `folder`.
    fn children(&self, folder: &Path) -> Result<Vec<VaultEntry>>;

    /// Parent folder of `file`. Files at the vault root report the empty path.
    fn parent(&self, file: &Path) -> Result<PathBuf>;

    /// Look up a single entry; `None` when nothing exists at `path`.
    fn entry(&self, path: &Path) -> Result<Option<VaultEntry>>;

    /// Create `path` as a folder. Succeeds when it already exists.
    fn create_folder(&self, path: &Path) -> Result<()>;

    /// Move a file to a new path. Refuses to overwrite an existing target.
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;

    /// Every folder in the vault, recursively. Backs the settings
    /// autocomplete surface.
    fn folders(&self) -> Result<Vec<FolderMeta>>;
}

/// Filter a folder's children to file entries and sort them by `order`.
pub fn sibling_files<V: Vault>(vault: &V, folder: &Path, order: SortOrder) -> Result<Vec<FileMeta>> {
    let mut files: Vec<FileMeta> = vault
        .children(folder)?
        .into_iter()
        .filter_map(|entry| match entry {
            VaultEntry::File(meta) => Some(meta),
            VaultEntry::Folder(_) => None,
        })
        .collect();

    files.sort_by(order.comparator());
    Ok(files)
}
