//! Disk-backed vault rooted at a directory, the reference [`Vault`] impl.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, anyhow, bail};

use crate::types::{FileMeta, FolderMeta, VaultEntry};

use super::{Result, Vault};

/// A vault stored directly on the local filesystem.
///
/// Paths handed across the [`Vault`] trait are relative to `root`. Hidden
/// entries (dot-prefixed) are invisible to enumeration, matching how the host
/// file browser presents a folder.
#[derive(Debug)]
pub struct DiskVault {
    root: PathBuf,
}

impl DiskVault {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            bail!("vault root {} is not a directory", root.display());
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, rel: &Path) -> PathBuf {
        self.root.join(rel)
    }

    fn classify(&self, abs: &Path, rel: PathBuf) -> Result<VaultEntry> {
        let name = rel
            .file_name()
            .and_then(OsStr::to_str)
            .map(str::to_string)
            .ok_or_else(|| anyhow!("entry {} has no readable name", rel.display()))?;

        let meta = fs::metadata(abs)
            .with_context(|| format!("reading metadata for {}", abs.display()))?;

        if meta.is_dir() {
            Ok(VaultEntry::Folder(FolderMeta { name, path: rel }))
        } else {
            let modified_ms = meta.modified().map(epoch_ms).unwrap_or(0);
            let created_ms = meta.created().map(epoch_ms).unwrap_or(modified_ms);
            Ok(VaultEntry::File(FileMeta { name, path: rel, created_ms, modified_ms }))
        }
    }

    fn collect_folders(&self, rel: &Path, out: &mut Vec<FolderMeta>) -> Result<()> {
        for entry in self.children(rel)? {
            if let VaultEntry::Folder(meta) = entry {
                let path = meta.path.clone();
                out.push(meta);
                self.collect_folders(&path, out)?;
            }
        }
        Ok(())
    }
}

impl Vault for DiskVault {
    fn children(&self, folder: &Path) -> Result<Vec<VaultEntry>> {
        let abs = self.resolve(folder);
        let mut entries = Vec::new();

        for entry in
            fs::read_dir(&abs).with_context(|| format!("listing folder {}", abs.display()))?
        {
            let entry = entry?;
            if is_hidden(&entry.path()) {
                continue;
            }
            let rel = folder.join(entry.file_name());
            entries.push(self.classify(&entry.path(), rel)?);
        }

        Ok(entries)
    }

    fn parent(&self, file: &Path) -> Result<PathBuf> {
        file.parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| anyhow!("path {} has no parent folder", file.display()))
    }

    fn entry(&self, path: &Path) -> Result<Option<VaultEntry>> {
        let abs = self.resolve(path);
        if !abs.exists() {
            return Ok(None);
        }
        self.classify(&abs, path.to_path_buf()).map(Some)
    }

    fn create_folder(&self, path: &Path) -> Result<()> {
        let abs = self.resolve(path);
        fs::create_dir_all(&abs)
            .with_context(|| format!("creating folder {}", abs.display()))?;
        tracing::debug!(target: "vault", folder = %path.display(), "ensured folder");
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        let src = self.resolve(from);
        let dst = self.resolve(to);

        // fs::rename overwrites on most platforms; the vault contract is to
        // refuse instead.
        if dst.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", dst.display()),
            )
            .into());
        }

        fs::rename(&src, &dst)
            .with_context(|| format!("moving {} to {}", src.display(), dst.display()))?;
        tracing::debug!(target: "vault", from = %from.display(), to = %to.display(), "moved file");
        Ok(())
    }

    fn folders(&self) -> Result<Vec<FolderMeta>> {
        let mut out = Vec::new();
        self.collect_folders(Path::new(""), &mut out)?;
        Ok(out)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name().and_then(OsStr::to_str).map(|name| name.starts_with('.')).unwrap_or(false)
}

fn epoch_ms(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH).unwrap_or_default().as_millis() as u64
}
