//! Persisted plugin configuration.
//!
//! One setting exists: the archive folder path. It is stored as JSON in the
//! platform data directory and written atomically, so a crashed write never
//! leaves a half-serialized settings file behind. Loading merges stored
//! values over defaults, so a missing file or a missing field falls back to
//! the empty string.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::anyhow;
use directories::ProjectDirs;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::Result;

const APP_QUALIFIER: &str = "com";
const APP_ORGANISATION: &str = "FileChucker";
const APP_NAME: &str = "file-chucker";

/// All persisted configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Destination folder for chucked files. Blank disables the command.
    /// The value is trusted as-is; a folder that does not exist yet is
    /// created lazily on first use.
    pub archive_folder: String,
}

#[derive(Debug)]
struct SettingsStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

static STORAGE: OnceLock<SettingsStorage> = OnceLock::new();

/// Load settings from the process-wide storage location.
pub fn load() -> Result<Settings> {
    let storage = storage()?;
    let _guard = storage.lock.lock();
    read_file(&storage.path)
}

/// Persist settings to the process-wide storage location.
pub fn save(settings: &Settings) -> Result<()> {
    let storage = storage()?;
    let _guard = storage.lock.lock();
    write_file(&storage.path, settings)
}

/// Load settings from an explicit file path. A missing file yields defaults.
pub fn load_from(path: &Path) -> Result<Settings> {
    read_file(path)
}

/// Persist settings to an explicit file path, atomically.
pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    write_file(path, settings)
}

fn storage() -> Result<&'static SettingsStorage> {
    if let Some(storage) = STORAGE.get() {
        return Ok(storage);
    }

    let dir = settings_dir()?;
    fs::create_dir_all(&dir)?;
    let storage = SettingsStorage { path: dir.join("settings.json"), lock: Mutex::new(()) };

    let _ = STORAGE.set(storage);
    Ok(STORAGE.get().expect("settings storage set"))
}

fn settings_dir() -> Result<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANISATION, APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| anyhow!("unable to resolve application data directory"))
}

fn read_file(path: &Path) -> Result<Settings> {
    match fs::read(path) {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(err) => Err(err.into()),
    }
}

fn write_file(path: &Path, settings: &Settings) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| anyhow!("settings path {} has no parent directory", path.display()))?;
    fs::create_dir_all(parent)?;

    let data = serde_json::to_vec_pretty(settings)?;
    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(&data)?;
    temp.flush()?;

    match temp.persist(path) {
        Ok(_) => Ok(()),
        Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => {
            // Windows cannot replace over an open target; retry after an
            // explicit remove.
            if let Err(remove_err) = fs::remove_file(path) {
                if remove_err.kind() != io::ErrorKind::NotFound {
                    return Err(remove_err.into());
                }
            }
            err.file.persist(path).map(|_| ()).map_err(|persist_err| persist_err.error.into())
        }
        Err(err) => Err(err.error.into()),
    }
}
