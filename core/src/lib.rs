//! Core library for the file chucker: advance to the next sibling note and
//! move the one you were reading into a configured archive folder.

#![deny(missing_debug_implementations)]

pub mod chuck;
pub mod log;
pub mod settings;
pub mod sort;
pub mod suggest;
pub mod types;
pub mod vault;
pub mod workspace;

pub type Result<T> = std::result::Result<T, anyhow::Error>;

pub use chuck::{ChuckError, chuck, next_file};
pub use settings::Settings;
pub use sort::{SortOrder, natural_cmp, natural_name_cmp};
pub use suggest::suggest_folders;
pub use types::{ChuckOutcome, FileMeta, FolderMeta, SkipReason, VaultEntry};
pub use vault::{DiskVault, Vault, sibling_files};
pub use workspace::{Pane, Workspace};

/// Returns the version of the core crate for telemetry and debugging.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
