use std::fs;
use std::path::{Path, PathBuf};

use chucker_core::{
    ChuckError, ChuckOutcome, DiskVault, Pane, Settings, SkipReason, SortOrder, Workspace, chuck,
};
use tempfile::{TempDir, tempdir};

fn vault_with(files: &[&str]) -> (TempDir, DiskVault) {
    let dir = tempdir().expect("tempdir");
    for file in files {
        let path = dir.path().join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"note").unwrap();
    }
    let vault = DiskVault::open(dir.path()).expect("open vault");
    (dir, vault)
}

fn archive_settings() -> Settings {
    Settings { archive_folder: "archive".to_string() }
}

#[test]
fn advances_to_next_sibling_and_archives_current() {
    let (dir, vault) = vault_with(&["inbox/a1.md", "inbox/a2.md", "inbox/a10.md"]);
    let mut pane = Pane::focused("inbox/a2.md");

    let outcome =
        chuck(&vault, &mut pane, &archive_settings(), SortOrder::AlphabeticalAsc).unwrap();

    // Natural order is a1, a2, a10; the successor of a2 is a10.
    assert_eq!(
        outcome,
        ChuckOutcome::Chucked {
            opened: PathBuf::from("inbox/a10.md"),
            moved_to: PathBuf::from("archive/a2.md"),
        }
    );
    assert_eq!(pane.active_file(), Some(PathBuf::from("inbox/a10.md")));
    assert!(!dir.path().join("inbox/a2.md").exists());
    assert!(dir.path().join("archive/a2.md").exists());
}

#[test]
fn wraps_from_last_sibling_to_first() {
    let (_dir, vault) = vault_with(&["inbox/a1.md", "inbox/a2.md", "inbox/a10.md"]);
    let mut pane = Pane::focused("inbox/a10.md");

    let outcome =
        chuck(&vault, &mut pane, &archive_settings(), SortOrder::AlphabeticalAsc).unwrap();

    assert!(matches!(
        outcome,
        ChuckOutcome::Chucked { opened, .. } if opened == Path::new("inbox/a1.md")
    ));
}

#[test]
fn descending_order_reverses_the_successor() {
    let (_dir, vault) = vault_with(&["inbox/a1.md", "inbox/a2.md", "inbox/a10.md"]);
    let mut pane = Pane::focused("inbox/a2.md");

    let outcome =
        chuck(&vault, &mut pane, &archive_settings(), SortOrder::AlphabeticalDesc).unwrap();

    // Descending order is a10, a2, a1; the successor of a2 is a1.
    assert!(matches!(
        outcome,
        ChuckOutcome::Chucked { opened, .. } if opened == Path::new("inbox/a1.md")
    ));
}

#[test]
fn sole_file_reopens_itself_and_still_moves() {
    let (dir, vault) = vault_with(&["inbox/only.md"]);
    let mut pane = Pane::focused("inbox/only.md");

    let outcome =
        chuck(&vault, &mut pane, &archive_settings(), SortOrder::AlphabeticalAsc).unwrap();

    assert_eq!(
        outcome,
        ChuckOutcome::Chucked {
            opened: PathBuf::from("inbox/only.md"),
            moved_to: PathBuf::from("archive/only.md"),
        }
    );
    assert!(!dir.path().join("inbox/only.md").exists());
    assert!(dir.path().join("archive/only.md").exists());
}

#[test]
fn archive_folder_is_created_lazily_and_reused() {
    let (dir, vault) = vault_with(&["inbox/a.md", "inbox/b.md"]);
    assert!(!dir.path().join("archive").exists());

    let mut pane = Pane::focused("inbox/a.md");
    chuck(&vault, &mut pane, &archive_settings(), SortOrder::AlphabeticalAsc).unwrap();
    assert!(dir.path().join("archive").is_dir());

    // Second run with the folder already present must not error.
    let mut pane = Pane::focused("inbox/b.md");
    let outcome =
        chuck(&vault, &mut pane, &archive_settings(), SortOrder::AlphabeticalAsc).unwrap();
    assert!(matches!(outcome, ChuckOutcome::Chucked { .. }));
    assert!(dir.path().join("archive/b.md").exists());
}

#[test]
fn skips_when_active_file_already_in_archive() {
    let (dir, vault) = vault_with(&["archive/kept.md", "archive/other.md"]);
    let mut pane = Pane::focused("archive/kept.md");

    let outcome =
        chuck(&vault, &mut pane, &archive_settings(), SortOrder::AlphabeticalAsc).unwrap();

    assert_eq!(outcome, ChuckOutcome::Skipped(SkipReason::AlreadyInArchive));
    // No move and no pane switch happened.
    assert_eq!(pane.active_file(), Some(PathBuf::from("archive/kept.md")));
    assert!(dir.path().join("archive/kept.md").exists());
}

#[test]
fn skips_when_archive_folder_is_blank() {
    let (_dir, vault) = vault_with(&["inbox/a.md"]);
    let mut pane = Pane::focused("inbox/a.md");

    let outcome = chuck(&vault, &mut pane, &Settings::default(), SortOrder::default()).unwrap();
    assert_eq!(outcome, ChuckOutcome::Skipped(SkipReason::ArchiveUnset));
}

#[test]
fn skips_when_no_file_is_active() {
    let (_dir, vault) = vault_with(&["inbox/a.md"]);
    let mut pane = Pane::new();

    let outcome = chuck(&vault, &mut pane, &archive_settings(), SortOrder::default()).unwrap();
    assert_eq!(outcome, ChuckOutcome::Skipped(SkipReason::NoActiveFile));
}

#[test]
fn collision_in_archive_aborts_without_moving() {
    let (dir, vault) = vault_with(&["inbox/a.md", "inbox/b.md", "archive/a.md"]);
    let mut pane = Pane::focused("inbox/a.md");

    let err =
        chuck(&vault, &mut pane, &archive_settings(), SortOrder::AlphabeticalAsc).unwrap_err();
    let chuck_err = err.downcast::<ChuckError>().unwrap();
    assert!(matches!(chuck_err, ChuckError::MoveCollision { name, .. } if name == "a.md"));

    // The original stayed put and the pane never switched.
    assert!(dir.path().join("inbox/a.md").exists());
    assert_eq!(pane.active_file(), Some(PathBuf::from("inbox/a.md")));
}

#[test]
fn active_file_missing_from_listing_aborts() {
    let (_dir, vault) = vault_with(&["inbox/real.md"]);
    let mut pane = Pane::focused("inbox/ghost.md");

    let err =
        chuck(&vault, &mut pane, &archive_settings(), SortOrder::AlphabeticalAsc).unwrap_err();
    let chuck_err = err.downcast::<ChuckError>().unwrap();
    assert!(matches!(chuck_err, ChuckError::ActiveFileMissing(name) if name == "ghost.md"));
}

#[test]
fn modified_time_order_picks_the_time_successor() {
    let (dir, vault) = vault_with(&["inbox/old.md", "inbox/mid.md", "inbox/new.md"]);

    let stamp = |name: &str, secs: u64| {
        let file = fs::File::options()
            .write(true)
            .open(dir.path().join("inbox").join(name))
            .unwrap();
        file.set_modified(std::time::UNIX_EPOCH + std::time::Duration::from_secs(secs)).unwrap();
    };
    stamp("old.md", 1_000);
    stamp("mid.md", 2_000);
    stamp("new.md", 3_000);

    let mut pane = Pane::focused("inbox/mid.md");
    let outcome = chuck(&vault, &mut pane, &archive_settings(), SortOrder::ModifiedAsc).unwrap();

    assert!(matches!(
        outcome,
        ChuckOutcome::Chucked { opened, .. } if opened == Path::new("inbox/new.md")
    ));
}
