use chucker_core::Settings;
use chucker_core::settings::{load_from, save_to};
use tempfile::tempdir;

#[test]
fn round_trips_through_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");

    let settings = Settings { archive_folder: "X/Y".to_string() };
    save_to(&path, &settings).expect("save settings");

    let loaded = load_from(&path).expect("load settings");
    assert_eq!(loaded.archive_folder, "X/Y");
}

#[test]
fn absent_storage_falls_back_to_empty_string() {
    let dir = tempdir().expect("tempdir");
    let loaded = load_from(&dir.path().join("never-written.json")).expect("load settings");
    assert_eq!(loaded, Settings::default());
    assert_eq!(loaded.archive_folder, "");
}

#[test]
fn repeated_saves_overwrite_cleanly() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");

    for folder in ["first", "second", "third"] {
        let settings = Settings { archive_folder: folder.to_string() };
        save_to(&path, &settings).expect("save settings");
        assert_eq!(load_from(&path).expect("load settings").archive_folder, folder);
    }
}
