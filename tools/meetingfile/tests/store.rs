use std::fs;

use meetingfile::{RecordFile, SEED_MEETING, StoreError};

#[test]
fn missing_file_is_created_with_seed_and_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("nested").join("test.meeting");
    let store = RecordFile::new(&path, SEED_MEETING);

    let text = store.read_or_seed().unwrap();

    assert_eq!(text, SEED_MEETING);
    assert_eq!(fs::read_to_string(&path).unwrap(), SEED_MEETING);
}

#[test]
fn existing_file_is_read_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.meeting");
    fs::write(&path, "'title'='kept'\n").unwrap();

    let store = RecordFile::new(&path, SEED_MEETING);
    assert_eq!(store.read_or_seed().unwrap(), "'title'='kept'\n");
}

#[test]
fn write_replaces_content_and_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.meeting");
    let store = RecordFile::new(&path, SEED_MEETING);
    store.read_or_seed().unwrap();

    store.write("'title'='new'\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "'title'='new'\n");
    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, ["test.meeting"]);
}

#[test]
fn write_into_missing_directory_fails_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent").join("test.meeting");
    let store = RecordFile::new(&path, SEED_MEETING);

    let err = store.write("x").unwrap_err();
    assert!(matches!(err, StoreError::Write { path: ref p, .. } if p == &path));
    assert!(!path.exists());
}

#[test]
fn path_occupied_by_directory_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordFile::new(dir.path(), SEED_MEETING);

    assert!(matches!(
        store.read_or_seed(),
        Err(StoreError::Read { .. })
    ));
}
