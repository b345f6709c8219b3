use super::*;
use crate::badge::{BadgeStyle, render};
use crate::primitives::BadgeFormat;
use tempfile::TempDir;

#[test]
fn test_creates_missing_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("badges/nested/downloads.json");

    let artifact = render(7, &BadgeStyle::default(), BadgeFormat::Json);
    write_artifact(&path, &artifact).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["message"], "7");
}

#[test]
fn test_overwrites_previous_artifact_entirely() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("downloads.json");
    fs::write(&path, r#"{"schemaVersion":1,"label":"old","message":"999999","color":"red","stale":true}"#)
        .unwrap();

    let artifact = render(3, &BadgeStyle::default(), BadgeFormat::Json);
    write_artifact(&path, &artifact).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!({"schemaVersion": 1, "label": "downloads", "message": "3", "color": "blue"})
    );
}

#[test]
fn test_no_temp_files_left_behind() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("downloads.svg");

    let artifact = render(1, &BadgeStyle::default(), BadgeFormat::Svg);
    write_artifact(&path, &artifact).unwrap();
    write_artifact(&path, &artifact).unwrap();

    let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_parent_is_a_file_fails() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("badges");
    fs::write(&blocker, "not a directory").unwrap();

    let artifact = render(1, &BadgeStyle::default(), BadgeFormat::Json);
    let result = write_artifact(&blocker.join("downloads.json"), &artifact);

    assert!(matches!(result, Err(BadgeError::CreateDir { .. })));
}

#[cfg(unix)]
#[test]
fn test_written_file_is_world_readable() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("downloads.json");
    write_artifact(&path, &render(1, &BadgeStyle::default(), BadgeFormat::Json)).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}
