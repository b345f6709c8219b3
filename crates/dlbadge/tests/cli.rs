//! Binary-level tests: exit codes, stdout and the written artifact

use assert_cmd::Command;
use mockito::Server;
use predicates::prelude::*;
use tempfile::TempDir;

fn dlbadge(workdir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dlbadge"));
    cmd.current_dir(workdir.path())
        .env_clear()
        .args(["--color", "never"]);
    cmd
}

#[test]
fn version_prints_crate_version() {
    let workdir = TempDir::new().unwrap();
    dlbadge(&workdir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generate_writes_json_badge() {
    let mut server = Server::new();
    let _modrinth = server
        .mock("GET", "/v2/project/AANobbMI")
        .with_status(200)
        .with_body(r#"{"downloads": 321}"#)
        .create();

    let workdir = TempDir::new().unwrap();
    dlbadge(&workdir)
        .args(["--modrinth-project-id", "AANobbMI"])
        .args(["--modrinth-base-url", server.url().as_str()])
        .args(["--sources", "modrinth"])
        .arg("generate")
        .assert()
        .success();

    let written = std::fs::read_to_string(workdir.path().join("badges/downloads.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"schemaVersion": 1, "label": "downloads", "message": "321", "color": "blue"})
    );
}

#[test]
fn label_and_badge_color_flags_style_the_badge() {
    let mut server = Server::new();
    let _modrinth = server
        .mock("GET", "/v2/project/AANobbMI")
        .with_status(200)
        .with_body(r#"{"downloads": 77}"#)
        .create();

    let workdir = TempDir::new().unwrap();
    dlbadge(&workdir)
        .args(["--modrinth-project-id", "AANobbMI"])
        .args(["--modrinth-base-url", server.url().as_str()])
        .args(["--sources", "modrinth"])
        .args(["--label", "installs"])
        .args(["--badge-color", "green"])
        .assert()
        .success();

    let written = std::fs::read_to_string(workdir.path().join("badges/downloads.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"schemaVersion": 1, "label": "installs", "message": "77", "color": "green"})
    );
}

#[test]
fn badge_style_from_environment() {
    let mut server = Server::new();
    let _modrinth = server
        .mock("GET", "/v2/project/AANobbMI")
        .with_status(200)
        .with_body(r#"{"downloads": 3}"#)
        .create();

    let workdir = TempDir::new().unwrap();
    dlbadge(&workdir)
        .env("DLBADGE_MODRINTH_PROJECT_ID", "AANobbMI")
        .env("DLBADGE_MODRINTH_BASE_URL", server.url())
        .env("DLBADGE_SOURCES", "modrinth")
        .env("DLBADGE_LABEL", "players")
        .env("DLBADGE_BADGE_COLOR", "#ff8800")
        .args(["generate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"players\""))
        .stdout(predicate::str::contains("\"color\": \"#ff8800\""));
}

#[test]
fn environment_configures_sources() {
    let mut server = Server::new();
    let _spigot = server
        .mock("GET", "/resources/demo.7/")
        .with_status(200)
        .with_body("Total Downloads: 9,001")
        .create();

    let workdir = TempDir::new().unwrap();
    dlbadge(&workdir)
        .env("DLBADGE_SPIGOT_PLUGIN_ID", "demo.7")
        .env("DLBADGE_SPIGOT_BASE_URL", server.url())
        .env("DLBADGE_SOURCES", "spigot")
        .env("DLBADGE_OUTPUT", "out/badge.svg")
        .assert()
        .success();

    let svg = std::fs::read_to_string(workdir.path().join("out/badge.svg")).unwrap();
    assert!(svg.contains(">9001</text>"));
}

#[test]
fn unreachable_source_still_succeeds() {
    let mut server = Server::new();
    let _modrinth = server
        .mock("GET", "/v2/project/AANobbMI")
        .with_status(500)
        .create();

    let workdir = TempDir::new().unwrap();
    dlbadge(&workdir)
        .args(["--modrinth-project-id", "AANobbMI"])
        .args(["--modrinth-base-url", server.url().as_str()])
        .args(["--sources", "modrinth"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Source unavailable"));

    let written = std::fs::read_to_string(workdir.path().join("badges/downloads.json")).unwrap();
    assert!(written.contains("\"message\": \"0\""));
}

#[test]
fn dry_run_prints_badge_without_writing() {
    let mut server = Server::new();
    let _modrinth = server
        .mock("GET", "/v2/project/AANobbMI")
        .with_status(200)
        .with_body(r#"{"downloads": 5}"#)
        .create();

    let workdir = TempDir::new().unwrap();
    dlbadge(&workdir)
        .args(["--modrinth-project-id", "AANobbMI"])
        .args(["--modrinth-base-url", server.url().as_str()])
        .args(["--sources", "modrinth"])
        .args(["generate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"message\": \"5\""));

    assert!(!workdir.path().join("badges").exists());
}

#[test]
fn missing_configuration_fails() {
    let workdir = TempDir::new().unwrap();
    dlbadge(&workdir)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no download source is configured"));
}

#[test]
fn unwritable_output_fails() {
    let mut server = Server::new();
    let _modrinth = server
        .mock("GET", "/v2/project/AANobbMI")
        .with_status(200)
        .with_body(r#"{"downloads": 5}"#)
        .create();

    let workdir = TempDir::new().unwrap();
    std::fs::write(workdir.path().join("badges"), "a file, not a directory").unwrap();

    dlbadge(&workdir)
        .args(["--modrinth-project-id", "AANobbMI"])
        .args(["--modrinth-base-url", server.url().as_str()])
        .args(["--sources", "modrinth"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create output directory"));
}
