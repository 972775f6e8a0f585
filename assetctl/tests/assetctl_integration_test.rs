use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const SCHEMA_SOURCE: &str = include_str!("../../bindata/assets/schema.graphql");

fn get_assetctl_cmd() -> Command {
    Command::cargo_bin("assetctl").unwrap()
}

fn temp_dir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("assetctl_test_restore_")
        .tempdir()
        .unwrap()
}

#[test]
fn test_list() {
    let mut cmd = get_assetctl_cmd();
    cmd.arg("list");

    cmd.assert()
        .success()
        .stdout(predicate::eq("schema.graphql\n"));
}

#[test]
fn test_dir_top_level() {
    let mut cmd = get_assetctl_cmd();
    cmd.arg("dir");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("schema.graphql"));
}

#[test]
fn test_dir_on_asset_fails() {
    let mut cmd = get_assetctl_cmd();
    cmd.arg("dir").arg("schema.graphql");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Asset error: Asset schema.graphql is not a directory",
        ));
}

#[test]
fn test_cat_schema() {
    let mut cmd = get_assetctl_cmd();
    cmd.arg("cat").arg("schema.graphql");

    cmd.assert().success().stdout(predicate::eq(SCHEMA_SOURCE));
}

#[test]
fn test_cat_missing_asset() {
    let mut cmd = get_assetctl_cmd();
    cmd.arg("cat").arg("nonexistent");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Asset error: Asset nonexistent not found",
        ));
}

#[test]
fn test_info() {
    let mut cmd = get_assetctl_cmd();
    cmd.arg("info").arg("schema.graphql");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Name: schema.graphql"))
        .stdout(predicate::str::contains("Size: 578 bytes"))
        .stdout(predicate::str::contains("Mode: 664"))
        .stdout(predicate::str::contains("Modified: 2019-08-06T17:12:01+00:00"));
}

#[test]
fn test_restore_schema() {
    let output_dir = temp_dir();

    let mut cmd = get_assetctl_cmd();
    cmd.arg("restore")
        .arg("schema.graphql")
        .arg("--destination")
        .arg(output_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Restored 'schema.graphql' to"));

    let restored_path = output_dir.path().join("schema.graphql");
    assert_eq!(std::fs::read_to_string(&restored_path).unwrap(), SCHEMA_SOURCE);
    let metadata = std::fs::metadata(&restored_path).unwrap();
    let mtime = filetime::FileTime::from_last_modification_time(&metadata);
    assert_eq!(mtime.unix_seconds(), 1565111521);
}

#[test]
fn test_restore_all() {
    let output_dir = temp_dir();

    let mut cmd = get_assetctl_cmd();
    cmd.arg("restore").arg("--destination").arg(output_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Restored 'all assets' to"));
    assert!(output_dir.path().join("schema.graphql").is_file());
}

#[test]
fn test_restore_requires_destination() {
    let mut cmd = get_assetctl_cmd();
    cmd.arg("restore").arg("schema.graphql");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--destination"));
}

#[test]
fn test_debug_flag_logs_restore() {
    let output_dir = temp_dir();

    let mut cmd = get_assetctl_cmd();
    cmd.arg("--debug")
        .arg("restore")
        .arg("schema.graphql")
        .arg("--destination")
        .arg(output_dir.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("restored 'schema.graphql'"));
}
