use schema_bindata::schema::{self, SCHEMA_GRAPHQL};
use schema_bindata::Error;

const SCHEMA_SOURCE: &str = include_str!("../assets/schema.graphql");

#[test]
fn test_schema_bytes_match_recorded_size() {
    let bytes = schema::asset(SCHEMA_GRAPHQL).unwrap();
    let info = schema::asset_info(SCHEMA_GRAPHQL).unwrap();

    assert_eq!(bytes.len(), 578);
    assert_eq!(info.size, bytes.len() as u64);
    assert_eq!(bytes, SCHEMA_SOURCE.as_bytes());
}

#[test]
fn test_schema_info() {
    let info = schema::asset_info(SCHEMA_GRAPHQL).unwrap();

    assert_eq!(info.name, "schema.graphql");
    assert_eq!(info.file_name(), "schema.graphql");
    assert_eq!(info.mode, 0o664);
    assert_eq!(info.mod_time.timestamp(), 1565111521);
    assert!(!info.is_dir());
}

#[test]
fn test_schema_text() {
    let sdl = schema::schema().unwrap();

    assert!(sdl.contains("schema {\n  query: Query\n}"));
    assert!(sdl.contains("type UserInfo {"));
    assert!(sdl.contains("user: UserInfo!"));
}

#[test]
fn test_must_asset() {
    assert_eq!(schema::must_asset(SCHEMA_GRAPHQL).len(), 578);
}

#[test]
#[should_panic(expected = "asset: get(nonexistent)")]
fn test_must_asset_panics_on_missing() {
    schema::must_asset("nonexistent");
}

#[test]
fn test_nonexistent_is_not_found() {
    match schema::asset("nonexistent") {
        Err(Error::NotFound(name)) => assert_eq!(name, "nonexistent"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(schema::asset_info("nonexistent").unwrap_err().is_not_found());
}

#[test]
fn test_asset_names() {
    assert_eq!(schema::asset_names(), vec![SCHEMA_GRAPHQL.to_string()]);
}

#[test]
fn test_asset_dir_top_level_matches_names() {
    let mut top = schema::asset_dir("").unwrap();
    let mut names = schema::asset_names();
    top.sort();
    names.sort();
    assert_eq!(top, names);
}

#[test]
fn test_asset_dir_on_asset_is_not_a_directory() {
    assert!(matches!(
        schema::asset_dir(SCHEMA_GRAPHQL),
        Err(Error::NotADirectory(_))
    ));
    assert!(schema::asset_dir("notexist").unwrap_err().is_not_found());
}

#[test]
fn test_restore_schema() {
    let dir = tempfile::tempdir().unwrap();
    schema::restore_asset(dir.path(), SCHEMA_GRAPHQL).unwrap();

    let target = dir.path().join("schema.graphql");
    let restored = std::fs::read(&target).unwrap();
    assert_eq!(restored, schema::asset(SCHEMA_GRAPHQL).unwrap());

    let metadata = std::fs::metadata(&target).unwrap();
    let mtime = filetime::FileTime::from_last_modification_time(&metadata);
    assert_eq!(
        mtime.unix_seconds(),
        schema::asset_info(SCHEMA_GRAPHQL).unwrap().mod_time.timestamp()
    );

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        assert_eq!(metadata.permissions().mode() & 0o777, 0o664);
    }
}

#[test]
fn test_restore_everything() {
    let dir = tempfile::tempdir().unwrap();
    schema::restore_assets(dir.path(), "").unwrap();

    let restored = std::fs::read_to_string(dir.path().join("schema.graphql")).unwrap();
    assert_eq!(restored, SCHEMA_SOURCE);
}
