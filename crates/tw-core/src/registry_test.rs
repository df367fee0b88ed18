use super::*;
use tempfile::TempDir;

fn touch(dir: &TempDir, name: &str) {
    std::fs::write(dir.path().join(name), "// placeholder\n").unwrap();
}

#[test]
fn test_scan_orders_ascending() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "20211001_083000_add_role_table.rs");
    touch(&dir, "20210915_100000_add_user_table.rs");

    let scanned = scan(dir.path()).unwrap();
    let versions: Vec<&str> = scanned.keys().map(|v| v.as_str()).collect();
    assert_eq!(versions, vec!["20210915_100000", "20211001_083000"]);
    assert_eq!(
        scanned.values().next().map(String::as_str),
        Some("add_user_table")
    );
}

#[test]
fn test_scan_skips_nonconforming_entries() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "20210915_100000_add_user_table.rs");
    touch(&dir, "mod.rs");
    touch(&dir, "README.md");
    touch(&dir, "notes.rs");
    touch(&dir, "20210915_100000_add_user_table.rs.bak");
    std::fs::create_dir(dir.path().join("20211001_083000_subdir.rs")).unwrap();

    let scanned = scan(dir.path()).unwrap();
    assert_eq!(scanned.len(), 1);
}

#[test]
fn test_scan_rejects_duplicate_versions() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "20210915_100000_add_user_table.rs");
    touch(&dir, "20210915_100000_add_role_table.rs");

    let err = scan(dir.path()).unwrap_err();
    assert!(
        matches!(err, CoreError::DuplicateVersion { ref version } if version == "20210915_100000"),
        "expected DuplicateVersion, got: {err:?}"
    );
}

#[test]
fn test_scan_missing_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does_not_exist");
    assert!(matches!(
        scan(&missing),
        Err(CoreError::MigrationDirNotFound { .. })
    ));
}

#[test]
fn test_scan_descriptors_round_trip() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "20210915_100000_add_user_table.rs");

    let descriptors = scan_descriptors(dir.path()).unwrap();
    assert_eq!(descriptors.len(), 1);
    assert_eq!(
        descriptors[0].file_name(),
        "20210915_100000_add_user_table.rs"
    );
}
