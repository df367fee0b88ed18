use super::*;
use tempfile::TempDir;

#[test]
fn test_load_with_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE), "name: sample\n").unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "sample");
    assert_eq!(config.migration_path, "migrations");
    assert_eq!(config.ledger_table, "tideway_migrations");
    assert_eq!(config.database.db_type, DbType::Duckdb);
    assert_eq!(config.database.path, "tideway.duckdb");
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE),
        r#"
name: sample
migration_path: "db/migrations"
ledger_table: "schema_history"
database:
  type: duckdb
  path: "dev.duckdb"
"#,
    )
    .unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.migration_path, "db/migrations");
    assert_eq!(config.ledger_table, "schema_history");
    assert_eq!(config.database.path, "dev.duckdb");
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        Config::load_from_dir(dir.path()),
        Err(CoreError::ConfigNotFound { .. })
    ));
}

#[test]
fn test_unknown_fields_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE),
        "name: sample\nmigrations_dir: typo\n",
    )
    .unwrap();

    assert!(matches!(
        Config::load_from_dir(dir.path()),
        Err(CoreError::YamlParse(_))
    ));
}

#[test]
fn test_ledger_table_must_be_identifier() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE),
        "name: sample\nledger_table: \"bad table; drop\"\n",
    )
    .unwrap();

    assert!(matches!(
        Config::load_from_dir(dir.path()),
        Err(CoreError::ConfigInvalid { .. })
    ));
}

#[test]
fn test_path_helpers() {
    let config = Config {
        name: "sample".to_string(),
        migration_path: "migrations".to_string(),
        ledger_table: "tideway_migrations".to_string(),
        database: DatabaseConfig::default(),
    };
    let root = Path::new("/tmp/project");
    assert_eq!(
        config.migration_path_absolute(root),
        Path::new("/tmp/project/migrations")
    );
    assert_eq!(
        config.database_path_absolute(root),
        "/tmp/project/tideway.duckdb"
    );

    let mem = Config {
        database: DatabaseConfig {
            db_type: DbType::Duckdb,
            path: ":memory:".to_string(),
        },
        ..config
    };
    assert_eq!(mem.database_path_absolute(root), ":memory:");
}
