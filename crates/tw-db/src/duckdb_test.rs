use super::*;

#[tokio::test]
async fn test_in_memory() {
    let db = DuckDbBackend::in_memory().unwrap();
    assert_eq!(db.db_type(), "duckdb");
}

#[tokio::test]
async fn test_execute_and_relation_exists() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute("CREATE TABLE users (id INTEGER, name VARCHAR)")
        .await
        .unwrap();

    assert!(db.relation_exists("users").await.unwrap());
    assert!(!db.relation_exists("roles").await.unwrap());
}

#[tokio::test]
async fn test_execute_batch() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch(
        "CREATE TABLE t1 (id INT); CREATE TABLE t2 (id INT); INSERT INTO t1 VALUES (1);",
    )
    .await
    .unwrap();

    assert!(db.relation_exists("t1").await.unwrap());
    assert!(db.relation_exists("t2").await.unwrap());
    assert_eq!(db.query_count("SELECT * FROM t1").await.unwrap(), 1);
}

#[tokio::test]
async fn test_execute_error_propagates() {
    let db = DuckDbBackend::in_memory().unwrap();
    let err = db.execute("NOT VALID SQL").await.unwrap_err();
    assert!(matches!(err, DbError::ExecutionError(_)));
}

#[tokio::test]
async fn test_drop_if_exists() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute("CREATE TABLE to_drop (id INT)").await.unwrap();
    assert!(db.relation_exists("to_drop").await.unwrap());

    db.drop_if_exists("to_drop").await.unwrap();
    assert!(!db.relation_exists("to_drop").await.unwrap());

    // Dropping a missing relation is a no-op
    db.drop_if_exists("to_drop").await.unwrap();
}

#[tokio::test]
async fn test_from_connection_shares_instance() {
    let conn = duckdb::Connection::open_in_memory().unwrap();
    let clone = conn.try_clone().unwrap();
    let db = DuckDbBackend::from_connection(conn);

    db.execute("CREATE TABLE shared (id INT)").await.unwrap();

    // The cloned handle sees what the backend created.
    let count: i64 = clone
        .query_row(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = 'shared'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_schema_qualified_relation_exists() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch("CREATE SCHEMA staging; CREATE TABLE staging.users (id INT);")
        .await
        .unwrap();

    assert!(db.relation_exists("staging.users").await.unwrap());
    assert!(!db.relation_exists("staging.roles").await.unwrap());
}
