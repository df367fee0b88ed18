use super::*;
use crate::definition::Definition;
use crate::prompt::NonInteractive;
use async_trait::async_trait;
use std::sync::Mutex;
use tempfile::TempDir;
use tw_db::{DbError, DbResult, DuckDbBackend};

/// Definition that records its invocations and creates/drops a real table.
struct Recording {
    version: &'static str,
    table: &'static str,
    log: Arc<Mutex<Vec<String>>>,
    fail_up: bool,
}

#[async_trait]
impl Definition for Recording {
    fn version(&self) -> &str {
        self.version
    }

    async fn up(&self, db: &dyn Database) -> DbResult<()> {
        if self.fail_up {
            return Err(DbError::MigrationFailed(format!(
                "up() failed for {}",
                self.version
            )));
        }
        db.execute(&format!("CREATE TABLE {} (id INTEGER)", self.table))
            .await?;
        self.log.lock().unwrap().push(format!("up:{}", self.version));
        Ok(())
    }

    async fn down(&self, db: &dyn Database) -> DbResult<()> {
        db.drop_if_exists(self.table).await?;
        self.log
            .lock()
            .unwrap()
            .push(format!("down:{}", self.version));
        Ok(())
    }
}

struct Harness {
    _dir: TempDir,
    migration_dir: std::path::PathBuf,
    db: Arc<dyn Database>,
    ledger: LedgerDb,
    registry: DefinitionRegistry,
    log: Arc<Mutex<Vec<String>>>,
}

impl Harness {
    /// `entries`: (version, slug, table, fail_up) tuples. Writes one
    /// placeholder definition file per entry and registers a matching
    /// recording definition.
    fn new(entries: &[(&'static str, &str, &'static str, bool)]) -> Self {
        let dir = TempDir::new().unwrap();
        let log = Arc::new(Mutex::new(Vec::new()));

        let mut defs: Vec<Box<dyn Definition>> = Vec::new();
        for (version, slug, table, fail_up) in entries {
            std::fs::write(
                dir.path().join(format!("{version}_{slug}.rs")),
                "// definition\n",
            )
            .unwrap();
            defs.push(Box::new(Recording {
                version,
                table,
                log: log.clone(),
                fail_up: *fail_up,
            }));
        }

        let conn = duckdb::Connection::open_in_memory().unwrap();
        let ledger = LedgerDb::new(conn.try_clone().unwrap(), "tideway_migrations");
        ledger.initialize().unwrap();
        let db: Arc<dyn Database> = Arc::new(DuckDbBackend::from_connection(conn));

        Harness {
            migration_dir: dir.path().to_path_buf(),
            _dir: dir,
            db,
            ledger,
            registry: DefinitionRegistry::from_definitions(defs),
            log,
        }
    }

    fn orchestrator(&self) -> Orchestrator<'_> {
        Orchestrator::new(
            self.migration_dir.clone(),
            self.db.clone(),
            &self.ledger,
            &self.registry,
        )
    }

    fn ledger_versions(&self) -> Vec<String> {
        self.ledger
            .query_all(SortDir::Asc)
            .unwrap()
            .into_iter()
            .map(|r| r.version.into_inner())
            .collect()
    }
}

fn two_step_harness() -> Harness {
    Harness::new(&[
        ("20210915_100000", "add_user_table", "users", false),
        ("20211001_083000", "add_role_table", "roles", false),
    ])
}

#[tokio::test]
async fn test_pending_is_scan_minus_ledger() {
    let h = two_step_harness();
    let orch = h.orchestrator();

    let pending = orch.pending().unwrap();
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].version.as_str(), "20210915_100000");

    orch.execute_up(&pending[0]).await.unwrap();

    let pending = orch.pending().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].version.as_str(), "20211001_083000");

    let applied = orch.applied().unwrap();
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].version.as_str(), "20210915_100000");

    // Pending and the ledger stay disjoint.
    assert!(!h.ledger_versions().contains(&"20211001_083000".to_string()));
}

#[tokio::test]
async fn test_execute_up_records_humanized_description() {
    let h = two_step_harness();
    let orch = h.orchestrator();
    let pending = orch.pending().unwrap();

    orch.execute_up(&pending[0]).await.unwrap();

    let record = h
        .ledger
        .find_by_version(&pending[0].version)
        .unwrap()
        .unwrap();
    assert_eq!(record.description, "add user table");
    assert!(h.db.relation_exists("users").await.unwrap());
}

#[tokio::test]
async fn test_up_then_down_restores_ledger_membership() {
    let h = two_step_harness();
    let orch = h.orchestrator();
    let descriptor = orch.pending().unwrap().remove(0);

    assert!(h.ledger.find_by_version(&descriptor.version).unwrap().is_none());
    orch.execute_up(&descriptor).await.unwrap();
    assert!(h.ledger.find_by_version(&descriptor.version).unwrap().is_some());
    orch.execute_down(&descriptor).await.unwrap();
    assert!(h.ledger.find_by_version(&descriptor.version).unwrap().is_none());
}

#[tokio::test]
async fn test_execute_down_without_record_is_idempotent() {
    let h = two_step_harness();
    let orch = h.orchestrator();
    let descriptor = orch.pending().unwrap().remove(0);

    // Never applied: down() still runs, the missing record is a no-op.
    orch.execute_down(&descriptor).await.unwrap();
    assert_eq!(h.log.lock().unwrap().as_slice(), ["down:20210915_100000"]);
}

#[tokio::test]
async fn test_up_to_latest_applies_in_ascending_order() {
    let h = two_step_harness();
    let orch = h.orchestrator();

    let executed = orch.up_to_latest().await.unwrap();
    assert_eq!(executed.len(), 2);
    assert_eq!(
        h.log.lock().unwrap().as_slice(),
        ["up:20210915_100000", "up:20211001_083000"]
    );
    assert_eq!(
        h.ledger_versions(),
        vec!["20210915_100000", "20211001_083000"]
    );
}

#[tokio::test]
async fn test_up_to_latest_on_empty_pending_is_noop() {
    let h = Harness::new(&[]);
    let orch = h.orchestrator();

    let executed = orch.up_to_latest().await.unwrap();
    assert!(executed.is_empty());
    assert!(h.ledger_versions().is_empty());
}

#[tokio::test]
async fn test_up_to_latest_partial_completion_on_failure() {
    let h = Harness::new(&[
        ("20210915_100000", "add_user_table", "users", false),
        ("20211001_083000", "add_role_table", "roles", true),
        ("20211015_120000", "add_audit_table", "audit", false),
    ]);
    let orch = h.orchestrator();

    let err = orch.up_to_latest().await.unwrap_err();
    assert!(matches!(err, EngineError::Db(DbError::MigrationFailed(_))));

    // Step 1 stays committed, step 2 wrote nothing, step 3 never ran.
    assert_eq!(h.ledger_versions(), vec!["20210915_100000"]);
    assert!(h.db.relation_exists("users").await.unwrap());
    assert!(!h.db.relation_exists("audit").await.unwrap());
    assert_eq!(h.log.lock().unwrap().as_slice(), ["up:20210915_100000"]);
}

#[tokio::test]
async fn test_reset_all_rolls_back_lifo() {
    let h = two_step_harness();
    let orch = h.orchestrator();
    orch.up_to_latest().await.unwrap();
    h.log.lock().unwrap().clear();

    let rolled_back = orch.reset_all().await.unwrap();
    assert_eq!(rolled_back.len(), 2);
    assert_eq!(
        h.log.lock().unwrap().as_slice(),
        ["down:20211001_083000", "down:20210915_100000"]
    );
    assert!(h.ledger_versions().is_empty());
    assert!(!h.db.relation_exists("users").await.unwrap());
}

#[tokio::test]
async fn test_reset_all_on_empty_applied_is_noop() {
    let h = two_step_harness();
    let orch = h.orchestrator();

    let rolled_back = orch.reset_all().await.unwrap();
    assert!(rolled_back.is_empty());
    assert!(h.log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_reset_all_skips_orphans() {
    let h = two_step_harness();
    let orch = h.orchestrator();
    h.ledger
        .create(&tw_core::LedgerRecord::new(
            Version::try_new("20200101_000000").unwrap(),
            "deleted migration",
        ))
        .unwrap();

    orch.reset_all().await.unwrap();

    // The orphan is not in Applied, so it survives the reset untouched.
    assert_eq!(h.ledger_versions(), vec!["20200101_000000"]);
    let orphans = orch.orphaned().unwrap();
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].description, "deleted migration");
}

#[tokio::test]
async fn test_pick_up_with_invalid_explicit_version() {
    let h = two_step_harness();
    let orch = h.orchestrator();

    let err = orch
        .pick_up(Some("20991231_235959"), &NonInteractive)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation { .. }));
    // Nothing executed.
    assert!(h.log.lock().unwrap().is_empty());
    assert!(h.ledger_versions().is_empty());
}

#[tokio::test]
async fn test_pick_up_applied_version_is_invalid() {
    let h = two_step_harness();
    let orch = h.orchestrator();
    let first = orch.pending().unwrap().remove(0);
    orch.execute_up(&first).await.unwrap();

    let err = orch
        .pick_up(Some(first.version.as_str()), &NonInteractive)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation { .. }));
}

#[tokio::test]
async fn test_pick_up_defaults_to_oldest_pending() {
    let h = two_step_harness();
    let orch = h.orchestrator();

    let applied = orch.pick_up(None, &NonInteractive).await.unwrap().unwrap();
    assert_eq!(applied.version.as_str(), "20210915_100000");
}

#[tokio::test]
async fn test_pick_down_defaults_to_most_recent_applied() {
    let h = two_step_harness();
    let orch = h.orchestrator();
    orch.up_to_latest().await.unwrap();

    let rolled = orch.pick_down(None, &NonInteractive).await.unwrap().unwrap();
    assert_eq!(rolled.version.as_str(), "20211001_083000");
    assert_eq!(h.ledger_versions(), vec!["20210915_100000"]);
}

#[tokio::test]
async fn test_pick_up_with_nothing_pending_returns_none() {
    let h = two_step_harness();
    let orch = h.orchestrator();
    orch.up_to_latest().await.unwrap();

    let picked = orch.pick_up(None, &NonInteractive).await.unwrap();
    assert!(picked.is_none());
}
