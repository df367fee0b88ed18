//! The migration state machine.
//!
//! Computes the Pending/Applied/Orphaned sets from one registry scan and
//! one ledger read per call (nothing is cached across runs) and drives
//! `up()`/`down()` execution, single or batched. Failures raised inside a
//! definition are deliberately never caught here: they propagate to the
//! caller with the ledger untouched, leaving visible partial state for
//! the operator. Batches are sequential and have no mid-run abort.

use crate::definition::DefinitionRegistry;
use crate::error::{EngineError, EngineResult};
use crate::loader::Loader;
use crate::prompt::Interaction;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use tw_core::{humanize, registry, Descriptor, LedgerRecord, Version};
use tw_db::Database;
use tw_ledger::{LedgerDb, SortDir};

/// Drives migration execution against one project.
///
/// All collaborators are passed in explicitly; the orchestrator holds no
/// global state.
pub struct Orchestrator<'a> {
    migration_dir: PathBuf,
    db: Arc<dyn Database>,
    ledger: &'a LedgerDb,
    registry: &'a DefinitionRegistry,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        migration_dir: impl Into<PathBuf>,
        db: Arc<dyn Database>,
        ledger: &'a LedgerDb,
        registry: &'a DefinitionRegistry,
    ) -> Self {
        Self {
            migration_dir: migration_dir.into(),
            db,
            ledger,
            registry,
        }
    }

    fn loader(&self) -> Loader<'a> {
        Loader::new(self.migration_dir.clone(), self.registry)
    }

    fn ledger_versions(&self) -> EngineResult<BTreeSet<Version>> {
        Ok(self
            .ledger
            .query_all(SortDir::Asc)?
            .into_iter()
            .map(|r| r.version)
            .collect())
    }

    /// Migrations in the registry but not in the ledger, ascending.
    pub fn pending(&self) -> EngineResult<Vec<Descriptor>> {
        let ledger = self.ledger_versions()?;
        Ok(registry::scan_descriptors(&self.migration_dir)?
            .into_iter()
            .filter(|d| !ledger.contains(&d.version))
            .collect())
    }

    /// Migrations in both registry and ledger, ascending.
    pub fn applied(&self) -> EngineResult<Vec<Descriptor>> {
        let ledger = self.ledger_versions()?;
        Ok(registry::scan_descriptors(&self.migration_dir)?
            .into_iter()
            .filter(|d| ledger.contains(&d.version))
            .collect())
    }

    /// Ledger records whose definition file is gone, ascending.
    pub fn orphaned(&self) -> EngineResult<Vec<LedgerRecord>> {
        let scanned = registry::scan(&self.migration_dir)?;
        let mut orphans: Vec<LedgerRecord> = self
            .ledger
            .query_all(SortDir::Asc)?
            .into_iter()
            .filter(|r| !scanned.contains_key(&r.version))
            .collect();
        orphans.sort_by(|a, b| a.version.cmp(&b.version));
        Ok(orphans)
    }

    /// Apply one migration and record it.
    ///
    /// Precondition: the descriptor is Pending. A failure inside `up()`
    /// propagates uncaught and the ledger is not written.
    pub async fn execute_up(&self, descriptor: &Descriptor) -> EngineResult<()> {
        let definition = self.loader().load(descriptor)?;
        log::debug!("running up() for {}", descriptor.version);
        definition.up(self.db.as_ref()).await?;

        let record = LedgerRecord::new(
            descriptor.version.clone(),
            humanize(&descriptor.description),
        );
        self.ledger.create(&record)?;
        Ok(())
    }

    /// Roll one migration back and delete its record.
    ///
    /// Precondition: the descriptor is Applied. A failure inside `down()`
    /// propagates uncaught and the record stays. A missing record after a
    /// successful `down()` is a no-op, so the operation is idempotent.
    pub async fn execute_down(&self, descriptor: &Descriptor) -> EngineResult<()> {
        let definition = self.loader().load(descriptor)?;
        log::debug!("running down() for {}", descriptor.version);
        definition.down(self.db.as_ref()).await?;

        if !self.ledger.delete(&descriptor.version)? {
            log::debug!("no ledger record for {}, nothing to delete", descriptor.version);
        }
        Ok(())
    }

    /// Apply every pending migration, oldest first.
    ///
    /// Not all-or-nothing: if step N fails, steps 1..N-1 stay committed in
    /// the ledger, N..last are never attempted, and the failure propagates.
    /// Returns the descriptors that were applied.
    pub async fn up_to_latest(&self) -> EngineResult<Vec<Descriptor>> {
        let pending = self.pending()?;
        if pending.is_empty() {
            println!("Already up to date.");
            return Ok(pending);
        }

        let total = pending.len();
        println!("Applying {total} migration(s)...");
        for (i, descriptor) in pending.iter().enumerate() {
            println!(
                "  [{}/{}] up   {}_{}",
                i + 1,
                total,
                descriptor.version,
                descriptor.description
            );
            self.execute_up(descriptor).await?;
        }
        Ok(pending)
    }

    /// Roll back every applied migration, most recent first (LIFO).
    ///
    /// Same partial-completion semantics as [`Orchestrator::up_to_latest`].
    pub async fn reset_all(&self) -> EngineResult<Vec<Descriptor>> {
        let mut applied = self.applied()?;
        applied.reverse();
        if applied.is_empty() {
            println!("No migrations have been applied, nothing to roll back.");
            return Ok(applied);
        }

        let total = applied.len();
        println!("Rolling back {total} migration(s)...");
        for (i, descriptor) in applied.iter().enumerate() {
            println!(
                "  [{}/{}] down {}_{}",
                i + 1,
                total,
                descriptor.version,
                descriptor.description
            );
            self.execute_down(descriptor).await?;
        }
        Ok(applied)
    }

    /// Apply a single migration.
    ///
    /// An explicit version must be a member of Pending, else a
    /// non-fatal [`EngineError::Validation`] is returned and nothing
    /// executes. Without one, the choice is delegated to the interaction
    /// collaborator over Pending, oldest first. `None` means there was
    /// nothing to pick or the choice was cancelled.
    pub async fn pick_up(
        &self,
        explicit: Option<&str>,
        ui: &dyn Interaction,
    ) -> EngineResult<Option<Descriptor>> {
        let pending = self.pending()?;
        let Some(descriptor) = self.pick(explicit, ui, pending, "Pending", "apply")? else {
            return Ok(None);
        };
        self.execute_up(&descriptor).await?;
        Ok(Some(descriptor))
    }

    /// Roll back a single migration.
    ///
    /// Symmetric to [`Orchestrator::pick_up`] over Applied; the default
    /// choice ordering is most recent first.
    pub async fn pick_down(
        &self,
        explicit: Option<&str>,
        ui: &dyn Interaction,
    ) -> EngineResult<Option<Descriptor>> {
        let mut applied = self.applied()?;
        applied.reverse();
        let Some(descriptor) = self.pick(explicit, ui, applied, "Applied", "roll back")? else {
            return Ok(None);
        };
        self.execute_down(&descriptor).await?;
        Ok(Some(descriptor))
    }

    fn pick(
        &self,
        explicit: Option<&str>,
        ui: &dyn Interaction,
        candidates: Vec<Descriptor>,
        set_name: &str,
        verb: &str,
    ) -> EngineResult<Option<Descriptor>> {
        match explicit {
            Some(version) => candidates
                .into_iter()
                .find(|d| d.version.as_str() == version)
                .map(Some)
                .ok_or_else(|| EngineError::Validation {
                    message: format!("version {version} is not in the {set_name} set"),
                }),
            None => {
                if candidates.is_empty() {
                    return Ok(None);
                }
                let prompt = format!("Select a migration to {verb}");
                match ui.choose(&prompt, &candidates) {
                    Some(version) => candidates
                        .into_iter()
                        .find(|d| d.version == version)
                        .map(Some)
                        .ok_or_else(|| EngineError::Validation {
                            message: format!(
                                "selected version {version} is not one of the offered options"
                            ),
                        }),
                    None => Ok(None),
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
