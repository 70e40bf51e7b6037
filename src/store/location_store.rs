use crate::app_config;
use crate::clock::Clock;
use crate::domain::{LocationRecord, LocationUpdate, Snapshot, UserId};
use crate::store::StoreError;
use crate::store::snapshot_file;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

/// Location records of all users, kept in a single snapshot file. Writers hold the lock for the
/// whole load, modify and persist cycle.
#[derive(Debug)]
pub struct LocationStore {
    path: PathBuf,
    pretty: bool,
    clock: Arc<dyn Clock>,
    lock: RwLock<()>,
}

#[derive(PartialEq, Debug)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

#[derive(PartialEq, Debug)]
pub enum DeleteOutcome {
    Removed,
    Absent,
}

impl LocationStore {
    pub fn new(path: impl Into<PathBuf>, pretty: bool, clock: Arc<dyn Clock>) -> Self {
        LocationStore {
            path: path.into(),
            pretty,
            clock,
            lock: RwLock::new(()),
        }
    }

    pub fn from_config(config: &app_config::Store, clock: Arc<dyn Clock>) -> Self {
        Self::new(config.snapshot_path(), config.pretty(), clock)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(skip(self))]
    pub async fn read(&self) -> Result<Snapshot, StoreError> {
        let _guard = self.lock.read().await;
        let records = snapshot_file::load(&self.path).await?;

        debug!("🔵 Read {} record(s)", records.len());
        Ok(Snapshot {
            records,
            server_time: self.clock.now(),
        })
    }

    /// Inserts the record for a new user or overwrites the one of a known user.
    ///
    /// Any snapshot that cannot be loaded, whether it is missing, unparsable or fails with an I/O
    /// error, is treated as empty and replaced by one holding just this record.
    #[instrument(skip_all, fields(user_id = %update.user_id))]
    pub async fn upsert(&self, update: LocationUpdate) -> Result<UpsertOutcome, StoreError> {
        let _guard = self.lock.write().await;

        let mut records = match snapshot_file::load(&self.path).await {
            Ok(records) => records,
            Err(StoreError::NotFound) => {
                info!("🔵 No snapshot at '{}' yet, creating one", self.path.display());
                Vec::new()
            }
            Err(err) => {
                warn!("⚠️ Discarding unusable snapshot: {}", err);
                Vec::new()
            }
        };

        let now = self.clock.now();
        let outcome = match records.iter_mut().find(|record| record.user_id == update.user_id) {
            Some(record) => {
                record.apply(update, now);
                UpsertOutcome::Updated
            }
            None => {
                records.push(LocationRecord::new(update, now));
                UpsertOutcome::Inserted
            }
        };

        snapshot_file::persist(&self.path, &records, self.pretty).await?;

        debug!(outcome = ?outcome, "🟢 Stored location, {} record(s) in total", records.len());
        Ok(outcome)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: &UserId) -> Result<DeleteOutcome, StoreError> {
        let _guard = self.lock.write().await;

        let mut records = match snapshot_file::load(&self.path).await {
            Ok(records) => records,
            Err(StoreError::NotFound) => return Ok(DeleteOutcome::Absent),
            Err(err) => return Err(err),
        };

        let count = records.len();
        records.retain(|record| &record.user_id != user_id);
        if records.len() == count {
            debug!("🔵 No record to delete");
            return Ok(DeleteOutcome::Absent);
        }

        snapshot_file::persist(&self.path, &records, self.pretty).await?;

        info!("🔴 Deleted location record");
        Ok(DeleteOutcome::Removed)
    }
}
