//! The batch writer: snapshot, bulk insert, snapshot, report.

use crate::error::WriteError;
use crate::insert::insert_batch;
use crate::snapshot::DatastoreSnapshot;
use bson::Document;
use mongodb::{Client, Collection, Database};
use seed_generator::Record;
use tracing::info;

/// Metrics from one batch write.
#[derive(Debug, Clone, Copy)]
pub struct WriteReport {
    /// Records the caller asked to insert.
    pub requested: u64,
    /// Inserts acknowledged by the driver.
    pub inserted: u64,
    pub before: DatastoreSnapshot,
    pub after: DatastoreSnapshot,
}

impl WriteReport {
    /// Count delta actually observed in the datastore. With no concurrent
    /// writers this equals `requested` on full success and falls short of it
    /// on a partial batch.
    pub fn applied_delta(&self) -> u64 {
        self.after.documents.saturating_sub(self.before.documents)
    }

    pub fn size_delta_bytes(&self) -> i64 {
        self.after.storage_bytes as i64 - self.before.storage_bytes as i64
    }
}

/// Writes one generated batch to one collection.
///
/// Borrows the acquired client for the duration of a single `write` call;
/// the handle itself is owned by the pipeline and released at process exit.
pub struct BatchWriter {
    database: Database,
    collection: Collection<Document>,
}

impl BatchWriter {
    pub fn new(client: &Client, database_name: &str, collection_name: &str) -> Self {
        let database = client.database(database_name);
        let collection = database.collection(collection_name);
        Self {
            database,
            collection,
        }
    }

    /// Perform one bulk insert with before/after snapshots.
    ///
    /// Counts and sizes are logged on both the success and the failure path,
    /// so a partially applied batch is observable from the logs and from the
    /// error's `applied` count. No automatic retry.
    pub async fn write(&self, records: Vec<Record>) -> Result<WriteReport, WriteError> {
        let requested = records.len() as u64;

        let before = DatastoreSnapshot::take(&self.database, &self.collection).await?;
        info!(
            "before insert: {} documents, {:.2} MB storage",
            before.documents,
            before.storage_megabytes()
        );

        let inserted = match insert_batch(&self.collection, records).await {
            Ok(inserted) => inserted,
            Err(source) => {
                let applied = self.post_failure_delta(&before).await;
                return Err(WriteError::BulkInsert {
                    requested,
                    applied,
                    source,
                });
            }
        };

        let after = DatastoreSnapshot::take(&self.database, &self.collection).await?;
        info!("total records inserted: {inserted}");
        info!(
            "after insert: {} documents, {:.2} MB storage",
            after.documents,
            after.storage_megabytes()
        );

        Ok(WriteReport {
            requested,
            inserted,
            before,
            after,
        })
    }

    // Best-effort count after a failed bulk insert, so the partial batch is
    // still reported rather than hidden behind the error.
    async fn post_failure_delta(&self, before: &DatastoreSnapshot) -> u64 {
        match DatastoreSnapshot::take(&self.database, &self.collection).await {
            Ok(after) => {
                info!(
                    "after failed insert: {} documents, {:.2} MB storage",
                    after.documents,
                    after.storage_megabytes()
                );
                after.documents.saturating_sub(before.documents)
            }
            Err(err) => {
                tracing::warn!("post-failure snapshot failed: {err}");
                0
            }
        }
    }
}
