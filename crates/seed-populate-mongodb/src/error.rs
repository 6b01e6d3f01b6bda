//! Error types for the batch writer.

use thiserror::Error;

/// Errors that can occur while writing a batch.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The bulk insert failed. `applied` is the post-write count delta
    /// observed after the failure; how much of the batch actually landed is
    /// datastore-defined, so the re-queried count is the only ground truth.
    #[error("bulk insert applied {applied} of {requested} documents before failing: {source}")]
    BulkInsert {
        requested: u64,
        applied: u64,
        #[source]
        source: mongodb::error::Error,
    },

    /// A datastore snapshot (count or dbStats) query failed.
    #[error("datastore snapshot failed: {0}")]
    Snapshot(#[from] mongodb::error::Error),
}
