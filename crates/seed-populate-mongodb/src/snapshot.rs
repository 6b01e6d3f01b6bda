//! Before/after datastore measurements.

use bson::{doc, Bson, Document};
use mongodb::{Collection, Database};

/// Document count and storage size at one point in time.
///
/// Captured twice per run, purely for observability; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatastoreSnapshot {
    /// Documents in the target collection.
    pub documents: u64,
    /// Storage size of the whole database, from `dbStats`.
    pub storage_bytes: u64,
}

impl DatastoreSnapshot {
    pub async fn take(
        database: &Database,
        collection: &Collection<Document>,
    ) -> Result<Self, mongodb::error::Error> {
        let documents = collection.count_documents(doc! {}).await?;
        let stats = database.run_command(doc! { "dbStats": 1 }).await?;
        let storage_bytes = bson_number_as_u64(stats.get("storageSize")).unwrap_or(0);
        Ok(Self {
            documents,
            storage_bytes,
        })
    }

    pub fn storage_megabytes(&self) -> f64 {
        self.storage_bytes as f64 / 1024.0 / 1024.0
    }
}

// dbStats reports storageSize as int32, int64 or double depending on the
// server version and size.
fn bson_number_as_u64(value: Option<&Bson>) -> Option<u64> {
    match value? {
        Bson::Int32(v) => u64::try_from(*v).ok(),
        Bson::Int64(v) => u64::try_from(*v).ok(),
        Bson::Double(v) if *v >= 0.0 => Some(*v as u64),
        _ => None,
    }
}
