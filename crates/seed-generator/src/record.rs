//! The unit of generated data.

use seed_geo::Coordinate;

/// One synthetic registration.
///
/// Immutable once built; consumed exactly once by the batch writer. There is
/// deliberately no idempotency key, so two generated batches are always
/// disjoint sets of documents.
#[derive(Debug, Clone)]
pub struct Record {
    pub name: String,
    pub age: i32,
    pub city: String,
    pub email: String,
    pub notes: String,
    pub location: Coordinate,
    /// Optional binary payload; `None` maps to a null field in the store.
    pub image: Option<Vec<u8>>,
}
