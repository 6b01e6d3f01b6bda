//! Bulk insert of generated records into MongoDB.
//!
//! One batch, one `insert_many`, with a datastore snapshot taken before and
//! after so partial application is observable through the reported deltas.

mod error;
mod insert;
mod snapshot;
mod writer;

pub use error::WriteError;
pub use insert::record_to_document;
pub use snapshot::DatastoreSnapshot;
pub use writer::{BatchWriter, WriteReport};
