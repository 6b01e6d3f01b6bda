//! Optional binary payload producers.
//!
//! A producer yields bytes for a record's `image` field, or nothing; "no
//! payload" is a valid, expected outcome, not an error. The kind is chosen
//! once at startup and dispatched through the [`PayloadProducer`] capability
//! so the record generator never branches on it.

mod cat;
mod drawn;

pub use cat::CatPhotoProducer;
pub use drawn::DrawnImageProducer;

use async_trait::async_trait;
use clap::ValueEnum;

/// Which payload variant to attach to generated records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PayloadKind {
    /// Cat photos fetched from the network, with a drawn annotation.
    Cat,
    /// Locally drawn procedural images.
    Drawn,
    /// No payload at all.
    None,
}

/// Capability for producing one optional payload per record.
#[async_trait]
pub trait PayloadProducer: Send {
    /// Produce the next payload, or `None` for "no payload".
    async fn produce(&mut self) -> Option<Vec<u8>>;
}

/// Producer that never yields a payload.
pub struct NoPayloadProducer;

#[async_trait]
impl PayloadProducer for NoPayloadProducer {
    async fn produce(&mut self) -> Option<Vec<u8>> {
        None
    }
}

/// Build the producer for the chosen kind.
pub fn producer_for(kind: PayloadKind) -> Box<dyn PayloadProducer> {
    match kind {
        PayloadKind::Cat => Box::new(CatPhotoProducer::new()),
        PayloadKind::Drawn => Box::new(DrawnImageProducer::new()),
        PayloadKind::None => Box::new(NoPayloadProducer),
    }
}
