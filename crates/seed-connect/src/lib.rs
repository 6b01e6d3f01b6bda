//! Resilient MongoDB connection acquisition.
//!
//! Endpoints from a prioritized list are probed in order with a bounded
//! per-attempt timeout; if every configured endpoint fails, an interactive
//! fallback loop lets the operator supply new endpoints or abort. Every log
//! line that mentions an endpoint goes through credential redaction first.

mod acquire;
mod probe;
mod redact;

pub use acquire::{acquire, Acquired, ConsoleFallbackPrompt, FallbackChoice, FallbackPrompt};
pub use probe::{MongoProbe, Probe, ProbeError};
pub use redact::redact_credentials;
