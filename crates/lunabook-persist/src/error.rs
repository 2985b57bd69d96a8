//! Error types for the persistence layer.
//!
//! All errors are propagated via [`PersistError`], which wraps the
//! underlying I/O and serialization errors. Callers that want the
//! guestbook's availability-over-durability policy absorb these at
//! their own boundary.

/// Errors that can occur while reading or writing the message slot.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Reading or writing the slot's backing storage failed.
    #[error("slot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The slot content could not be serialized or deserialized.
    #[error("slot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
