//! Single-slot message persistence for the Lunabook guestbook.
//!
//! The guestbook persists its entire message list as one JSON document
//! in a single named slot, the way a browser client would use one
//! key-value storage entry. This crate defines the [`MessageSlot`]
//! trait the store talks to, a [`JsonFileSlot`] backed by a file on
//! disk, and a [`MemorySlot`] for tests and ephemeral sessions.
//!
//! Every operation returns an explicit [`Result`]; the decision to
//! swallow failures (degrade to an empty list on load, drop the write
//! on save) belongs to the store, not to this layer.

pub mod error;
pub mod slot;

pub use error::PersistError;
pub use slot::{JsonFileSlot, MemorySlot, MessageSlot};
