//! Shared type definitions for the Lunabook guestbook.
//!
//! This crate holds the entity types exchanged between the core store,
//! the persistence layer, and the browser rendering layer: the
//! [`Message`] entity, its [`MessageId`], and the [`Position`] coordinate
//! type. Serialization matches the wire schema the rendering layer
//! consumes, and `ts-rs` exports `TypeScript` bindings for it.

pub mod ids;
pub mod message;

pub use ids::MessageId;
pub use message::{Message, Position, now_millis};
