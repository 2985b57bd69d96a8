//! Message store, spatial placement, and seeding for the Lunabook guestbook.
//!
//! Lunabook turns a small persisted list of visitor messages into a
//! spatial scene: each entry floats at a pseudo-random position above a
//! rendered lunar surface, with a best-effort minimum distance between
//! labels. This crate is the non-visual core the rendering layer sits
//! on top of.
//!
//! # Modules
//!
//! - [`sampler`] -- Volume-uniform sampling inside a sphere with
//!   minimum-spacing rejection.
//! - [`store`] -- [`MessageStore`], the canonical owner of the ordered
//!   message list, its persistence, and change notification.
//! - [`seed`] -- First-run seed content so a fresh guestbook is not an
//!   empty scene.
//! - [`config`] -- Typed YAML configuration for placement geometry,
//!   storage location, and seeding.
//!
//! [`MessageStore`]: store::MessageStore

pub mod config;
pub mod sampler;
pub mod seed;
pub mod store;

pub use config::{GuestbookConfig, PlacementConfig, SeedingConfig, StorageConfig};
pub use sampler::{DEFAULT_MAX_ATTEMPTS, sample_in_sphere, sample_with_spacing};
pub use store::{ANONYMOUS_NAME, MessageStore, NoOpObserver, StoreObserver};
