//! The message store: canonical owner of the guestbook's message list.
//!
//! [`MessageStore`] mediates every creation and removal, owns the
//! newest-first ordering, persists the full list through a
//! [`MessageSlot`] after each mutation, and notifies subscribed
//! observers so a rendering layer can re-read the list reactively.
//!
//! # Failure policy
//!
//! Nothing here is fatal. A load failure degrades to an empty list, a
//! save failure is dropped after a `warn` log (the in-memory state
//! stays correct for the session), an empty message text is a silent
//! no-op, and removing an unknown id does nothing. Availability over
//! durability: this is a low-stakes toy dataset.

use lunabook_persist::MessageSlot;
use lunabook_types::{Message, MessageId, Position, now_millis};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info, warn};

use crate::config::{GuestbookConfig, PlacementConfig};
use crate::{sampler, seed};

/// Display name given to messages submitted without one.
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Callback invoked after every mutation of the message list.
///
/// Implementations can use this to trigger a redraw, push the list over
/// a channel, etc. The callback receives the full list, newest first.
pub trait StoreObserver: Send {
    /// Called after the list changed (startup load, add, remove).
    fn on_change(&mut self, messages: &[Message]);
}

/// A no-op observer for testing.
pub struct NoOpObserver;

impl StoreObserver for NoOpObserver {
    fn on_change(&mut self, _messages: &[Message]) {}
}

/// Canonical owner of the ordered message list.
///
/// Constructed once at startup and passed by reference to whatever
/// consumes it; there is no global state. All methods are synchronous
/// and complete before returning, matching the single-threaded,
/// event-driven execution model of the client.
pub struct MessageStore {
    messages: Vec<Message>,
    slot: Box<dyn MessageSlot>,
    observers: Vec<Box<dyn StoreObserver>>,
    placement: PlacementConfig,
    seeding_enabled: bool,
    rng: SmallRng,
}

impl MessageStore {
    /// Create a store over the given slot, with an entropy-seeded RNG.
    pub fn new(slot: Box<dyn MessageSlot>, config: &GuestbookConfig) -> Self {
        Self::with_rng(slot, config, SmallRng::from_rng(&mut rand::rng()))
    }

    /// Create a store with an explicit RNG, for reproducible placement
    /// in tests.
    pub fn with_rng(
        slot: Box<dyn MessageSlot>,
        config: &GuestbookConfig,
        rng: SmallRng,
    ) -> Self {
        Self {
            messages: Vec::new(),
            slot,
            observers: Vec::new(),
            placement: config.placement.clone(),
            seeding_enabled: config.seeding.enabled,
            rng,
        }
    }

    /// Load persisted state, seeding the guestbook if it comes up empty.
    ///
    /// Fails closed: absent, unreadable, or malformed persisted data is
    /// treated as an empty list, never surfaced as an error. Seeding is
    /// consulted only here; draining the store later never re-seeds.
    pub fn initialize(&mut self) {
        self.messages = match self.slot.load() {
            Ok(list) => list,
            Err(error) => {
                warn!(%error, "Failed to load message slot, starting empty");
                Vec::new()
            }
        };

        if self.messages.is_empty() && self.seeding_enabled {
            self.messages = seed::build_seed_messages(&mut self.rng, &self.placement);
            info!(count = self.messages.len(), "Seeded empty guestbook");
            self.persist();
        } else {
            info!(count = self.messages.len(), "Loaded guestbook");
        }

        self.notify();
    }

    /// Add a visitor message.
    ///
    /// Both inputs are trimmed. An empty trimmed text is a silent no-op
    /// returning `None`; an empty trimmed name falls back to
    /// [`ANONYMOUS_NAME`]. The new message is placed via spacing-aware
    /// sampling over the current positions, prepended, and persisted
    /// synchronously. Returns the new id on success.
    pub fn add(&mut self, raw_name: &str, raw_text: &str) -> Option<MessageId> {
        let text = raw_text.trim();
        if text.is_empty() {
            debug!("Rejected message with empty text");
            return None;
        }

        let name = match raw_name.trim() {
            "" => ANONYMOUS_NAME,
            trimmed => trimmed,
        };

        let existing: Vec<Position> = self.messages.iter().map(|m| m.pos).collect();
        let pos = sampler::sample_with_spacing(
            &mut self.rng,
            &existing,
            self.placement.radius,
            self.placement.min_distance,
            self.placement.max_attempts,
        );

        let message = Message {
            id: MessageId::new(),
            name: name.to_string(),
            text: text.to_string(),
            pos,
            // Millisecond precision, matching the wire format exactly.
            created_at: now_millis(),
        };
        let id = message.id;
        debug!(%id, name = %message.name, "Added message");

        self.messages.insert(0, message);
        self.persist();
        self.notify();
        Some(id)
    }

    /// Remove the message with the given id, if present.
    ///
    /// Silent no-op when the id is unknown: no write, no notification,
    /// and no distinction surfaced between "removed" and "not found".
    pub fn remove(&mut self, id: MessageId) {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        if self.messages.len() == before {
            debug!(%id, "Remove requested for unknown id");
            return;
        }

        debug!(%id, "Removed message");
        self.persist();
        self.notify();
    }

    /// The current message list, newest first. Read-only view.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages currently held.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the guestbook is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Register an observer, called after every list mutation.
    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    /// Write the full list to the slot, swallowing failures.
    fn persist(&mut self) {
        if let Err(error) = self.slot.save(&self.messages) {
            warn!(%error, "Failed to persist messages, keeping in-memory state");
        }
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.on_change(&self.messages);
        }
    }
}
