//! First-run seed content.
//!
//! A brand-new guestbook would otherwise render an empty sky, so the
//! store plants a small fixed set of sample messages the first time it
//! starts with no persisted state. Seeds follow the same spacing rule
//! as visitor messages, and each seed is placed with knowledge of the
//! seeds placed before it, so the starter set never overlaps itself.
//!
//! Seed timestamps are jittered backward from the current time so the
//! entries read as already-existing rather than just-created.

use chrono::Duration;
use lunabook_types::{Message, MessageId, Position, now_millis};
use rand::Rng;

use crate::config::PlacementConfig;
use crate::sampler;

/// The fixed starter entries, as `(name, text)` pairs.
pub const SEED_MESSAGES: [(&str, &str); 4] = [
    ("Nova", "First footprint on the regolith!"),
    ("Orion", "Counting stars from the mare"),
    ("Luna", "Hello from the quiet side"),
    ("Atlas", "Leave a word under Earthrise"),
];

/// Upper bound (exclusive) of the backward timestamp jitter, in
/// milliseconds.
pub const MAX_BACKDATE_MS: i64 = 1_000_000;

/// Build the seed messages, spacing each one against those already
/// placed.
pub fn build_seed_messages(rng: &mut impl Rng, placement: &PlacementConfig) -> Vec<Message> {
    // Millisecond precision, matching the wire format exactly.
    let now = now_millis();
    let mut seeds: Vec<Message> = Vec::with_capacity(SEED_MESSAGES.len());
    let mut placed: Vec<Position> = Vec::with_capacity(SEED_MESSAGES.len());

    for (name, text) in SEED_MESSAGES {
        let pos = sampler::sample_with_spacing(
            rng,
            &placed,
            placement.radius,
            placement.min_distance,
            placement.max_attempts,
        );
        placed.push(pos);

        let jitter = Duration::milliseconds(rng.random_range(0..MAX_BACKDATE_MS));
        seeds.push(Message {
            id: MessageId::new(),
            name: name.to_string(),
            text: text.to_string(),
            pos,
            created_at: now.checked_sub_signed(jitter).unwrap_or(now),
        });
    }

    seeds
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::{Timelike, Utc};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn builds_the_full_fixed_set() {
        let mut rng = SmallRng::seed_from_u64(42);
        let seeds = build_seed_messages(&mut rng, &PlacementConfig::default());
        assert_eq!(seeds.len(), SEED_MESSAGES.len());
        assert_eq!(seeds[0].name, "Nova");
        assert_eq!(seeds[3].name, "Atlas");
        assert!(seeds.iter().all(|s| !s.text.trim().is_empty()));
    }

    #[test]
    fn seed_ids_are_distinct() {
        let mut rng = SmallRng::seed_from_u64(42);
        let seeds = build_seed_messages(&mut rng, &PlacementConfig::default());
        let ids: BTreeSet<_> = seeds.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), seeds.len());
    }

    #[test]
    fn seeds_are_mutually_spaced() {
        // Four labels in an 8-unit sphere leave plenty of room, so the
        // pairwise rule should hold outright for a fixed seed.
        let placement = PlacementConfig::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let seeds = build_seed_messages(&mut rng, &placement);

        for (i, a) in seeds.iter().enumerate() {
            for b in seeds.iter().skip(i.saturating_add(1)) {
                assert!(
                    a.pos.distance_to(b.pos) >= placement.min_distance,
                    "seeds {} and {} overlap",
                    a.name,
                    b.name
                );
            }
        }
    }

    #[test]
    fn seeds_stay_inside_the_sphere() {
        let placement = PlacementConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let seeds = build_seed_messages(&mut rng, &placement);
        assert!(seeds.iter().all(|s| s.pos.length() <= placement.radius + 1e-9));
    }

    #[test]
    fn seed_timestamps_are_backdated() {
        let before = Utc::now();
        let mut rng = SmallRng::seed_from_u64(42);
        let seeds = build_seed_messages(&mut rng, &PlacementConfig::default());
        let after = Utc::now();

        let floor = before
            .checked_sub_signed(Duration::milliseconds(MAX_BACKDATE_MS))
            .unwrap();
        for seed in &seeds {
            assert!(seed.created_at <= after);
            assert!(seed.created_at >= floor);
        }
    }

    #[test]
    fn seed_timestamps_use_wire_precision() {
        // Nothing finer than a millisecond survives serialization, so
        // seeds must not carry sub-millisecond precision either.
        let mut rng = SmallRng::seed_from_u64(42);
        let seeds = build_seed_messages(&mut rng, &PlacementConfig::default());
        for seed in &seeds {
            assert_eq!(seed.created_at.timestamp_subsec_nanos() % 1_000_000, 0);
        }
    }
}
