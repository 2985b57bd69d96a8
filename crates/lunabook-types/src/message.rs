//! The guestbook [`Message`] entity and its [`Position`] coordinate.
//!
//! A message is created exactly once (by a visitor submission or by
//! first-run seeding), is never mutated, and is destroyed only by an
//! explicit delete. The wire format is the JSON array-of-objects the
//! browser rendering layer reads:
//!
//! ```json
//! { "id": "...", "name": "Nova", "text": "Hi",
//!   "pos": [1.0, -0.5, 2.25], "createdAt": 1700000000000 }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::MessageId;

/// A 3-component coordinate inside the guestbook's bounded volume.
///
/// Serializes as a plain `[x, y, z]` array to match the wire schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Position {
    /// Horizontal axis.
    pub x: f64,
    /// Vertical axis (up from the lunar surface).
    pub y: f64,
    /// Depth axis.
    pub z: f64,
}

impl Position {
    /// The origin of the enclosing volume.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Create a position from explicit components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx.mul_add(dx, dy.mul_add(dy, dz * dz)).sqrt()
    }

    /// Euclidean distance from the origin.
    pub fn length(self) -> f64 {
        self.distance_to(Self::ORIGIN)
    }
}

/// The current time floored to millisecond precision.
///
/// Message timestamps carry no more precision than the wire format's
/// epoch milliseconds, so a freshly created message compares equal to
/// itself after a save/load round-trip.
pub fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

impl From<[f64; 3]> for Position {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Position> for [f64; 3] {
    fn from(pos: Position) -> Self {
        [pos.x, pos.y, pos.z]
    }
}

/// A single guestbook entry: the sole persisted entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Message {
    /// Stable unique key, assigned at creation.
    pub id: MessageId,
    /// Display name of the author (placeholder when left blank).
    pub name: String,
    /// The message body. Always non-empty after trimming.
    pub text: String,
    /// Where the label floats, sampled once at creation.
    #[ts(type = "[number, number, number]")]
    pub pos: Position,
    /// Creation time, serialized as epoch milliseconds.
    #[serde(rename = "createdAt", with = "chrono::serde::ts_milliseconds")]
    #[ts(type = "number")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::{TimeZone, Timelike};

    use super::*;

    fn sample_message() -> Message {
        Message {
            id: MessageId::new(),
            name: "Nova".to_string(),
            text: "Hi".to_string(),
            pos: Position::new(1.0, -0.5, 2.25),
            created_at: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        }
    }

    #[test]
    fn position_distance() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-12);
        assert!((b.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn position_serializes_as_array() {
        let pos = Position::new(1.0, 2.0, 3.0);
        let json = serde_json::to_value(pos).unwrap();
        assert_eq!(json, serde_json::json!([1.0, 2.0, 3.0]));
        let back: Position = serde_json::from_value(json).unwrap();
        assert_eq!(back, pos);
    }

    #[test]
    fn message_wire_format() {
        let msg = sample_message();
        let json = serde_json::to_value(&msg).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("id"));
        assert_eq!(obj["name"], "Nova");
        assert_eq!(obj["text"], "Hi");
        assert_eq!(obj["pos"], serde_json::json!([1.0, -0.5, 2.25]));
        // createdAt is a bare epoch-milliseconds number, not a string.
        assert_eq!(obj["createdAt"], serde_json::json!(1_700_000_000_000_i64));
    }

    #[test]
    fn message_roundtrip() {
        let msg = sample_message();
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn now_millis_has_no_sub_millisecond_precision() {
        let now = now_millis();
        assert_eq!(now.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn freshly_stamped_message_roundtrips_exactly() {
        // A wall-clock timestamp taken through `now_millis` loses
        // nothing on the wire, so the full message round-trips to an
        // equal value.
        let msg = Message {
            created_at: now_millis(),
            ..sample_message()
        };
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn message_parses_external_document() {
        // A document the browser layer might have written.
        let raw = r#"{
            "id": "018f2d6e-7b9a-7000-8000-000000000000",
            "name": "Orion",
            "text": "Counting stars",
            "pos": [0.5, 3.0, -1.5],
            "createdAt": 1699999000000
        }"#;
        let msg: Message = serde_json::from_str(raw).unwrap();
        assert_eq!(msg.name, "Orion");
        assert!((msg.pos.y - 3.0).abs() < 1e-12);
        assert_eq!(msg.created_at.timestamp_millis(), 1_699_999_000_000);
    }
}
