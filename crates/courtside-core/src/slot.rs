//! Slot identity and the two slot shapes.
//!
//! A [`SlotTemplateEntry`] is generated, never stored. A [`SelectableSlot`] is
//! what a date override holds and what gets persisted. Both are identified by
//! their [`SlotKey`], never by `id` or by a formatted string.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clock::WallClock;

const fn default_true() -> bool {
    true
}

/// Structural identity of a slot: wall-clock start and end minutes.
///
/// Minutes are wall-clock (`0..1440`), so a slot running 23:00-00:00 has
/// `end_minutes == 0`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct SlotKey {
    pub start_minutes: u32,
    pub end_minutes: u32,
}

impl SlotKey {
    #[must_use]
    pub const fn new(start: WallClock, end: WallClock) -> Self {
        Self {
            start_minutes: start.minutes(),
            end_minutes: end.minutes(),
        }
    }

    #[must_use]
    pub const fn start(self) -> WallClock {
        WallClock::from_minutes(self.start_minutes)
    }

    #[must_use]
    pub const fn end(self) -> WallClock {
        WallClock::from_minutes(self.end_minutes)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start(), self.end())
    }
}

/// One entry of the generic, date-independent slot template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotTemplateEntry {
    /// Zero-based position within the template. Not an identity.
    pub id: usize,
    #[schemars(with = "String")]
    pub start_time: WallClock,
    #[schemars(with = "String")]
    pub end_time: WallClock,
    pub price: f64,
}

impl SlotTemplateEntry {
    #[must_use]
    pub const fn key(&self) -> SlotKey {
        SlotKey::new(self.start_time, self.end_time)
    }
}

/// A slot in a date override.
///
/// Stored documents written by older clients use `time` instead of
/// `startTime`; both are accepted. Missing `available`/`selected` flags read
/// as `true`, since only submitted (selected) slots are ever persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectableSlot {
    #[serde(alias = "time")]
    #[schemars(with = "String")]
    pub start_time: WallClock,
    #[schemars(with = "String")]
    pub end_time: WallClock,
    pub price: f64,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default = "default_true")]
    pub selected: bool,
}

impl SelectableSlot {
    /// A slot built from a template entry at the template's price.
    #[must_use]
    pub const fn from_template(entry: &SlotTemplateEntry, selected: bool, available: bool) -> Self {
        Self {
            start_time: entry.start_time,
            end_time: entry.end_time,
            price: entry.price,
            available,
            selected,
        }
    }

    #[must_use]
    pub const fn key(&self) -> SlotKey {
        SlotKey::new(self.start_time, self.end_time)
    }
}
