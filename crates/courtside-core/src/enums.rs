//! Engine policy enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! so they read naturally in TOML config and environment variables.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// UnmatchedSlotPolicy
// ---------------------------------------------------------------------------

/// What reconciliation does with a template slot that has no counterpart, by
/// `(startTime, endTime)`, in a date's previous slot list.
///
/// `Select` is the shipped behavior: newly introduced time ranges are offered
/// by default. A duration change therefore resets every date to fully
/// selected. `Deselect` leaves new ranges switched off instead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedSlotPolicy {
    #[default]
    Select,
    Deselect,
}

impl UnmatchedSlotPolicy {
    /// The `selected` flag given to an unmatched slot.
    #[must_use]
    pub const fn selects_new_slots(self) -> bool {
        matches!(self, Self::Select)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Deselect => "deselect",
        }
    }
}

impl fmt::Display for UnmatchedSlotPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
