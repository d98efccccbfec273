//! Venue availability aggregate plus the engine's input and output contracts.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clock::WallClock;
use crate::errors::EngineError;
use crate::slot::{SelectableSlot, SlotTemplateEntry};

/// Vendor-curated slots for one calendar date, in template order.
pub type DateOverride = Vec<SelectableSlot>;

/// Date overrides keyed by calendar date. Ordered so output is deterministic.
pub type OverridesByDate = BTreeMap<NaiveDate, DateOverride>;

/// The recurring daily schedule of a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperatingWindow {
    #[schemars(with = "String")]
    pub open_time: WallClock,
    #[schemars(with = "String")]
    pub close_time: WallClock,
    /// Kept signed so a bad form value reaches the normalizer and is rejected
    /// there instead of failing deserialization.
    pub slot_duration_minutes: i64,
}

impl OperatingWindow {
    /// Parse a window from raw form strings.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidWindow`] when either time is not `HH:MM`.
    /// The duration is validated later by the normalizer.
    pub fn parse(
        open_time: &str,
        close_time: &str,
        slot_duration_minutes: i64,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            open_time: open_time.parse()?,
            close_time: close_time.parse()?,
            slot_duration_minutes,
        })
    }
}

/// One venue's editable availability draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VenueAvailabilityConfig {
    pub base_price: f64,
    pub operating_window: OperatingWindow,
    #[serde(default)]
    pub overrides_by_date: OverridesByDate,
}

/// Form input handed to the engine.
///
/// `prior_overrides_by_date` is populated only when editing an existing venue
/// and holds whatever slot documents the storage collaborator returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VenueDraft {
    pub base_price: f64,
    #[schemars(with = "String")]
    pub open_time: WallClock,
    #[schemars(with = "String")]
    pub close_time: WallClock,
    pub slot_duration_minutes: i64,
    #[serde(default)]
    pub prior_overrides_by_date: OverridesByDate,
}

impl VenueDraft {
    #[must_use]
    pub const fn operating_window(&self) -> OperatingWindow {
        OperatingWindow {
            open_time: self.open_time,
            close_time: self.close_time,
            slot_duration_minutes: self.slot_duration_minutes,
        }
    }
}

/// What the engine hands to the storage collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Selected slots only; dates without any selected slot are absent.
    pub slots_by_date: OverridesByDate,
    /// The generic, un-dated baseline template.
    pub template: Vec<SlotTemplateEntry>,
}
