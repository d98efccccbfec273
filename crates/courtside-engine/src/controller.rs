//! Session-scoped driver for the slot pipeline.
//!
//! An [`AvailabilityController`] owns one venue's draft for the lifetime of a
//! single editing session. Every input change runs `normalize → generate →
//! reconcile` once, explicitly, and only when the input actually changed.

use chrono::NaiveDate;
use courtside_core::{
    EngineError, OperatingWindow, OverridesByDate, SelectableSlot, SlotKey, SlotTemplateEntry,
    Submission, UnmatchedSlotPolicy, VenueAvailabilityConfig, VenueDraft, WallClock,
};

use crate::{filter_selected, generate_template, hydrate_overrides, normalize, reconcile};

#[derive(Debug, Clone)]
pub struct AvailabilityController {
    config: VenueAvailabilityConfig,
    template: Vec<SlotTemplateEntry>,
    policy: UnmatchedSlotPolicy,
}

impl AvailabilityController {
    /// Start a draft for a new venue. No date is configured yet.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidWindow`] when the window cannot be normalized.
    pub fn new(
        base_price: f64,
        window: OperatingWindow,
        policy: UnmatchedSlotPolicy,
    ) -> Result<Self, EngineError> {
        let template = generate_template(&normalize(&window)?, base_price);
        Ok(Self {
            config: VenueAvailabilityConfig {
                base_price,
                operating_window: window,
                overrides_by_date: OverridesByDate::new(),
            },
            template,
            policy,
        })
    }

    /// Start a draft from form input.
    ///
    /// Stored date overrides are hydrated against the draft's template and
    /// then reconciled, so every slot is priced at the draft's base price
    /// while stored selection and availability are kept.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidWindow`] when the window cannot be normalized.
    pub fn from_draft(draft: &VenueDraft, policy: UnmatchedSlotPolicy) -> Result<Self, EngineError> {
        let mut controller = Self::new(draft.base_price, draft.operating_window(), policy)?;
        let hydrated = hydrate_overrides(&controller.template, &draft.prior_overrides_by_date);
        tracing::debug!(dates = hydrated.len(), "hydrated stored date overrides");
        controller.config.overrides_by_date = reconcile(&controller.template, &hydrated, policy);
        Ok(controller)
    }

    #[must_use]
    pub const fn config(&self) -> &VenueAvailabilityConfig {
        &self.config
    }

    #[must_use]
    pub fn into_config(self) -> VenueAvailabilityConfig {
        self.config
    }

    /// The generic, un-dated slot template for the current inputs.
    #[must_use]
    pub fn template(&self) -> &[SlotTemplateEntry] {
        &self.template
    }

    #[must_use]
    pub const fn overrides(&self) -> &OverridesByDate {
        &self.config.overrides_by_date
    }

    #[must_use]
    pub const fn policy(&self) -> UnmatchedSlotPolicy {
        self.policy
    }

    /// Returns `Ok(true)` when the template was regenerated.
    ///
    /// # Errors
    ///
    /// See [`Self::set_operating_window`].
    pub fn set_base_price(&mut self, base_price: f64) -> Result<bool, EngineError> {
        self.apply(base_price, self.config.operating_window)
    }

    /// Replace the operating window. Returns `Ok(true)` when regenerated.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidWindow`] when the window cannot be
    /// normalized; the previous state is left untouched.
    pub fn set_operating_window(&mut self, window: OperatingWindow) -> Result<bool, EngineError> {
        self.apply(self.config.base_price, window)
    }

    /// # Errors
    ///
    /// See [`Self::set_operating_window`].
    pub fn set_hours(
        &mut self,
        open_time: WallClock,
        close_time: WallClock,
    ) -> Result<bool, EngineError> {
        let window = OperatingWindow {
            open_time,
            close_time,
            ..self.config.operating_window
        };
        self.apply(self.config.base_price, window)
    }

    /// # Errors
    ///
    /// See [`Self::set_operating_window`].
    pub fn set_slot_duration(&mut self, minutes: i64) -> Result<bool, EngineError> {
        let window = OperatingWindow {
            slot_duration_minutes: minutes,
            ..self.config.operating_window
        };
        self.apply(self.config.base_price, window)
    }

    fn apply(&mut self, base_price: f64, window: OperatingWindow) -> Result<bool, EngineError> {
        let unchanged = window == self.config.operating_window
            && base_price.to_bits() == self.config.base_price.to_bits();
        if unchanged {
            return Ok(false);
        }

        let template = generate_template(&normalize(&window)?, base_price);
        let overrides = reconcile(&template, &self.config.overrides_by_date, self.policy);

        self.template = template;
        self.config.base_price = base_price;
        self.config.operating_window = window;
        self.config.overrides_by_date = overrides;
        Ok(true)
    }

    /// Configure a date from the current template, every slot selected.
    ///
    /// Returns `false` if the date already had an override, which is kept.
    pub fn open_date(&mut self, date: NaiveDate) -> bool {
        if self.config.overrides_by_date.contains_key(&date) {
            return false;
        }
        let slots = self
            .template
            .iter()
            .map(|entry| SelectableSlot::from_template(entry, true, true))
            .collect();
        self.config.overrides_by_date.insert(date, slots);
        true
    }

    /// Drop a date's override. Returns `false` if there was none.
    pub fn close_date(&mut self, date: NaiveDate) -> bool {
        self.config.overrides_by_date.remove(&date).is_some()
    }

    /// Flip `selected` on one slot. Returns `false` if date or slot is unknown.
    #[must_use]
    pub fn toggle_slot(&mut self, date: NaiveDate, key: SlotKey) -> bool {
        self.with_slot(date, key, |slot| slot.selected = !slot.selected)
    }

    /// Set a date-specific price for one slot.
    ///
    /// The price lasts until the next regeneration reprices the date.
    /// Returns `false` if date or slot is unknown.
    #[must_use]
    pub fn set_slot_price(&mut self, date: NaiveDate, key: SlotKey, price: f64) -> bool {
        self.with_slot(date, key, |slot| slot.price = price)
    }

    /// Mark one slot bookable or not. Returns `false` if date or slot is unknown.
    #[must_use]
    pub fn set_slot_available(&mut self, date: NaiveDate, key: SlotKey, available: bool) -> bool {
        self.with_slot(date, key, |slot| slot.available = available)
    }

    fn with_slot(
        &mut self,
        date: NaiveDate,
        key: SlotKey,
        edit: impl FnOnce(&mut SelectableSlot),
    ) -> bool {
        let slot = self
            .config
            .overrides_by_date
            .get_mut(&date)
            .and_then(|slots| slots.iter_mut().find(|slot| slot.key() == key));
        match slot {
            Some(slot) => {
                edit(slot);
                true
            }
            None => false,
        }
    }

    /// Produce what gets handed to storage.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] when no slot is selected on any date.
    pub fn submit(&self) -> Result<Submission, EngineError> {
        let slots_by_date = filter_selected(&self.config.overrides_by_date)?;
        Ok(Submission {
            slots_by_date,
            template: self.template.clone(),
        })
    }
}
