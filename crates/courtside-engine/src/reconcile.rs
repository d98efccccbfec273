use std::collections::HashMap;

use courtside_core::{
    DateOverride, OverridesByDate, SelectableSlot, SlotKey, SlotTemplateEntry, UnmatchedSlotPolicy,
};

/// Rebuild every existing date override against a fresh template.
///
/// Each date's list is replaced by one slot per template entry, in template
/// order, priced from the template. `selected` and `available` carry over
/// from the previous slot with the same [`SlotKey`]; an entry without one
/// gets `policy`'s default. Old slots whose range left the template are
/// dropped. Dates with no override stay absent.
///
/// Under the default [`UnmatchedSlotPolicy::Select`], changing the slot
/// duration matches no keys, so every date comes back fully selected.
#[must_use]
pub fn reconcile(
    template: &[SlotTemplateEntry],
    overrides: &OverridesByDate,
    policy: UnmatchedSlotPolicy,
) -> OverridesByDate {
    let reconciled: OverridesByDate = overrides
        .iter()
        .map(|(date, previous)| (*date, reconcile_date(template, previous, policy)))
        .collect();

    tracing::debug!(
        dates = reconciled.len(),
        template_slots = template.len(),
        %policy,
        "reconciled date overrides"
    );

    reconciled
}

/// Reconcile one date's slot list. See [`reconcile`].
#[must_use]
pub fn reconcile_date(
    template: &[SlotTemplateEntry],
    previous: &[SelectableSlot],
    policy: UnmatchedSlotPolicy,
) -> DateOverride {
    let lookup: HashMap<SlotKey, &SelectableSlot> =
        previous.iter().map(|slot| (slot.key(), slot)).collect();

    template
        .iter()
        .map(|entry| {
            let (selected, available) = lookup.get(&entry.key()).map_or(
                (policy.selects_new_slots(), true),
                |slot| (slot.selected, slot.available),
            );
            SelectableSlot::from_template(entry, selected, available)
        })
        .collect()
}
