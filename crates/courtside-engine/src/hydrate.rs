use std::collections::{HashMap, HashSet};

use courtside_core::{DateOverride, OverridesByDate, SelectableSlot, SlotKey, SlotTemplateEntry};

/// Rebuild full per-date slot lists from stored documents.
///
/// Stored documents hold only what was submitted, so a template entry found
/// in a date's stored list keeps that slot's `price`, `available` and
/// `selected` (selected unless the document says otherwise), while an entry
/// missing from it comes back unselected at the template price. Stored slots
/// whose range the template no longer produces are pruned.
#[must_use]
pub fn hydrate_overrides(
    template: &[SlotTemplateEntry],
    stored: &OverridesByDate,
) -> OverridesByDate {
    let template_keys: HashSet<SlotKey> = template.iter().map(SlotTemplateEntry::key).collect();

    stored
        .iter()
        .map(|(date, slots)| {
            let pruned = slots
                .iter()
                .filter(|slot| !template_keys.contains(&slot.key()))
                .count();
            if pruned > 0 {
                tracing::debug!(%date, pruned, "pruned stored slots outside the current template");
            }
            (*date, hydrate_date(template, slots))
        })
        .collect()
}

fn hydrate_date(template: &[SlotTemplateEntry], stored: &[SelectableSlot]) -> DateOverride {
    let lookup: HashMap<SlotKey, &SelectableSlot> =
        stored.iter().map(|slot| (slot.key(), slot)).collect();

    template
        .iter()
        .map(|entry| match lookup.get(&entry.key()) {
            Some(slot) => SelectableSlot {
                price: slot.price,
                ..SelectableSlot::from_template(entry, slot.selected, slot.available)
            },
            None => SelectableSlot::from_template(entry, false, true),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use courtside_core::OperatingWindow;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::build_template;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 12, 24).unwrap()
    }

    #[test]
    fn stored_slots_are_selected_and_the_rest_are_not() {
        let template =
            build_template(&OperatingWindow::parse("18:00", "22:00", 60).unwrap(), 600.0).unwrap();
        let stored: OverridesByDate = serde_json::from_value(serde_json::json!({
            "2026-12-24": [
                {"time": "19:00", "endTime": "20:00", "price": 900, "available": false},
                {"startTime": "21:00", "endTime": "22:00", "price": 600},
                {"startTime": "03:00", "endTime": "04:00", "price": 600}
            ]
        }))
        .unwrap();

        let hydrated = hydrate_overrides(&template, &stored);
        let slots = &hydrated[&date()];

        assert_eq!(slots.len(), 4);
        assert_eq!(
            slots.iter().map(|slot| slot.selected).collect::<Vec<_>>(),
            vec![false, true, false, true]
        );
        assert!((slots[1].price - 900.0).abs() < f64::EPSILON);
        assert!(!slots[1].available);
        assert!((slots[0].price - 600.0).abs() < f64::EPSILON);
        assert!(slots.iter().all(|slot| slot.start_time.to_string() != "03:00"));
    }

    #[test]
    fn explicit_unselected_flag_is_honoured() {
        let template =
            build_template(&OperatingWindow::parse("18:00", "19:00", 60).unwrap(), 600.0).unwrap();
        let stored: OverridesByDate = serde_json::from_value(serde_json::json!({
            "2026-12-24": [{"startTime": "18:00", "endTime": "19:00", "price": 600, "selected": false}]
        }))
        .unwrap();

        let hydrated = hydrate_overrides(&template, &stored);
        assert!(!hydrated[&date()][0].selected);
    }
}
