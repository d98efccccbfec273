use courtside_core::{EngineError, OverridesByDate};

/// Keep only selected slots, dropping dates left with none.
///
/// # Errors
///
/// Returns [`EngineError::Validation`] ("no slot selected") when no date has a
/// selected slot. The caller must not persist anything in that case.
pub fn filter_selected(overrides: &OverridesByDate) -> Result<OverridesByDate, EngineError> {
    let selected: OverridesByDate = overrides
        .iter()
        .filter_map(|(date, slots)| {
            let kept: Vec<_> = slots.iter().filter(|slot| slot.selected).cloned().collect();
            (!kept.is_empty()).then_some((*date, kept))
        })
        .collect();

    if selected.is_empty() {
        return Err(EngineError::no_slot_selected());
    }

    tracing::debug!(
        dates = selected.len(),
        dropped_dates = overrides.len() - selected.len(),
        slots = selected.values().map(Vec::len).sum::<usize>(),
        "filtered submission to selected slots"
    );

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use courtside_core::{SelectableSlot, WallClock};
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    fn slot(start: u32, selected: bool) -> SelectableSlot {
        SelectableSlot {
            start_time: WallClock::from_minutes(start * 60),
            end_time: WallClock::from_minutes((start + 1) * 60),
            price: 300.0,
            available: true,
            selected,
        }
    }

    #[test]
    fn nothing_selected_anywhere_is_a_validation_error() {
        let overrides = OverridesByDate::from([
            (date(20), vec![slot(6, false), slot(7, false)]),
            (date(21), vec![slot(6, false)]),
        ]);
        assert_eq!(
            filter_selected(&overrides),
            Err(EngineError::Validation("no slot selected".into()))
        );
    }

    #[test]
    fn empty_overrides_are_a_validation_error() {
        assert!(matches!(
            filter_selected(&OverridesByDate::new()),
            Err(EngineError::Validation(_))
        ));
    }

    #[test]
    fn keeps_selected_slots_and_omits_empty_dates() {
        let overrides = OverridesByDate::from([
            (date(20), vec![slot(6, false), slot(7, true), slot(8, false)]),
            (date(21), vec![slot(6, false)]),
            (date(22), vec![]),
        ]);

        let filtered = filter_selected(&overrides).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[&date(20)], vec![slot(7, true)]);
        assert!(!filtered.contains_key(&date(21)));
        assert!(!filtered.contains_key(&date(22)));
    }
}
