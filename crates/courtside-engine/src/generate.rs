use courtside_core::{SlotTemplateEntry, WallClock};

use crate::normalize::NormalizedWindow;

/// Walk a normalized window in fixed steps and emit the generic slot template.
///
/// Every slot costs `base_price`. A trailing slot that would end past the
/// window is dropped, not clipped. Times are reported on the wall clock, so
/// slots after midnight read `00:00`, `01:00`, and so on.
#[must_use]
pub fn generate_template(window: &NormalizedWindow, base_price: f64) -> Vec<SlotTemplateEntry> {
    let duration = window.duration_minutes;
    let mut template = Vec::new();
    let mut cursor = window.start_minutes;

    while let Some(slot_end) = cursor
        .checked_add(duration)
        .filter(|end| *end <= window.effective_end_minutes)
    {
        template.push(SlotTemplateEntry {
            id: template.len(),
            start_time: WallClock::from_minutes(cursor),
            end_time: WallClock::from_minutes(slot_end),
            price: base_price,
        });
        cursor = slot_end;
    }

    if template.is_empty() {
        tracing::warn!(
            span_minutes = window.span_minutes(),
            duration_minutes = duration,
            "slot duration exceeds the operating window; template is empty"
        );
    } else {
        tracing::debug!(
            slots = template.len(),
            start_minutes = window.start_minutes,
            effective_end_minutes = window.effective_end_minutes,
            crosses_midnight = window.crosses_midnight(),
            "generated slot template"
        );
    }

    template
}

#[cfg(test)]
mod tests {
    use courtside_core::OperatingWindow;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::normalize::normalize;

    fn template(open: &str, close: &str, duration: i64) -> Vec<SlotTemplateEntry> {
        let window = OperatingWindow::parse(open, close, duration).unwrap();
        generate_template(&normalize(&window).unwrap(), 500.0)
    }

    fn labels(entries: &[SlotTemplateEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|entry| format!("{}-{}", entry.start_time, entry.end_time))
            .collect()
    }

    #[test]
    fn daytime_window_yields_seventeen_hourly_slots() {
        let entries = template("06:00", "23:00", 60);
        assert_eq!(entries.len(), 17);
        assert_eq!(labels(&entries[..1]), vec!["06:00-07:00"]);
        assert_eq!(labels(&entries[16..]), vec!["22:00-23:00"]);
    }

    #[test]
    fn overnight_window_wraps_past_midnight() {
        let entries = template("20:00", "02:00", 60);
        assert_eq!(
            labels(&entries),
            vec![
                "20:00-21:00",
                "21:00-22:00",
                "22:00-23:00",
                "23:00-00:00",
                "00:00-01:00",
                "01:00-02:00",
            ]
        );
    }

    #[test]
    fn midnight_to_midnight_covers_the_whole_day() {
        let entries = template("00:00", "00:00", 60);
        assert_eq!(entries.len(), 24);
        assert_eq!(labels(&entries[..1]), vec!["00:00-01:00"]);
        assert_eq!(labels(&entries[23..]), vec!["23:00-00:00"]);
    }

    #[rstest]
    #[case::ninety_minutes_in_seven_hours("06:00", "13:00", 90, 4)]
    #[case::half_hour_left_over("06:00", "07:30", 60, 1)]
    #[case::duration_longer_than_window("06:00", "07:00", 90, 0)]
    #[case::single_full_day_slot("08:00", "08:00", 1440, 1)]
    fn trailing_partial_slot_is_dropped(
        #[case] open: &str,
        #[case] close: &str,
        #[case] duration: i64,
        #[case] expected: usize,
    ) {
        let entries = template(open, close, duration);
        assert_eq!(entries.len(), expected);
        if let Some(last) = entries.last() {
            let window = OperatingWindow::parse(open, close, duration).unwrap();
            let normalized = normalize(&window).unwrap();
            let last_end = normalized.start_minutes
                + u32::try_from(entries.len()).unwrap() * normalized.duration_minutes;
            assert!(last_end <= normalized.effective_end_minutes);
            assert_eq!(last.end_time, WallClock::from_minutes(last_end));
        }
    }

    #[test]
    fn ids_are_positions_and_prices_are_the_base_price() {
        let entries = template("10:00", "14:00", 60);
        for (index, entry) in entries.iter().enumerate() {
            assert_eq!(entry.id, index);
            assert!((entry.price - 500.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let first = serde_json::to_string(&template("20:00", "02:00", 45)).unwrap();
        let second = serde_json::to_string(&template("20:00", "02:00", 45)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn huge_duration_does_not_overflow() {
        let window = NormalizedWindow {
            start_minutes: 1439,
            effective_end_minutes: 2879,
            duration_minutes: u32::MAX,
        };
        assert!(generate_template(&window, 1.0).is_empty());
    }
}
