use courtside_core::{EngineError, MINUTES_PER_DAY, OperatingWindow, WindowError};

/// An operating window on a linear minute timeline.
///
/// `effective_end_minutes` may exceed 1440 when the window runs past
/// midnight; it never exceeds `start_minutes + 1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedWindow {
    pub start_minutes: u32,
    pub effective_end_minutes: u32,
    pub duration_minutes: u32,
}

impl NormalizedWindow {
    /// Length of the window in minutes, `1..=1440`.
    #[must_use]
    pub const fn span_minutes(&self) -> u32 {
        self.effective_end_minutes - self.start_minutes
    }

    /// Whether the window continues into the next calendar day.
    #[must_use]
    pub const fn crosses_midnight(&self) -> bool {
        self.effective_end_minutes > MINUTES_PER_DAY
    }
}

/// Convert a wall-clock window into a linear range.
///
/// A close time at or before the open time is read as the next day, so
/// `20:00`–`02:00` ends at minute 1560 and `open == close` is a full 24 hours.
///
/// # Errors
///
/// Returns [`EngineError::InvalidWindow`] when the duration is zero, negative,
/// or does not fit in `u32`.
pub fn normalize(window: &OperatingWindow) -> Result<NormalizedWindow, EngineError> {
    let duration = window.slot_duration_minutes;
    if duration <= 0 {
        return Err(WindowError::NonPositiveDuration(duration).into());
    }
    let duration_minutes =
        u32::try_from(duration).map_err(|_| WindowError::DurationOutOfRange(duration))?;

    let start_minutes = window.open_time.minutes();
    let mut effective_end_minutes = window.close_time.minutes();
    if effective_end_minutes <= start_minutes {
        effective_end_minutes += MINUTES_PER_DAY;
    }

    Ok(NormalizedWindow {
        start_minutes,
        effective_end_minutes,
        duration_minutes,
    })
}
