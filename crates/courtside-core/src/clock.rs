//! Wall-clock `HH:MM` times.
//!
//! A [`WallClock`] is a minute of the day in `0..1440`. It parses from and
//! serializes to a zero-padded `HH:MM` string, which is the format the storage
//! collaborator uses for `startTime`/`endTime` fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::errors::WindowError;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A minute of the day, `00:00` through `23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct WallClock(u16);

impl WallClock {
    pub const MIDNIGHT: Self = Self(0);

    /// Build from an absolute minute count, wrapping past midnight.
    ///
    /// `1500` (25:00 on a linear timeline) becomes `01:00`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_minutes(minutes: u32) -> Self {
        // Always < 1440 after the modulo, so it fits in u16.
        Self((minutes % MINUTES_PER_DAY) as u16)
    }

    /// Build from an hour and minute pair. Returns `None` when out of range.
    #[must_use]
    pub const fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self::from_minutes(hour * 60 + minute))
    }

    /// Minutes since midnight, `0..1440`.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0 as u32
    }

    #[must_use]
    pub const fn hour(self) -> u32 {
        self.minutes() / 60
    }

    #[must_use]
    pub const fn minute(self) -> u32 {
        self.minutes() % 60
    }
}

impl FromStr for WallClock {
    type Err = WindowError;

    /// Accepts `HH:MM` and `H:MM`. `24:00` is read as midnight.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || WindowError::MalformedTime(value.to_string());
        let (hour, minute) = value.trim().split_once(':').ok_or_else(malformed)?;

        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(hour) || hour.len() > 2 || !is_digits(minute) || minute.len() != 2 {
            return Err(malformed());
        }

        let hour: u32 = hour.parse().map_err(|_| malformed())?;
        let minute: u32 = minute.parse().map_err(|_| malformed())?;

        if hour == 24 && minute == 0 {
            return Ok(Self::MIDNIGHT);
        }
        Self::from_hm(hour, minute).ok_or_else(malformed)
    }
}

impl TryFrom<&str> for WallClock {
    type Error = WindowError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for WallClock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WallClock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
