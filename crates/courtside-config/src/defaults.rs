//! Fallback venue inputs, used by the CLI when a flag is omitted.

use courtside_core::{OperatingWindow, WallClock};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_open_time() -> String {
    "06:00".to_string()
}

fn default_close_time() -> String {
    "23:00".to_string()
}

const fn default_slot_duration() -> i64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_open_time")]
    pub open_time: String,

    #[serde(default = "default_close_time")]
    pub close_time: String,

    #[serde(default = "default_slot_duration")]
    pub slot_duration_minutes: i64,

    #[serde(default)]
    pub base_price: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            open_time: default_open_time(),
            close_time: default_close_time(),
            slot_duration_minutes: default_slot_duration(),
            base_price: 0.0,
        }
    }
}

impl DefaultsConfig {
    /// The configured default window.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a time is malformed or the
    /// duration is not positive.
    pub fn window(&self) -> Result<OperatingWindow, ConfigError> {
        if self.slot_duration_minutes <= 0 {
            return Err(ConfigError::invalid(
                "defaults.slot_duration_minutes",
                format!("must be positive, got {}", self.slot_duration_minutes),
            ));
        }
        Ok(OperatingWindow {
            open_time: parse_time("defaults.open_time", &self.open_time)?,
            close_time: parse_time("defaults.close_time", &self.close_time)?,
            slot_duration_minutes: self.slot_duration_minutes,
        })
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        self.window()?;
        if !self.base_price.is_finite() || self.base_price < 0.0 {
            return Err(ConfigError::invalid(
                "defaults.base_price",
                format!("must be a non-negative number, got {}", self.base_price),
            ));
        }
        Ok(())
    }
}

fn parse_time(field: &str, value: &str) -> Result<WallClock, ConfigError> {
    value
        .parse()
        .map_err(|error: courtside_core::WindowError| ConfigError::invalid(field, error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DefaultsConfig::default();
        let window = config.window().unwrap();
        assert_eq!(window.open_time.to_string(), "06:00");
        assert_eq!(window.close_time.to_string(), "23:00");
        assert_eq!(window.slot_duration_minutes, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let cases = [
            (
                DefaultsConfig {
                    slot_duration_minutes: 0,
                    ..DefaultsConfig::default()
                },
                "defaults.slot_duration_minutes",
            ),
            (
                DefaultsConfig {
                    close_time: "25:00".into(),
                    ..DefaultsConfig::default()
                },
                "defaults.close_time",
            ),
            (
                DefaultsConfig {
                    base_price: -1.0,
                    ..DefaultsConfig::default()
                },
                "defaults.base_price",
            ),
        ];

        for (config, expected) in cases {
            match config.validate() {
                Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected invalid {expected}, got {other:?}"),
            }
        }
    }
}
