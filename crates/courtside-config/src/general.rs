//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Output formats the CLI understands.
pub const OUTPUT_FORMATS: &[&str] = &["json", "table", "raw"];

fn default_format() -> String {
    "json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl GeneralConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if OUTPUT_FORMATS.contains(&self.format.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::invalid(
                "general.format",
                format!("expected one of {}", OUTPUT_FORMATS.join(", ")),
            ))
        }
    }
}
