//! Engine behavior configuration.

use courtside_core::UnmatchedSlotPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Whether slots with no previous counterpart start selected
    /// (`select`, the default) or not (`deselect`).
    #[serde(default)]
    pub unmatched_policy: UnmatchedSlotPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_new_slots() {
        let config = EngineConfig::default();
        assert_eq!(config.unmatched_policy, UnmatchedSlotPolicy::Select);
    }
}
