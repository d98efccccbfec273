use std::path::Path;

use anyhow::Context;
use courtside_config::CourtsideConfig;
use courtside_core::{UnmatchedSlotPolicy, VenueDraft};
use courtside_engine::AvailabilityController;

use super::parse::parse_enum;

/// Read a venue draft JSON file.
pub fn read_draft(path: &Path) -> anyhow::Result<VenueDraft> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read draft file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse venue draft {}", path.display()))
}

/// Policy precedence: command flag -> config.
pub fn effective_policy(
    flag: Option<&str>,
    config: &CourtsideConfig,
) -> anyhow::Result<UnmatchedSlotPolicy> {
    flag.map_or(Ok(config.engine.unmatched_policy), |raw| {
        parse_enum(raw, "policy")
    })
}

/// Build a controller for a draft file, hydrating stored overrides.
pub fn open_draft(
    path: &Path,
    policy_flag: Option<&str>,
    config: &CourtsideConfig,
) -> anyhow::Result<AvailabilityController> {
    let draft = read_draft(path)?;
    let policy = effective_policy(policy_flag, config)?;
    let controller = AvailabilityController::from_draft(&draft, policy)
        .with_context(|| format!("venue draft {} has an invalid window", path.display()))?;
    tracing::debug!(
        draft = %path.display(),
        template_slots = controller.template().len(),
        dates = controller.overrides().len(),
        %policy,
        "opened venue draft"
    );
    Ok(controller)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use courtside_config::CourtsideConfig;
    use courtside_core::UnmatchedSlotPolicy;

    use super::*;

    #[test]
    fn flag_takes_precedence_over_config() {
        let config = CourtsideConfig::default();
        assert_eq!(
            effective_policy(Some("deselect"), &config).unwrap(),
            UnmatchedSlotPolicy::Deselect
        );
        assert_eq!(
            effective_policy(None, &config).unwrap(),
            UnmatchedSlotPolicy::Select
        );
    }

    #[test]
    fn unreadable_draft_reports_path() {
        let err = read_draft(Path::new("/nonexistent/draft.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/draft.json"));
    }

    #[test]
    fn malformed_draft_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"basePrice": 1, "openTime": "nine"}}"#).unwrap();

        let err = read_draft(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse venue draft"));
    }
}
