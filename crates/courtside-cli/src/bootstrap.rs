use std::path::Path;

use anyhow::Context;
use courtside_config::CourtsideConfig;

/// Load `./.env` (if any) and the layered configuration.
pub fn load_config() -> anyhow::Result<CourtsideConfig> {
    load_project_dotenv(Path::new("."))?;
    let config = CourtsideConfig::load().context("failed to load courtside configuration")?;
    tracing::debug!(
        policy = %config.engine.unmatched_policy,
        format = %config.general.format,
        "configuration loaded"
    );
    Ok(config)
}

/// A missing `.env` is fine; an unreadable or malformed one is an error.
fn load_project_dotenv(dir: &Path) -> anyhow::Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dotenv_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_project_dotenv(dir.path()).is_ok());
    }

    #[test]
    fn malformed_dotenv_is_reported_with_its_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "COURTSIDE_BOOTSTRAP_CHECK='unterminated\n").unwrap();

        let err = load_project_dotenv(dir.path()).unwrap_err();
        let rendered = format!("{err:#}");
        assert!(rendered.contains("failed to load dotenv file at"));
        assert!(rendered.contains(".env"));
    }
}
