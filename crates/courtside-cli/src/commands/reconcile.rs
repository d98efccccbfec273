use courtside_config::CourtsideConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DraftArgs;
use crate::commands::shared::draft::open_draft;
use crate::output::output;

/// Handle `courtside reconcile`.
pub fn handle(args: &DraftArgs, config: &CourtsideConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let controller = open_draft(&args.draft, args.policy.as_deref(), config)?;
    output(controller.overrides(), flags.format)
}
