use anyhow::Context;
use courtside_config::CourtsideConfig;
use courtside_core::Submission;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DraftArgs;
use crate::commands::shared::draft::open_draft;
use crate::output::output;

/// Handle `courtside submit`.
pub fn handle(args: &DraftArgs, config: &CourtsideConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let submission = run(args, config)?;
    output(&submission, flags.format)
}

fn run(args: &DraftArgs, config: &CourtsideConfig) -> anyhow::Result<Submission> {
    let controller = open_draft(&args.draft, args.policy.as_deref(), config)?;
    controller
        .submit()
        .with_context(|| format!("venue draft {} cannot be submitted", args.draft.display()))
}
