use courtside_config::CourtsideConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: &Commands,
    config: &CourtsideConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Generate(args) => commands::generate::handle(args, config, flags),
        Commands::Reconcile(args) => commands::reconcile::handle(args, config, flags),
        Commands::Submit(args) => commands::submit::handle(args, config, flags),
        Commands::Schema(args) => commands::schema::handle(args),
    }
}
