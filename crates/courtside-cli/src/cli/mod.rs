use clap::{Parser, ValueEnum};
use courtside_config::CourtsideConfig;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `courtside` binary.
#[derive(Debug, Parser)]
#[command(
    name = "courtside",
    version,
    about = "Courtside - venue availability slot engine"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve global flags, falling back to config where a flag is absent.
    pub fn global_flags(&self, config: &CourtsideConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.general.format, true).map_err(|error| {
                anyhow::anyhow!("invalid general.format '{}': {error}", config.general.format)
            })?,
        };
        Ok(GlobalFlags { format })
    }
}
