use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the generic slot template for an operating window.
    Generate(GenerateArgs),
    /// Hydrate and reconcile a venue draft; print every date's slots.
    Reconcile(DraftArgs),
    /// Reconcile a venue draft and print only what would be stored.
    Submit(DraftArgs),
    /// Print the JSON schema of an exchanged type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Opening time, HH:MM (defaults to `defaults.open_time`).
    #[arg(long)]
    pub open: Option<String>,

    /// Closing time, HH:MM; at or before opening means next day.
    #[arg(long)]
    pub close: Option<String>,

    /// Slot duration in minutes.
    #[arg(long, allow_negative_numbers = true)]
    pub duration: Option<i64>,

    /// Base price applied to every slot.
    #[arg(long)]
    pub price: Option<f64>,
}

#[derive(Clone, Debug, Args)]
pub struct DraftArgs {
    /// Path to a venue draft JSON file.
    pub draft: PathBuf,

    /// Override `engine.unmatched_policy` (select, deselect).
    #[arg(long)]
    pub policy: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. `venue_draft`, `submission`.
    pub type_name: String,
}
