use anyhow::bail;
use courtside_core::{OperatingWindow, SelectableSlot, SlotTemplateEntry, Submission, VenueDraft};
use schemars::schema_for;

use crate::cli::root_commands::SchemaArgs;

/// Names accepted by `courtside schema`.
pub const SCHEMA_NAMES: &[&str] = &[
    "venue_draft",
    "submission",
    "selectable_slot",
    "slot_template_entry",
    "operating_window",
];

/// Handle `courtside schema`. Always prints JSON regardless of `--format`.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    let schema = schema_by_name(&args.type_name)?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn schema_by_name(name: &str) -> anyhow::Result<serde_json::Value> {
    let schema = match name.replace('-', "_").as_str() {
        "venue_draft" => schema_for!(VenueDraft),
        "submission" => schema_for!(Submission),
        "selectable_slot" => schema_for!(SelectableSlot),
        "slot_template_entry" => schema_for!(SlotTemplateEntry),
        "operating_window" => schema_for!(OperatingWindow),
        _ => bail!(
            "unknown schema '{name}' (expected one of: {})",
            SCHEMA_NAMES.join(", ")
        ),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in SCHEMA_NAMES {
            let schema = schema_by_name(name).expect("schema should build");
            assert!(schema.is_object(), "{name} schema should be an object");
        }
    }

    #[test]
    fn hyphenated_names_are_accepted() {
        let schema = schema_by_name("venue-draft").unwrap();
        assert!(schema["properties"]["priorOverridesByDate"].is_object());
    }

    #[test]
    fn unknown_name_lists_alternatives() {
        let err = schema_by_name("booking").unwrap_err();
        assert!(err.to_string().contains("venue_draft"));
    }
}
