use anyhow::Context;
use courtside_config::CourtsideConfig;
use courtside_core::{OperatingWindow, SlotTemplateEntry};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::output::output;

/// Handle `courtside generate`.
pub fn handle(
    args: &GenerateArgs,
    config: &CourtsideConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let template = run(args, config)?;
    output(&template, flags.format)
}

fn run(args: &GenerateArgs, config: &CourtsideConfig) -> anyhow::Result<Vec<SlotTemplateEntry>> {
    let defaults = &config.defaults;
    let window = OperatingWindow::parse(
        args.open.as_deref().unwrap_or(&defaults.open_time),
        args.close.as_deref().unwrap_or(&defaults.close_time),
        args.duration.unwrap_or(defaults.slot_duration_minutes),
    )?;
    let price = args.price.unwrap_or(defaults.base_price);

    courtside_engine::build_template(&window, price).with_context(|| {
        format!(
            "cannot generate slots for {}-{} every {} minutes",
            window.open_time, window.close_time, window.slot_duration_minutes
        )
    })
}

#[cfg(test)]
mod tests {
    use courtside_config::CourtsideConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(open: Option<&str>, close: Option<&str>, duration: Option<i64>) -> GenerateArgs {
        GenerateArgs {
            open: open.map(str::to_string),
            close: close.map(str::to_string),
            duration,
            price: Some(500.0),
        }
    }

    #[test]
    fn omitted_flags_fall_back_to_config_defaults() {
        let template = run(&args(None, None, None), &CourtsideConfig::default()).unwrap();
        assert_eq!(template.len(), 17);
        assert_eq!(template[0].start_time.to_string(), "06:00");
    }

    #[test]
    fn flags_override_defaults() {
        let template = run(
            &args(Some("20:00"), Some("02:00"), Some(60)),
            &CourtsideConfig::default(),
        )
        .unwrap();
        assert_eq!(template.len(), 6);
        assert_eq!(template[5].end_time.to_string(), "02:00");
    }

    #[test]
    fn zero_duration_fails_with_window_context() {
        let err = run(&args(None, None, Some(0)), &CourtsideConfig::default()).unwrap_err();
        let rendered = format!("{err:#}");
        assert!(rendered.contains("cannot generate slots"));
        assert!(rendered.contains("slot duration must be positive"));
    }

    #[test]
    fn malformed_time_is_rejected() {
        let err = run(&args(Some("6pm"), None, None), &CourtsideConfig::default()).unwrap_err();
        assert!(err.to_string().contains("'6pm' is not a valid HH:MM time"));
    }
}
