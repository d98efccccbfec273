//! # courtside-engine
//!
//! The venue availability slot engine, as a pure pipeline:
//!
//! ```text
//! normalize → generate → reconcile → filter
//! ```
//!
//! - [`normalize`] turns an [`OperatingWindow`] into a linear minute range,
//!   resolving overnight wraparound.
//! - [`generate_template`] walks that range in fixed steps.
//! - [`reconcile`] merges a fresh template into existing date overrides,
//!   keeping `selected` wherever slot identity survives.
//! - [`filter_selected`] reduces overrides to what gets persisted.
//!
//! [`hydrate_overrides`] rebuilds full per-date lists from stored documents,
//! and [`AvailabilityController`] runs the pipeline for one editing session.
//!
//! Everything here is synchronous and side-effect free apart from `tracing`
//! events.
//!
//! ```
//! use courtside_core::OperatingWindow;
//! use courtside_engine::build_template;
//!
//! let window = OperatingWindow::parse("20:00", "02:00", 60).unwrap();
//! let template = build_template(&window, 500.0).unwrap();
//! assert_eq!(template.len(), 6);
//! assert_eq!(template[3].end_time.to_string(), "00:00");
//! ```

mod controller;
mod generate;
mod hydrate;
mod normalize;
mod reconcile;
mod submit;

pub use controller::AvailabilityController;
pub use generate::generate_template;
pub use hydrate::hydrate_overrides;
pub use normalize::{NormalizedWindow, normalize};
pub use reconcile::{reconcile, reconcile_date};
pub use submit::filter_selected;

use courtside_core::{EngineError, OperatingWindow, SlotTemplateEntry};

/// Normalize and generate in one step.
///
/// # Errors
///
/// Returns [`EngineError::InvalidWindow`] when the slot duration is not positive.
pub fn build_template(
    window: &OperatingWindow,
    base_price: f64,
) -> Result<Vec<SlotTemplateEntry>, EngineError> {
    let normalized = normalize(window)?;
    Ok(generate_template(&normalized, base_price))
}
