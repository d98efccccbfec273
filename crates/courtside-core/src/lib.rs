//! # courtside-core
//!
//! Core types and error types for the Courtside venue availability engine.
//!
//! This crate provides the foundational types shared across all Courtside crates:
//! - `WallClock` times with strict `HH:MM` parsing and formatting
//! - Typed slot identity (`SlotKey`) and the template/selectable slot structs
//! - The venue draft aggregate, the input contract, and the submission output
//! - The reconcile policy enum
//! - The two engine error categories

pub mod clock;
pub mod enums;
pub mod errors;
pub mod slot;
pub mod venue;

pub use clock::{MINUTES_PER_DAY, WallClock};
pub use enums::UnmatchedSlotPolicy;
pub use errors::{EngineError, WindowError};
pub use slot::{SelectableSlot, SlotKey, SlotTemplateEntry};
pub use venue::{
    DateOverride, OperatingWindow, OverridesByDate, Submission, VenueAvailabilityConfig,
    VenueDraft,
};
