//! Error types raised by the availability engine.
//!
//! The engine has exactly two failure categories: an operating window that
//! cannot be turned into a slot template, and a submission that fails
//! validation. Configuration and I/O errors live in their own crates.

use thiserror::Error;

/// Why an operating window was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    /// Slot duration was zero or negative.
    #[error("slot duration must be positive, got {0} minutes")]
    NonPositiveDuration(i64),

    /// Slot duration does not fit the minute arithmetic of a single day walk.
    #[error("slot duration of {0} minutes is out of range")]
    DurationOutOfRange(i64),

    /// A wall-clock time was not a valid `HH:MM` string.
    #[error("'{0}' is not a valid HH:MM time")]
    MalformedTime(String),
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The operating window cannot produce a slot template.
    #[error("Invalid operating window: {0}")]
    InvalidWindow(#[from] WindowError),

    /// Input failed a user-correctable check (e.g. nothing selected).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl EngineError {
    /// Message used when a submission carries no selected slot.
    pub const NO_SLOT_SELECTED: &str = "no slot selected";

    #[must_use]
    pub fn no_slot_selected() -> Self {
        Self::Validation(Self::NO_SLOT_SELECTED.to_string())
    }
}
