//! Error types for datepick-core operations.

use thiserror::Error;

/// Caller-contract violations detected at the engine boundary.
///
/// Policy-driven outcomes (a range completion that would cross a disabled day)
/// are not errors; the selection engine aborts those transitions itself.
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid weekday: {0} (expected 0 = Sunday through 6 = Saturday)")]
    InvalidWeekday(u8),

    #[error("Invalid month: {0} (expected 1 through 12)")]
    InvalidMonth(u32),

    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Period change is disabled for this view")]
    PeriodChangeDisabled,

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PickerError>;
