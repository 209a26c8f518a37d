//! Domain error types

use thiserror::Error;

/// Error when a weekday index falls outside 0..=6
#[derive(Debug, Clone, Error)]
#[error("No weekday name for index {index}. Valid indices are 0 (Lourdi) through 6 (Mitanche)")]
pub struct InvalidWeekdayError {
    pub index: u32,
}

/// Error when a (month, day) pair has no calendar entry
#[derive(Debug, Clone, Error)]
#[error("No calendar entry for month {month}, day {day}")]
pub struct NoEntryError {
    pub month: u32,
    pub day: u32,
}

/// Error when composing the daily announcement
#[derive(Debug, Clone, Error)]
pub enum AnnounceError {
    #[error("Unexpected day of week: {0}")]
    Weekday(#[from] InvalidWeekdayError),

    #[error("Daily data not found: {0}")]
    Calendar(#[from] NoEntryError),
}
