use thiserror::Error;

/// Errors that can occur when building a cruise configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CruiseConfigError {
    #[error("Start day of week must be between 1 (Sunday) and 7 (Saturday), got {0}")]
    InvalidStartDayOfWeek(u32),
    #[error("Cruise length must be at least one day")]
    ZeroLength,
}
