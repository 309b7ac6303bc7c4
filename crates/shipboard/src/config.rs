use std::env;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use shipboard_core::cruise::{CruiseConfig, CruiseConfigError};
use shipboard_core::ics::DEFAULT_CALENDAR_NAME;

const DEFAULT_LENGTH_IN_DAYS: u32 = 7;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Embarkation time (default: midnight UTC today)
    pub cruise_start: DateTime<Utc>,
    /// Number of days in the sailing (default: 7)
    pub cruise_length_in_days: u32,
    /// Calendar name written into `.ics` downloads (default: "Shipboard")
    pub calendar_name: String,
    /// Seed the event store with demo events on startup (default: true)
    pub seed_demo_events: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CRUISE_START_DATE` - `YYYY-MM-DD` or RFC 3339 timestamp (default: today)
    /// - `CRUISE_LENGTH_DAYS` - Sailing length in days, at least 1 (default: 7)
    /// - `CRUISE_NAME` - Calendar name for `.ics` files (default: "Shipboard")
    /// - `SEED_DEMO_EVENTS` - `true`/`false` (default: true)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// Unparseable values fall back to their defaults with a warning.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let cruise_start = match var("CRUISE_START_DATE") {
            Some(value) => parse_start(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, "Invalid CRUISE_START_DATE, using today");
                today()
            }),
            None => today(),
        };

        let cruise_length_in_days = match var("CRUISE_LENGTH_DAYS") {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(days) if days >= 1 => days,
                _ => {
                    tracing::warn!(
                        value = %value,
                        default = DEFAULT_LENGTH_IN_DAYS,
                        "Invalid CRUISE_LENGTH_DAYS, using default"
                    );
                    DEFAULT_LENGTH_IN_DAYS
                }
            },
            None => DEFAULT_LENGTH_IN_DAYS,
        };

        let calendar_name = var("CRUISE_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CALENDAR_NAME.to_string());

        let seed_demo_events = var("SEED_DEMO_EVENTS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(true);

        Self {
            cruise_start,
            cruise_length_in_days,
            calendar_name,
            seed_demo_events,
        }
    }

    /// Builds the cruise configuration shared by all requests.
    pub fn cruise_config(&self) -> Result<CruiseConfig, CruiseConfigError> {
        CruiseConfig::from_start_date(self.cruise_start, self.cruise_length_in_days)
    }
}

fn parse_start(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
}

/// Midnight UTC of the current UTC date.
fn today() -> DateTime<Utc> {
    Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc()
}
