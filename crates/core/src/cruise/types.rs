use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::error::CruiseConfigError;

/// Three-letter weekday labels, indexed from Sunday.
pub(crate) const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weekday number used when a weekday name is not recognised (Saturday).
pub(crate) const FALLBACK_WEEKDAY: u32 = 7;

/// Immutable description of the current sailing.
///
/// Weekdays are numbered 1 through 7 starting at Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CruiseConfig {
    start_date: DateTime<Utc>,
    start_day_of_week: u32,
    length_in_days: u32,
}

impl CruiseConfig {
    /// Creates a configuration, validating the weekday and length.
    pub fn new(
        start_date: DateTime<Utc>,
        start_day_of_week: u32,
        length_in_days: u32,
    ) -> Result<Self, CruiseConfigError> {
        if !(1..=7).contains(&start_day_of_week) {
            return Err(CruiseConfigError::InvalidStartDayOfWeek(start_day_of_week));
        }
        if length_in_days == 0 {
            return Err(CruiseConfigError::ZeroLength);
        }
        Ok(Self {
            start_date,
            start_day_of_week,
            length_in_days,
        })
    }

    /// Creates a configuration whose start weekday is taken from the start date.
    pub fn from_start_date(
        start_date: DateTime<Utc>,
        length_in_days: u32,
    ) -> Result<Self, CruiseConfigError> {
        let start_day_of_week = start_date.weekday().number_from_sunday();
        Self::new(start_date, start_day_of_week, length_in_days)
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn start_day_of_week(&self) -> u32 {
        self.start_day_of_week
    }

    pub fn length_in_days(&self) -> u32 {
        self.length_in_days
    }
}

/// How a request chose the cruise day it wants to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaySelector {
    /// A weekday name such as `"tue"`.
    WeekdayName(String),
    /// A 1-based cruise day, passed through without bounds checks.
    ExplicitCruiseDay(i64),
    /// Nothing was chosen; the current date decides.
    Unspecified,
}

impl DaySelector {
    /// Decodes the `day` query parameter.
    ///
    /// Missing or blank values select today, integers select a cruise day
    /// and anything else is treated as a weekday name.
    pub fn from_query(day: Option<&str>) -> Self {
        match day.map(str::trim) {
            None | Some("") => DaySelector::Unspecified,
            Some(value) => match value.parse::<i64>() {
                Ok(index) => DaySelector::ExplicitCruiseDay(index),
                Err(_) => DaySelector::WeekdayName(value.to_string()),
            },
        }
    }
}

/// Maps a weekday name to its number (Sunday = 1).
///
/// Matching ignores ASCII case. Unknown names fall back to Saturday.
pub fn weekday_from_name(name: &str) -> u32 {
    match name.trim().to_ascii_lowercase().as_str() {
        "sun" => 1,
        "mon" => 2,
        "tue" => 3,
        "wed" => 4,
        "thu" => 5,
        "fri" => 6,
        "sat" => 7,
        _ => FALLBACK_WEEKDAY,
    }
}

/// One selectable day of the cruise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CruiseDay {
    pub name: String,
    pub index: i64,
    pub is_active: bool,
}

/// The resolved cruise day together with every day of the sailing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CruiseDays {
    pub cruise_day: i64,
    pub days: Vec<CruiseDay>,
}

impl CruiseDays {
    /// Returns the day marked active, if the resolved index is within the cruise.
    pub fn active(&self) -> Option<&CruiseDay> {
        self.days.iter().find(|day| day.is_active)
    }
}
