mod error;
mod resolver;
mod types;

pub use error::CruiseConfigError;
pub use resolver::{cruise_day_date, cruise_day_for_date, resolve_cruise_day};
pub use types::{weekday_from_name, CruiseConfig, CruiseDay, CruiseDays, DaySelector};
