//! Mapping between weekdays, calendar dates and cruise days.
//!
//! Cruise day 1 is embarkation day. Weekday-based selection only ever
//! yields days 1 through 7, so on longer sailings the second occurrence of
//! a weekday cannot be reached by name; use an explicit cruise day instead.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone};

use super::types::{
    weekday_from_name, CruiseConfig, CruiseDay, CruiseDays, DaySelector, WEEKDAY_LABELS,
};

/// Resolves the selected cruise day and lists every day of the sailing.
///
/// `now` is only consulted for [`DaySelector::Unspecified`], using the
/// weekday in `now`'s own time zone.
pub fn resolve_cruise_day<Tz: TimeZone>(
    selector: &DaySelector,
    config: &CruiseConfig,
    now: &DateTime<Tz>,
) -> CruiseDays {
    let cruise_day = match selector {
        DaySelector::WeekdayName(name) => index_for_weekday(weekday_from_name(name), config),
        DaySelector::ExplicitCruiseDay(index) => *index,
        DaySelector::Unspecified => {
            index_for_weekday(now.weekday().number_from_sunday(), config)
        }
    };

    CruiseDays {
        cruise_day,
        days: build_days(config, cruise_day),
    }
}

/// Returns the calendar date of a cruise day.
///
/// Returns `None` when the date would fall outside chrono's supported range.
pub fn cruise_day_date(config: &CruiseConfig, index: i64) -> Option<NaiveDate> {
    let offset = Duration::try_days(index.checked_sub(1)?)?;
    config
        .start_date()
        .date_naive()
        .checked_add_signed(offset)
}

/// Returns the cruise day a calendar date falls on, if it is within the sailing.
pub fn cruise_day_for_date(config: &CruiseConfig, date: NaiveDate) -> Option<i64> {
    let index = (date - config.start_date().date_naive()).num_days() + 1;
    (1..=i64::from(config.length_in_days()))
        .contains(&index)
        .then_some(index)
}

/// Cruise day on which the given weekday (Sunday = 1) first occurs.
fn index_for_weekday(target_weekday: u32, config: &CruiseConfig) -> i64 {
    i64::from((7 + target_weekday - config.start_day_of_week()) % 7 + 1)
}

fn build_days(config: &CruiseConfig, active: i64) -> Vec<CruiseDay> {
    let start = i64::from(config.start_day_of_week());

    (1..=i64::from(config.length_in_days()))
        .map(|index| {
            let label = ((start + index - 2) % 7) as usize;
            CruiseDay {
                name: WEEKDAY_LABELS[label].to_string(),
                index,
                is_active: index == active,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    const WEEKDAY_NAMES: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// A sailing that embarks on Saturday 2024-06-01.
    fn saturday_config(length_in_days: u32) -> CruiseConfig {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 16, 0, 0).unwrap();
        CruiseConfig::new(start, 7, length_in_days).unwrap()
    }

    fn config_starting_on(start_day_of_week: u32, length_in_days: u32) -> CruiseConfig {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 16, 0, 0).unwrap();
        CruiseConfig::new(start, start_day_of_week, length_in_days).unwrap()
    }

    fn weekday(name: &str) -> DaySelector {
        DaySelector::WeekdayName(name.to_string())
    }

    fn any_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_weekday_resolves_relative_to_embarkation() {
        let config = saturday_config(8);

        assert_eq!(resolve_cruise_day(&weekday("sat"), &config, &any_time()).cruise_day, 1);
        assert_eq!(resolve_cruise_day(&weekday("sun"), &config, &any_time()).cruise_day, 2);
        assert_eq!(resolve_cruise_day(&weekday("tue"), &config, &any_time()).cruise_day, 4);
        assert_eq!(resolve_cruise_day(&weekday("fri"), &config, &any_time()).cruise_day, 7);
    }

    #[test]
    fn test_days_are_labelled_from_start_weekday() {
        let result = resolve_cruise_day(&weekday("sat"), &saturday_config(8), &any_time());

        let names: Vec<&str> = result.days.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
        let indices: Vec<i64> = result.days.iter().map(|d| d.index).collect();
        assert_eq!(indices, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_sunday_selection_marks_exactly_one_active_day() {
        for start_day_of_week in 1..=7 {
            for length_in_days in [7, 8, 14] {
                let config = config_starting_on(start_day_of_week, length_in_days);
                let result = resolve_cruise_day(&weekday("sun"), &config, &any_time());

                assert_eq!(result.days.len(), length_in_days as usize);
                assert_eq!(result.days.iter().filter(|d| d.is_active).count(), 1);
                assert_eq!(result.active().unwrap().name, "Sun");
            }
        }
    }

    #[test]
    fn test_weekday_selection_ignores_now() {
        let config = config_starting_on(3, 10);
        let monday = Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap();
        let thursday = Utc.with_ymd_and_hms(2024, 6, 6, 23, 0, 0).unwrap();

        for name in WEEKDAY_NAMES {
            assert_eq!(
                resolve_cruise_day(&weekday(name), &config, &monday),
                resolve_cruise_day(&weekday(name), &config, &thursday)
            );
        }
    }

    #[test]
    fn test_unspecified_matches_weekday_of_now() {
        let config = saturday_config(8);

        // 2024-06-02 is a Sunday; step through a full week.
        for offset in 0..7 {
            let now = Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 0).unwrap() + Duration::days(offset);
            let name = WEEKDAY_NAMES[now.weekday().num_days_from_sunday() as usize];

            assert_eq!(
                resolve_cruise_day(&DaySelector::Unspecified, &config, &now),
                resolve_cruise_day(&weekday(name), &config, &now)
            );
        }
    }

    #[test]
    fn test_unspecified_uses_local_calendar_of_now() {
        let config = saturday_config(8);
        // 23:30 UTC on Saturday is already Sunday in UTC+2.
        let utc_now = Utc.with_ymd_and_hms(2024, 6, 1, 23, 30, 0).unwrap();
        let local_now = utc_now.with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());

        assert_eq!(
            resolve_cruise_day(&DaySelector::Unspecified, &config, &utc_now).cruise_day,
            1
        );
        assert_eq!(
            resolve_cruise_day(&DaySelector::Unspecified, &config, &local_now).cruise_day,
            2
        );
    }

    #[test]
    fn test_explicit_day_passes_through() {
        let config = saturday_config(8);

        let result = resolve_cruise_day(&DaySelector::ExplicitCruiseDay(3), &config, &any_time());
        assert_eq!(result.cruise_day, 3);
        assert_eq!(result.active().unwrap().index, 3);
        assert_eq!(result.active().unwrap().name, "Mon");
    }

    #[test]
    fn test_explicit_day_out_of_range_is_not_clamped() {
        let config = saturday_config(8);

        let result = resolve_cruise_day(&DaySelector::ExplicitCruiseDay(42), &config, &any_time());
        assert_eq!(result.cruise_day, 42);
        assert!(result.active().is_none());
        assert_eq!(result.days.len(), 8);

        let result = resolve_cruise_day(&DaySelector::ExplicitCruiseDay(0), &config, &any_time());
        assert_eq!(result.cruise_day, 0);
        assert!(result.active().is_none());
    }

    #[test]
    fn test_unknown_weekday_resolves_like_saturday() {
        for start_day_of_week in 1..=7 {
            let config = config_starting_on(start_day_of_week, 9);
            assert_eq!(
                resolve_cruise_day(&weekday("xyz"), &config, &any_time()),
                resolve_cruise_day(&weekday("sat"), &config, &any_time())
            );
        }
    }

    #[test]
    fn test_weekday_never_reaches_second_week() {
        let config = config_starting_on(1, 14);

        for name in WEEKDAY_NAMES {
            let day = resolve_cruise_day(&weekday(name), &config, &any_time()).cruise_day;
            assert!((1..=7).contains(&day), "{name} resolved to {day}");
        }
    }

    #[test]
    fn test_short_cruise_can_resolve_past_the_end() {
        let config = saturday_config(3);

        let result = resolve_cruise_day(&weekday("wed"), &config, &any_time());
        assert_eq!(result.cruise_day, 5);
        assert_eq!(result.days.len(), 3);
        assert!(result.active().is_none());
    }

    #[test]
    fn test_cruise_day_date() {
        let config = saturday_config(8);

        assert_eq!(cruise_day_date(&config, 1), Some(make_date(2024, 6, 1)));
        assert_eq!(cruise_day_date(&config, 8), Some(make_date(2024, 6, 8)));
        assert_eq!(cruise_day_date(&config, 0), Some(make_date(2024, 5, 31)));
        assert_eq!(cruise_day_date(&config, i64::MIN), None);
        assert_eq!(cruise_day_date(&config, i64::MAX), None);
    }

    #[test]
    fn test_cruise_day_for_date() {
        let config = saturday_config(8);

        assert_eq!(cruise_day_for_date(&config, make_date(2024, 6, 1)), Some(1));
        assert_eq!(cruise_day_for_date(&config, make_date(2024, 6, 8)), Some(8));
        assert_eq!(cruise_day_for_date(&config, make_date(2024, 5, 31)), None);
        assert_eq!(cruise_day_for_date(&config, make_date(2024, 6, 9)), None);
    }
}
