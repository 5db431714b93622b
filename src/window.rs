//! Visible week window.
//!
//! A window is an inclusive range of calendar days. The board normally shows
//! one week at a time; navigation moves the window by whole weeks.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DAYS_PER_WEEK: i64 = 7;

/// First day of the displayed week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

impl std::str::FromStr for WeekStart {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(WeekStart::Monday),
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            other => Err(Error::InvalidArgument(format!(
                "invalid week start '{other}' (expected monday|sunday)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    #[serde(with = "crate::model::day")]
    pub start: NaiveDate,
    #[serde(with = "crate::model::day")]
    pub end: NaiveDate,
}

impl WeekWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidArgument(format!(
                "window end {end} is before start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The seven-day window that contains `day`.
    pub fn containing(day: NaiveDate, week_start: WeekStart) -> Result<Self> {
        let first = week_start.weekday();
        let back = (DAYS_PER_WEEK + i64::from(day.weekday().num_days_from_monday())
            - i64::from(first.num_days_from_monday()))
            % DAYS_PER_WEEK;
        let out_of_range = || Error::InvalidArgument(format!("no full week contains {day}"));
        let start = Duration::try_days(back)
            .and_then(|delta| day.checked_sub_signed(delta))
            .ok_or_else(out_of_range)?;
        let end = Duration::try_days(DAYS_PER_WEEK - 1)
            .and_then(|delta| start.checked_add_signed(delta))
            .ok_or_else(out_of_range)?;
        Ok(Self { start, end })
    }

    /// Move by whole weeks; negative goes back in time.
    pub fn shifted(&self, weeks: i64) -> Result<Self> {
        let out_of_range =
            || Error::InvalidArgument(format!("week offset {weeks} is out of range from {self}"));
        let delta = weeks
            .checked_mul(DAYS_PER_WEEK)
            .and_then(Duration::try_days)
            .ok_or_else(out_of_range)?;
        let start = self.start.checked_add_signed(delta).ok_or_else(out_of_range)?;
        let end = self.end.checked_add_signed(delta).ok_or_else(out_of_range)?;
        Ok(Self { start, end })
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Inclusive interval overlap: `[start, end]` touches the window.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        !(end < self.start || start > self.end)
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl std::fmt::Display for WeekWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn containing_starts_on_monday_by_default() {
        // 2026-10-17 is a Saturday.
        let window = WeekWindow::containing(day(2026, 10, 17), WeekStart::default()).expect("window");
        assert_eq!(window.start, day(2026, 10, 12));
        assert_eq!(window.end, day(2026, 10, 18));
        assert_eq!(window.days(), 7);

        let monday = WeekWindow::containing(day(2026, 10, 12), WeekStart::Monday).expect("window");
        assert_eq!(monday, window);
    }

    #[test]
    fn containing_respects_sunday_start() {
        let window = WeekWindow::containing(day(2026, 10, 17), WeekStart::Sunday).expect("window");
        assert_eq!(window.start, day(2026, 10, 11));
        assert_eq!(window.end, day(2026, 10, 17));

        let sunday = WeekWindow::containing(day(2026, 10, 18), WeekStart::Sunday).expect("window");
        assert_eq!(sunday.start, day(2026, 10, 18));
    }

    #[test]
    fn shifting_back_and_forth_is_identity() {
        let window = WeekWindow::containing(day(2026, 1, 1), WeekStart::Monday).expect("window");
        let previous = window.shifted(-1).expect("shift back");
        assert_eq!(previous.start, day(2025, 12, 22));
        assert_eq!(previous.shifted(1).expect("shift forward"), window);
    }

    #[test]
    fn shifting_past_the_calendar_is_rejected() {
        let window = WeekWindow::containing(day(2026, 10, 17), WeekStart::Monday).expect("window");
        for weeks in [20_000_000, -20_000_000, i64::MAX, i64::MIN] {
            let err = window.shifted(weeks).expect_err("out of range");
            assert!(matches!(err, Error::InvalidArgument(_)), "{weeks}: {err:?}");
        }
    }

    #[test]
    fn containing_rejects_a_week_starting_before_the_calendar() {
        let week_start = if NaiveDate::MIN.weekday() == Weekday::Mon {
            WeekStart::Sunday
        } else {
            WeekStart::Monday
        };
        let err = WeekWindow::containing(NaiveDate::MIN, week_start).expect_err("out of range");
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn new_rejects_reversed_range() {
        assert!(WeekWindow::new(day(2026, 10, 18), day(2026, 10, 12)).is_err());
        let single = WeekWindow::new(day(2026, 10, 12), day(2026, 10, 12)).expect("window");
        assert_eq!(single.days(), 1);
    }

    #[test]
    fn overlap_is_inclusive_at_both_edges() {
        let window = WeekWindow::new(day(2026, 10, 12), day(2026, 10, 18)).expect("window");
        assert!(window.overlaps(day(2026, 10, 1), day(2026, 10, 12)));
        assert!(window.overlaps(day(2026, 10, 18), day(2026, 11, 1)));
        assert!(window.overlaps(day(2026, 10, 1), day(2026, 11, 1)));
        assert!(!window.overlaps(day(2026, 10, 1), day(2026, 10, 11)));
        assert!(!window.overlaps(day(2026, 10, 19), day(2026, 10, 20)));
    }

    #[test]
    fn week_start_parses() {
        assert_eq!("Sunday".parse::<WeekStart>().expect("parse"), WeekStart::Sunday);
        assert!("friday".parse::<WeekStart>().is_err());
    }
}
