use std::fmt;

use chrono::{Datelike, Days, NaiveDate};

/// A Sunday-to-Saturday calendar week, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    /// The week holding `date`: the Sunday at or before it through the following Saturday.
    ///
    /// Weeks cut off by the ends of the calendar are clamped to `NaiveDate::MIN`/`MAX`.
    pub fn containing(date: NaiveDate) -> Self {
        let offset = Days::new(u64::from(date.weekday().num_days_from_sunday()));
        let start = date.checked_sub_days(offset).unwrap_or(NaiveDate::MIN);
        let end = start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// `YYYY-MM-DD ~ YYYY-MM-DD`
    pub fn label(&self) -> String {
        format!(
            "{} ~ {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_containing_midweek() {
        let week = WeekRange::containing(ymd(2024, 3, 6));
        assert_eq!(week.start, ymd(2024, 3, 3));
        assert_eq!(week.end, ymd(2024, 3, 9));
        assert_eq!(week.label(), "2024-03-03 ~ 2024-03-09");
    }

    #[test]
    fn test_sunday_starts_its_own_week() {
        let week = WeekRange::containing(ymd(2024, 3, 3));
        assert_eq!(week.start, ymd(2024, 3, 3));

        let saturday = WeekRange::containing(ymd(2024, 3, 9));
        assert_eq!(saturday, week);
    }

    #[test]
    fn test_week_crossing_year() {
        let week = WeekRange::containing(ymd(2025, 1, 1));
        assert_eq!(week.label(), "2024-12-29 ~ 2025-01-04");
    }

    #[test]
    fn test_calendar_edges_are_clamped() {
        let last = WeekRange::containing(NaiveDate::MAX);
        assert_eq!(last.end, NaiveDate::MAX);
        assert!(last.contains(NaiveDate::MAX));

        let first = WeekRange::containing(NaiveDate::MIN);
        assert_eq!(first.start, NaiveDate::MIN);
        assert!(first.contains(NaiveDate::MIN));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let week = WeekRange::containing(ymd(2024, 3, 6));
        assert!(week.contains(ymd(2024, 3, 3)));
        assert!(week.contains(ymd(2024, 3, 9)));
        assert!(!week.contains(ymd(2024, 3, 2)));
        assert!(!week.contains(ymd(2024, 3, 10)));
    }
}
