use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::goal::Goal;
use crate::model::record::StudyRecord;
use crate::model::week::WeekRange;

/// Progress of the current week against the goal.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    NoGoal,
    Tracked(WeeklyProgress),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeeklyProgress {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub total_hours: f64,
    pub goal_hours: f64,
    /// Clamped to `0.0..=100.0`, two decimals.
    pub percent: f64,
}

/// Sums the hours logged in the week containing `today` and compares them to the goal.
///
/// A goal of zero (or a non-finite goal read back from hand-edited storage)
/// reports 0%. Form validation never produces such a goal.
pub fn calculate_progress(
    goal: Option<&Goal>,
    records: &[StudyRecord],
    today: NaiveDate,
) -> Progress {
    let Some(goal) = goal else {
        return Progress::NoGoal;
    };

    let week = WeekRange::containing(today);
    let total_hours: f64 = records
        .iter()
        .filter(|r| week.contains(r.date))
        .map(|r| r.hours)
        .sum();

    Progress::Tracked(WeeklyProgress {
        week_start: week.start,
        week_end: week.end,
        total_hours,
        goal_hours: goal.goal_hours,
        percent: percent_of_goal(total_hours, goal.goal_hours),
    })
}

fn percent_of_goal(total_hours: f64, goal_hours: f64) -> f64 {
    if !(goal_hours.is_finite() && goal_hours > 0.0) {
        log::debug!("Goal of {} hours has no meaningful percentage, reporting 0%", goal_hours);
        return 0.0;
    }
    let percent = (total_hours / goal_hours * 100.0).clamp(0.0, 100.0);
    round2(percent)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Wednesday, week of 2024-03-03 ~ 2024-03-09
    fn today() -> NaiveDate {
        ymd(2024, 3, 6)
    }

    fn tracked(progress: Progress) -> WeeklyProgress {
        match progress {
            Progress::Tracked(p) => p,
            Progress::NoGoal => panic!("expected a tracked progress"),
        }
    }

    #[test]
    fn test_no_goal() {
        let records = vec![StudyRecord::new(today(), "Math", 2.0)];
        assert_eq!(calculate_progress(None, &records, today()), Progress::NoGoal);
        assert_eq!(calculate_progress(None, &[], today()), Progress::NoGoal);
    }

    #[test]
    fn test_counts_only_current_week() {
        let goal = Goal::new("Exam", 10.0);
        let records = vec![
            StudyRecord::new(ymd(2024, 3, 3), "Sun", 1.0),
            StudyRecord::new(ymd(2024, 3, 9), "Sat", 3.0),
            StudyRecord::new(ymd(2024, 3, 2), "Last week", 5.0),
            StudyRecord::new(ymd(2024, 3, 10), "Next week", 5.0),
        ];

        let p = tracked(calculate_progress(Some(&goal), &records, today()));
        assert_eq!(p.week_start, ymd(2024, 3, 3));
        assert_eq!(p.week_end, ymd(2024, 3, 9));
        assert_eq!(p.total_hours, 4.0);
        assert_eq!(p.percent, 40.0);
    }

    #[test]
    fn test_clamps_to_hundred() {
        let goal = Goal::new("Exam", 10.0);
        let records = vec![StudyRecord::new(today(), "Math", 12.0)];
        let p = tracked(calculate_progress(Some(&goal), &records, today()));
        assert_eq!(p.total_hours, 12.0);
        assert_eq!(p.percent, 100.0);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let goal = Goal::new("Exam", 3.0);
        let records = vec![StudyRecord::new(today(), "Math", 1.0)];
        let p = tracked(calculate_progress(Some(&goal), &records, today()));
        assert_eq!(p.percent, 33.33);
    }

    #[test]
    fn test_zero_goal_is_guarded() {
        let goal = Goal::new("Broken", 0.0);
        let records = vec![StudyRecord::new(today(), "Math", 2.0)];
        let p = tracked(calculate_progress(Some(&goal), &records, today()));
        assert_eq!(p.total_hours, 2.0);
        assert_eq!(p.percent, 0.0);
    }

    #[test]
    fn test_goal_without_records() {
        let goal = Goal::new("Exam", 10.0);
        let p = tracked(calculate_progress(Some(&goal), &[], today()));
        assert_eq!(p.total_hours, 0.0);
        assert_eq!(p.percent, 0.0);
    }
}
