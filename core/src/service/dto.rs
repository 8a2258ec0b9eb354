use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::goal::Goal;
use crate::model::record::StudyRecord;
use crate::service::progress::{round2, Progress};
use crate::service::weekly::WeeklyHours;

pub const NO_GOAL_PROMPT: &str = "Please set a goal.";

/// A record as shown in a list, carrying the position its delete action targets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RecordRow {
    pub position: usize,
    pub date: NaiveDate,
    pub subject: String,
    pub hours: f64,
}

impl RecordRow {
    pub fn from_entity(position: usize, record: StudyRecord) -> Self {
        Self {
            position,
            date: record.date,
            subject: record.subject,
            hours: record.hours,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub text: String,
    pub percent: f64,
    pub has_goal: bool,
}

impl ProgressView {
    pub fn from_progress(progress: &Progress) -> Self {
        match progress {
            Progress::NoGoal => Self {
                text: NO_GOAL_PROMPT.to_string(),
                percent: 0.0,
                has_goal: false,
            },
            Progress::Tracked(p) => Self {
                text: format!(
                    "This week: {} h / Goal: {} h ({:.2}%)",
                    format_hours(p.total_hours),
                    format_hours(p.goal_hours),
                    p.percent
                ),
                percent: p.percent,
                has_goal: true,
            },
        }
    }
}

pub fn goal_text(goal: &Goal) -> String {
    format!("Goal: {} | Target: {} h", goal.goal, format_hours(goal.goal_hours))
}

/// Drops float noise: `0.1 + 0.2` shows as `0.3`, `4.0` as `4`.
pub fn format_hours(hours: f64) -> String {
    format!("{}", round2(hours))
}

/// Everything a front end needs to redraw after a change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub records: Vec<RecordRow>,
    pub goal: Option<Goal>,
    pub progress: ProgressView,
    pub weekly: WeeklyHours,
}

impl Dashboard {
    pub fn goal_text(&self) -> Option<String> {
        self.goal.as_ref().map(goal_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::progress::WeeklyProgress;

    #[test]
    fn test_progress_text() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        let view = ProgressView::from_progress(&Progress::Tracked(WeeklyProgress {
            week_start: d,
            week_end: d,
            total_hours: 0.1 + 0.2,
            goal_hours: 10.0,
            percent: 3.0,
        }));
        assert_eq!(view.text, "This week: 0.3 h / Goal: 10 h (3.00%)");
        assert!(view.has_goal);
    }

    #[test]
    fn test_no_goal_prompt() {
        let view = ProgressView::from_progress(&Progress::NoGoal);
        assert_eq!(view.text, NO_GOAL_PROMPT);
        assert_eq!(view.percent, 0.0);
        assert!(!view.has_goal);
    }

    #[test]
    fn test_goal_text() {
        assert_eq!(goal_text(&Goal::new("Exam", 7.5)), "Goal: Exam | Target: 7.5 h");
    }
}
