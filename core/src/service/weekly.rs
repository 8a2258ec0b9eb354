use serde::{Deserialize, Serialize};

use crate::model::record::StudyRecord;
use crate::model::week::WeekRange;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeekTotal {
    pub label: String,
    pub hours: f64,
}

/// Week label to summed hours, in first-occurrence order of the input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct WeeklyHours {
    pub weeks: Vec<WeekTotal>,
}

impl WeeklyHours {
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.weeks.iter().find(|w| w.label == label).map(|w| w.hours)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.weeks.iter().map(|w| w.label.as_str()).collect()
    }

    pub fn max_hours(&self) -> f64 {
        self.weeks.iter().map(|w| w.hours).fold(0.0, f64::max)
    }

    fn add(&mut self, label: String, hours: f64) {
        match self.weeks.iter_mut().find(|w| w.label == label) {
            Some(week) => week.hours += hours,
            None => self.weeks.push(WeekTotal { label, hours }),
        }
    }
}

/// Sums hours per Sunday-to-Saturday week. Does not sort: weeks appear in the
/// order their first record appears.
pub fn group_by_week(records: &[StudyRecord]) -> WeeklyHours {
    let mut weekly = WeeklyHours::default();
    for record in records {
        weekly.add(WeekRange::containing(record.date).label(), record.hours);
    }
    weekly
}

/// Chart series: records ordered by date (stable for equal dates), then grouped.
pub fn weekly_chart(records: &[StudyRecord]) -> WeeklyHours {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.date);
    group_by_week(&sorted)
}
