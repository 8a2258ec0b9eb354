use anyhow::Result;
use chrono::NaiveDate;

use crate::input::{FormError, GoalForm, RecordForm};
use crate::model::goal::Goal;
use crate::model::record::StudyRecord;
use crate::repository::{GoalRepository, RecordRepository};
use crate::service::dto::{Dashboard, ProgressView, RecordRow};
use crate::service::progress::{calculate_progress, Progress};
use crate::service::weekly::{weekly_chart, WeeklyHours};

/// Outcome of a form submission. A rejected form is not an error: the caller
/// shows the message and keeps the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<T> {
    Accepted(T),
    Rejected(FormError),
}

impl<T> Submission<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted(_))
    }
}

pub struct StudyService<R: RecordRepository, G: GoalRepository> {
    records: R,
    goals: G,
}

impl<R: RecordRepository, G: GoalRepository> StudyService<R, G> {
    pub fn new(records: R, goals: G) -> Self {
        Self { records, goals }
    }

    pub fn add_record(
        &self,
        form: &RecordForm,
        today: NaiveDate,
    ) -> Result<Submission<StudyRecord>> {
        let record = match form.validate(today) {
            Ok(record) => record,
            Err(e) => {
                log::debug!("Record form rejected: {}", e);
                return Ok(Submission::Rejected(e));
            }
        };
        self.records.append(record.clone())?;
        log::info!("Logged {} h of '{}' on {}", record.hours, record.subject, record.date);
        Ok(Submission::Accepted(record))
    }

    pub fn records(&self) -> Result<Vec<StudyRecord>> {
        self.records.list()
    }

    pub fn record_rows(&self) -> Result<Vec<RecordRow>> {
        Ok(self
            .records
            .list()?
            .into_iter()
            .enumerate()
            .map(|(i, r)| RecordRow::from_entity(i, r))
            .collect())
    }

    pub fn delete_record(&self, position: usize) -> Result<Option<StudyRecord>> {
        let removed = self.records.delete_at(position)?;
        if let Some(r) = &removed {
            log::info!("Deleted '{}' on {}", r.subject, r.date);
        }
        Ok(removed)
    }

    pub fn set_goal(&self, form: &GoalForm) -> Result<Submission<Goal>> {
        let goal = match form.validate() {
            Ok(goal) => goal,
            Err(e) => {
                log::debug!("Goal form rejected: {}", e);
                return Ok(Submission::Rejected(e));
            }
        };
        self.goals.set(&goal)?;
        log::info!("Goal set: '{}' at {} h per week", goal.goal, goal.goal_hours);
        Ok(Submission::Accepted(goal))
    }

    pub fn goal(&self) -> Result<Option<Goal>> {
        self.goals.get()
    }

    pub fn progress(&self, today: NaiveDate) -> Result<Progress> {
        let goal = self.goals.get()?;
        let records = self.records.list()?;
        Ok(calculate_progress(goal.as_ref(), &records, today))
    }

    pub fn weekly_chart(&self) -> Result<WeeklyHours> {
        Ok(weekly_chart(&self.records.list()?))
    }

    /// Reads both stores once and derives everything the front end shows.
    pub fn dashboard(&self, today: NaiveDate) -> Result<Dashboard> {
        let records = self.records.list()?;
        let goal = self.goals.get()?;
        let progress = calculate_progress(goal.as_ref(), &records, today);
        let weekly = weekly_chart(&records);

        Ok(Dashboard {
            records: records
                .into_iter()
                .enumerate()
                .map(|(i, r)| RecordRow::from_entity(i, r))
                .collect(),
            goal,
            progress: ProgressView::from_progress(&progress),
            weekly,
        })
    }
}

#[cfg(test)]
#[path = "study_service_test.rs"]
mod study_service_test;
