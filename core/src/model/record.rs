use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged study session.
///
/// Records have no id: a record is addressed by its position in the stored
/// sequence, and is never edited after it has been appended.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StudyRecord {
    pub date: NaiveDate,
    pub subject: String,
    pub hours: f64,
}

impl StudyRecord {
    pub fn new(date: NaiveDate, subject: impl Into<String>, hours: f64) -> Self {
        Self {
            date,
            subject: subject.into(),
            hours,
        }
    }
}
