use crate::model::goal::Goal;
use crate::model::record::StudyRecord;
use anyhow::Result;

pub trait RecordRepository {
    fn append(&self, record: StudyRecord) -> Result<()>;
    fn list(&self) -> Result<Vec<StudyRecord>>;
    /// Removes the record at `position` as currently listed. Out of range is a no-op
    /// and returns `None`.
    fn delete_at(&self, position: usize) -> Result<Option<StudyRecord>>;
}

pub trait GoalRepository {
    fn set(&self, goal: &Goal) -> Result<()>;
    fn get(&self) -> Result<Option<Goal>>;
}
