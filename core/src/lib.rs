pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

use std::path::PathBuf;

pub use input::{
    expand_key, parse_entry, EntryLine, FormError, GoalForm, RecordForm, GOAL_KEYS, RECORD_KEYS,
};
pub use model::goal::Goal;
pub use model::record::StudyRecord;
pub use model::week::WeekRange;
pub use repository::{
    FileKeyValueStore, GoalRepository, KeyValueStore, KvGoalRepository, KvRecordRepository,
    MemoryKeyValueStore, RecordRepository,
};
pub use service::dto::{
    format_hours, goal_text, Dashboard, ProgressView, RecordRow, NO_GOAL_PROMPT,
};
pub use service::progress::{calculate_progress, Progress, WeeklyProgress};
pub use service::study_service::{StudyService, Submission};
pub use service::weekly::{group_by_week, weekly_chart, WeekTotal, WeeklyHours};
pub use time::{parse_hours, parse_study_date, today};

/// The service over the on-disk store, as used by the command line and the TUI.
pub type FileStudyService =
    StudyService<KvRecordRepository<FileKeyValueStore>, KvGoalRepository<FileKeyValueStore>>;

pub fn open_file_service(base_dir: Option<PathBuf>) -> anyhow::Result<FileStudyService> {
    let store = FileKeyValueStore::new(base_dir)?;
    Ok(StudyService::new(
        KvRecordRepository::new(store.clone()),
        KvGoalRepository::new(store),
    ))
}
