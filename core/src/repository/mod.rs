pub mod goal;
pub mod record;
pub mod store;
pub mod traits;

// Re-export
pub use goal::KvGoalRepository;
pub use record::KvRecordRepository;
pub use store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use traits::{GoalRepository, RecordRepository};
