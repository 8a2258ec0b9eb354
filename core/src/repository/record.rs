use anyhow::Result;

use crate::model::record::StudyRecord;
use crate::repository::store::KeyValueStore;
use crate::repository::traits::RecordRepository;

pub const RECORDS_KEY: &str = "records";

/// Keeps the whole record sequence as one JSON array under [`RECORDS_KEY`].
/// Every mutation reads the full array and writes it back.
#[derive(Clone)]
pub struct KvRecordRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvRecordRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read_records(&self) -> Result<Vec<StudyRecord>> {
        let Some(raw) = self.store.get(RECORDS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Option<Vec<StudyRecord>>>(&raw) {
            Ok(records) => Ok(records.unwrap_or_default()),
            Err(e) => {
                log::warn!("Ignoring unreadable '{}' blob: {}", RECORDS_KEY, e);
                Ok(Vec::new())
            }
        }
    }

    fn write_records(&self, records: &[StudyRecord]) -> Result<()> {
        let content = serde_json::to_string(records)?;
        self.store.set(RECORDS_KEY, &content)?;
        log::debug!("Wrote {} record(s)", records.len());
        Ok(())
    }
}

impl<S: KeyValueStore> RecordRepository for KvRecordRepository<S> {
    fn append(&self, record: StudyRecord) -> Result<()> {
        let mut records = self.read_records()?;
        records.push(record);
        self.write_records(&records)
    }

    fn list(&self) -> Result<Vec<StudyRecord>> {
        self.read_records()
    }

    fn delete_at(&self, position: usize) -> Result<Option<StudyRecord>> {
        let mut records = self.read_records()?;
        if position >= records.len() {
            log::warn!(
                "No record at position {} ({} stored), nothing deleted",
                position,
                records.len()
            );
            return Ok(None);
        }
        let removed = records.remove(position);
        self.write_records(&records)?;
        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::store::{FileKeyValueStore, MemoryKeyValueStore};
    use chrono::NaiveDate;

    fn record(day: u32, subject: &str, hours: f64) -> StudyRecord {
        StudyRecord::new(NaiveDate::from_ymd_opt(2024, 3, day).unwrap(), subject, hours)
    }

    #[test]
    fn test_list_keeps_append_order() {
        let repo = KvRecordRepository::new(MemoryKeyValueStore::new());
        repo.append(record(6, "b", 1.0)).unwrap();
        repo.append(record(4, "a", 2.0)).unwrap();
        repo.append(record(5, "c", 0.5)).unwrap();

        let subjects: Vec<_> = repo.list().unwrap().into_iter().map(|r| r.subject).collect();
        assert_eq!(subjects, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_delete_at_removes_only_that_position() {
        let repo = KvRecordRepository::new(MemoryKeyValueStore::new());
        for (i, s) in ["a", "b", "c", "d"].iter().enumerate() {
            repo.append(record(i as u32 + 1, s, 1.0)).unwrap();
        }

        let removed = repo.delete_at(1).unwrap();
        assert_eq!(removed.map(|r| r.subject), Some("b".to_string()));

        let subjects: Vec<_> = repo.list().unwrap().into_iter().map(|r| r.subject).collect();
        assert_eq!(subjects, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let store = MemoryKeyValueStore::new();
        let repo = KvRecordRepository::new(store.clone());
        repo.append(record(4, "a", 1.0)).unwrap();
        let before = store.get(RECORDS_KEY).unwrap();

        assert_eq!(repo.delete_at(5).unwrap(), None);
        assert_eq!(store.get(RECORDS_KEY).unwrap(), before);
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_absent_and_corrupt_storage_read_as_empty() {
        let store = MemoryKeyValueStore::new();
        let repo = KvRecordRepository::new(store.clone());
        assert!(repo.list().unwrap().is_empty());

        store.set(RECORDS_KEY, "null").unwrap();
        assert!(repo.list().unwrap().is_empty());

        store.set(RECORDS_KEY, "{not json").unwrap();
        assert!(repo.list().unwrap().is_empty());

        // Appending over a corrupt blob starts a fresh sequence.
        repo.append(record(4, "a", 1.0)).unwrap();
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_file_backed_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_path_buf();

        let repo = KvRecordRepository::new(FileKeyValueStore::new(Some(path.clone())).unwrap());
        repo.append(record(4, "a", 1.25)).unwrap();

        let reopened = KvRecordRepository::new(FileKeyValueStore::new(Some(path)).unwrap());
        assert_eq!(reopened.list().unwrap(), vec![record(4, "a", 1.25)]);
    }

    #[test]
    fn test_non_utf8_records_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(Some(dir.path().to_path_buf())).unwrap();
        let repo = KvRecordRepository::new(store);
        std::fs::write(dir.path().join("records.json"), [0xff, 0xfe, 0x5b, 0x5d]).unwrap();

        assert!(repo.list().unwrap().is_empty());
        repo.append(record(4, "a", 1.0)).unwrap();
        assert_eq!(repo.list().unwrap().len(), 1);
    }
}
