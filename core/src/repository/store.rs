use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};

const DEFAULT_DIR_NAME: &str = ".studytime";

/// String-keyed storage of serialized blobs, shaped like browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Stores each key as `<key>.json` inside a data directory.
#[derive(Clone, Debug)]
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        fs::create_dir_all(&path)
            .with_context(|| format!("Could not create data directory {}", path.display()))?;
        log::debug!("Using data directory {}", path.display());
        Ok(Self { base_dir: path })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DEFAULT_DIR_NAME))
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let bytes = match fs::read(self.path_for(key)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("Could not read key '{}'", key)),
        };
        match String::from_utf8(bytes) {
            Ok(content) => Ok(Some(content)),
            Err(e) => {
                log::warn!("Ignoring key '{}': not valid UTF-8 ({})", key, e);
                Ok(None)
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)
            .with_context(|| format!("Could not write key '{}'", key))
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Could not remove key '{}'", key)),
        }
    }
}

/// In-process store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(store.get("records").unwrap(), None);
    }

    #[test]
    fn test_file_store_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(Some(dir.path().join("nested"))).unwrap();

        store.set("goal", "{}").unwrap();
        assert_eq!(store.get("goal").unwrap().as_deref(), Some("{}"));
        assert!(dir.path().join("nested").join("goal.json").exists());

        store.remove("goal").unwrap();
        assert_eq!(store.get("goal").unwrap(), None);
        // Removing again is fine.
        store.remove("goal").unwrap();
    }

    #[test]
    fn test_file_store_non_utf8_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(Some(dir.path().to_path_buf())).unwrap();
        fs::write(dir.path().join("records.json"), [0xff, 0xfe, 0x5b, 0x5d]).unwrap();
        assert_eq!(store.get("records").unwrap(), None);
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryKeyValueStore::new();
        let other = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
        other.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
