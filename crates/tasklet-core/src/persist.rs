use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::error::{PersistError, StorageError};
use crate::task::Task;

/// Origin-scoped string key-value storage (browser `localStorage` or a
/// native stand-in).
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = BTreeMap::new();
        items.insert(key.to_string(), value.to_string());
        Self { items }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use tempfile::NamedTempFile;
    use tracing::{debug, info};

    use super::KeyValueStore;
    use crate::error::StorageError;

    /// One file per key inside `dir`, replaced atomically on every write.
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        dir: PathBuf,
    }

    impl FileStorage {
        #[tracing::instrument(skip(dir))]
        pub fn open(dir: &Path) -> Result<Self, StorageError> {
            fs::create_dir_all(dir)?;
            info!(dir = %dir.display(), "opened file storage");
            Ok(Self {
                dir: dir.to_path_buf(),
            })
        }

        pub fn path_for(&self, key: &str) -> PathBuf {
            let name: String = key
                .chars()
                .map(|c| {
                    if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                        c
                    } else {
                        '_'
                    }
                })
                .collect();
            self.dir.join(format!("{name}.json"))
        }
    }

    impl KeyValueStore for FileStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            let path = self.path_for(key);
            match fs::read_to_string(&path) {
                Ok(raw) => Ok(Some(raw)),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            }
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let path = self.path_for(key);
            debug!(file = %path.display(), bytes = value.len(), "writing item atomically");

            let mut temp = NamedTempFile::new_in(&self.dir)?;
            temp.write_all(value.as_bytes())?;
            temp.flush()?;
            temp.persist(&path)
                .map_err(|err| StorageError::WriteRejected {
                    key: key.to_string(),
                    reason: err.to_string(),
                })?;
            Ok(())
        }
    }
}

/// Reads and writes the whole task collection as one JSON array under a
/// single key.
#[derive(Debug)]
pub struct PersistenceAdapter<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[tracing::instrument(skip(self), fields(key = %self.key))]
    pub fn try_load(&self) -> Result<Vec<Task>, PersistError> {
        let raw = self
            .storage
            .get_item(&self.key)?
            .ok_or_else(|| PersistError::Missing {
                key: self.key.clone(),
            })?;

        let tasks: Option<Vec<Task>> =
            serde_json::from_str(&raw).map_err(|source| PersistError::Deserialize {
                key: self.key.clone(),
                source,
            })?;
        Ok(tasks.unwrap_or_default())
    }

    /// Like [`Self::try_load`], but any failure yields an empty collection.
    pub fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(tasks) => {
                info!(count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(PersistError::Missing { key }) => {
                debug!(%key, "no stored tasks yet");
                Vec::new()
            }
            Err(error) => {
                warn!(%error, "discarding unreadable task data");
                Vec::new()
            }
        }
    }

    #[tracing::instrument(skip(self, tasks), fields(key = %self.key, count = tasks.len()))]
    pub fn save(&mut self, tasks: &[Task]) -> Result<(), PersistError> {
        let blob = serde_json::to_string(tasks).map_err(PersistError::Serialize)?;
        self.storage.set_item(&self.key, &blob)?;
        debug!(bytes = blob.len(), "saved tasks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    const KEY: &str = "attractive_todos_v1";

    fn sample() -> Vec<Task> {
        let created = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let mut done = Task::new(2, "done one".to_string(), created, None);
        done.done = true;
        vec![
            done,
            Task::new(
                1,
                "with image".to_string(),
                created,
                Some("data:image/gif;base64,R0lG".to_string()),
            ),
        ]
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut adapter = PersistenceAdapter::new(MemoryStorage::new(), KEY);
        adapter.save(&sample()).unwrap();
        assert_eq!(adapter.load(), sample());
    }

    #[test]
    fn save_overwrites_previous_blob() {
        let mut adapter = PersistenceAdapter::new(MemoryStorage::new(), KEY);
        adapter.save(&sample()).unwrap();
        adapter.save(&[]).unwrap();
        assert_eq!(adapter.storage().raw(KEY), Some("[]"));
        assert!(adapter.load().is_empty());
    }

    #[test]
    fn missing_key_is_reported_then_swallowed() {
        let adapter = PersistenceAdapter::new(MemoryStorage::new(), KEY);
        assert!(matches!(
            adapter.try_load(),
            Err(PersistError::Missing { .. })
        ));
        assert!(adapter.load().is_empty());
    }

    #[test]
    fn malformed_blob_is_reported_then_swallowed() {
        let adapter = PersistenceAdapter::new(MemoryStorage::with_item(KEY, "{not json"), KEY);
        assert!(matches!(
            adapter.try_load(),
            Err(PersistError::Deserialize { .. })
        ));
        assert!(adapter.load().is_empty());
    }

    #[test]
    fn stored_null_loads_as_empty() {
        let adapter = PersistenceAdapter::new(MemoryStorage::with_item(KEY, "null"), KEY);
        assert_eq!(adapter.try_load().unwrap(), Vec::<Task>::new());
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn file_storage_persists_across_instances() {
        let temp = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::open(temp.path()).expect("open storage");
        let mut adapter = PersistenceAdapter::new(storage, KEY);
        adapter.save(&sample()).expect("save");

        let reopened = FileStorage::open(temp.path()).expect("reopen storage");
        let adapter = PersistenceAdapter::new(reopened, KEY);
        assert_eq!(adapter.try_load().expect("load"), sample());
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn file_storage_sanitizes_key_into_file_name() {
        let temp = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::open(temp.path()).expect("open storage");
        let path = storage.path_for("../tasks v1");
        assert_eq!(path.parent(), Some(temp.path()));
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(".._tasks_v1.json")
        );
    }
}
