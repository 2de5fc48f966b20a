// ABOUTME: File-backed key-value store persisted as a single JSON object
// ABOUTME: Writes go through a temporary sibling file and an atomic rename

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use super::KeyValueStore;
use crate::StorageResult;

type Entries = BTreeMap<String, String>;

/// Key-value store kept in one JSON file.
///
/// A missing file reads as an empty store. The parent directory must exist
/// before the first write.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StorageResult<Entries> {
        match fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(Entries::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, entries: &Entries) -> StorageResult<()> {
        let json = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;
        debug!("Persisted {} key(s) to {}", entries.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let mut entries = self.load().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.persist(&entries).await?;
        }
        Ok(())
    }
}
