#[cfg(test)]
#[path = "local_storage_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::path;

use anyhow::Result;
use once_cell::sync::Lazy;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

const STORAGE_FILE: &str = "storage.json";

// Every handle in the process goes through this lock, so concurrent
// read-modify-write cycles never interleave.
static STORAGE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| return Mutex::new(()));

/// String key/value pairs kept in a single JSON file.
pub struct LocalStorage {
    pub file_path: path::PathBuf,
}

impl Default for LocalStorage {
    fn default() -> LocalStorage {
        let data_dir = path::PathBuf::from(Config::get(ConfigKey::DataDir));
        return LocalStorage::new(data_dir.join(STORAGE_FILE));
    }
}

impl LocalStorage {
    pub fn new(file_path: path::PathBuf) -> LocalStorage {
        return LocalStorage { file_path };
    }

    /// Missing or unreadable storage reads as empty.
    async fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.file_path.exists() {
            return Ok(BTreeMap::new());
        }

        let payload = fs::read_to_string(&self.file_path).await?;
        match serde_json::from_str::<BTreeMap<String, String>>(&payload) {
            Ok(items) => {
                return Ok(items);
            }
            Err(err) => {
                tracing::warn!(error = ?err, path = ?self.file_path, "Local storage is corrupt, starting empty");
                return Ok(BTreeMap::new());
            }
        }
    }

    async fn write_all(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        // Readers only ever see the old file or the complete new one.
        let tmp_path = self.file_path.with_extension("json.tmp");
        let payload = serde_json::to_string_pretty(items)?;
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(payload.as_bytes()).await?;
        file.flush().await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&tmp_path, &self.file_path).await?;
        return Ok(());
    }

    pub async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let _guard = STORAGE_LOCK.lock().await;
        let items = self.read_all().await?;
        return Ok(items.get(key).cloned());
    }

    pub async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _guard = STORAGE_LOCK.lock().await;
        let mut items = self.read_all().await?;
        items.insert(key.to_string(), value.to_string());
        return self.write_all(&items).await;
    }

    pub async fn remove_item(&self, key: &str) -> Result<()> {
        let _guard = STORAGE_LOCK.lock().await;
        let mut items = self.read_all().await?;
        if items.remove(key).is_none() {
            return Ok(());
        }

        return self.write_all(&items).await;
    }

    /// Replaces the value under `key` with whatever `update` derives from the
    /// current one. The lock is held from the read to the write.
    pub async fn update_item<F>(&self, key: &str, update: F) -> Result<String>
    where
        F: FnOnce(Option<String>) -> Result<String>,
    {
        let _guard = STORAGE_LOCK.lock().await;
        let mut items = self.read_all().await?;
        let value = update(items.remove(key))?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items).await?;

        return Ok(value);
    }
}
