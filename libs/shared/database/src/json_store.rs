use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

// Serializes every read-modify-write cycle in the process, so two requests
// rewriting the same document cannot drop each other's changes.
static WRITE_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// A single JSON document on disk, read and rewritten whole.
///
/// A missing file reads as `T::default()`. A file that fails to parse is
/// logged and also reads as the default; the next save replaces it.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{} does not exist yet, starting empty", self.path.display());
                return Ok(T::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", self.path.display()));
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("{} is not valid JSON ({}), starting empty", self.path.display(), e);
                Ok(T::default())
            }
        }
    }

    pub async fn save<T>(&self, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let _guard = WRITE_LOCK.lock().await;
        self.write(value).await
    }

    /// Load, mutate with `f`, and write back under the process-wide lock.
    pub async fn update<T, F, R>(&self, f: F) -> Result<R>
    where
        T: DeserializeOwned + Serialize + Default,
        F: FnOnce(&mut T) -> R,
    {
        let _guard = WRITE_LOCK.lock().await;
        let mut document: T = self.load().await?;
        let result = f(&mut document);
        self.write(&document).await?;
        Ok(result)
    }

    async fn write<T>(&self, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let body = serde_json::to_vec_pretty(value)?;

        // Write beside the target, then rename over it.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &body)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        debug!("Saved {} ({} bytes)", self.path.display(), body.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));

        let value: HashMap<String, Vec<String>> = store.load().await.unwrap();
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let store = JsonFileStore::new(&path);
        let value: Vec<u32> = store.load().await.unwrap();
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("doc.json"));

        let mut doc = HashMap::new();
        doc.insert("patient@example.com".to_string(), vec![1u32, 2, 3]);
        store.save(&doc).await.unwrap();

        let loaded: HashMap<String, Vec<u32>> = store.load().await.unwrap();
        assert_eq!(loaded, doc);
    }

    #[tokio::test]
    async fn test_update_returns_closure_result() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("counter.json"));

        for _ in 0..3 {
            store
                .update(|items: &mut Vec<u32>| items.push(items.len() as u32))
                .await
                .unwrap();
        }

        let len = store.update(|items: &mut Vec<u32>| items.len()).await.unwrap();
        assert_eq!(len, 3);

        let loaded: Vec<u32> = store.load().await.unwrap();
        assert_eq!(loaded, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_concurrent_updates_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("concurrent.json"));

        let mut handles = Vec::new();
        for i in 0..10u32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.update(|items: &mut Vec<u32>| items.push(i)).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let mut loaded: Vec<u32> = store.load().await.unwrap();
        loaded.sort();
        assert_eq!(loaded, (0..10u32).collect::<Vec<_>>());
    }
}
