//! Filesystem store: one file per key under a data directory.
//!
//! This is the server-side stand-in for the dashboard's browser storage.
//! Writes go to a temp file and are renamed into place. Preconditions are
//! checked under a process-wide lock, so concurrent writers in this process
//! are serialized; separate processes sharing a directory are not.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::store::{KeyValueStore, Precondition, StoredValue, Version, check_precondition};

const TMP_SUFFIX: &str = ".tmp";

pub struct FsStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);
        let safe = !key.is_empty()
            && !key.ends_with(TMP_SUFFIX)
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(relative))
    }

    async fn read(path: &Path) -> Result<Option<Vec<u8>>, StorageError> {
        match tokio::fs::read(path).await {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for FsStore {
    async fn get(&self, key: &str) -> Result<Option<StoredValue>, StorageError> {
        let path = self.path_for(key)?;
        Ok(Self::read(&path).await?.map(|body| StoredValue {
            version: Version::of(&body),
            body,
        }))
    }

    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        precondition: Precondition,
    ) -> Result<Version, StorageError> {
        let path = self.path_for(key)?;
        let _guard = self.write_lock.lock().await;

        if precondition != Precondition::None {
            let current = Self::read(&path).await?.map(|b| Version::of(&b));
            check_precondition(key, &precondition, current.as_ref())?;
        }

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(TMP_SUFFIX);
        let tmp_path = PathBuf::from(tmp_name);

        tokio::fs::write(&tmp_path, &body).await?;
        tokio::fs::rename(&tmp_path, &path).await?;

        tracing::debug!(key, bytes = body.len(), "stored value");
        Ok(Version::of(&body))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
