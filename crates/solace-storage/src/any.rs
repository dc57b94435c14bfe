use crate::error::StorageError;
use crate::local::FsStore;
use crate::memory::MemoryStore;
use crate::s3::S3Store;
use crate::store::{KeyValueStore, Precondition, StoredValue, Version};

/// The backend chosen at startup.
pub enum AnyStore {
    Local(FsStore),
    S3(S3Store),
    Memory(MemoryStore),
}

impl AnyStore {
    pub fn kind(&self) -> &'static str {
        match self {
            AnyStore::Local(_) => "local",
            AnyStore::S3(_) => "s3",
            AnyStore::Memory(_) => "memory",
        }
    }
}

impl KeyValueStore for AnyStore {
    async fn get(&self, key: &str) -> Result<Option<StoredValue>, StorageError> {
        match self {
            AnyStore::Local(s) => s.get(key).await,
            AnyStore::S3(s) => s.get(key).await,
            AnyStore::Memory(s) => s.get(key).await,
        }
    }

    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        precondition: Precondition,
    ) -> Result<Version, StorageError> {
        match self {
            AnyStore::Local(s) => s.put(key, body, precondition).await,
            AnyStore::S3(s) => s.put(key, body, precondition).await,
            AnyStore::Memory(s) => s.put(key, body, precondition).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        match self {
            AnyStore::Local(s) => s.delete(key).await,
            AnyStore::S3(s) => s.delete(key).await,
            AnyStore::Memory(s) => s.delete(key).await,
        }
    }
}
