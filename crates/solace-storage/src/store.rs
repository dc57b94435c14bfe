use std::future::Future;
use std::hash::{DefaultHasher, Hasher};
use std::sync::Arc;

use crate::error::StorageError;

/// Opaque token identifying one stored revision of a value (an S3 ETag, or
/// a content fingerprint for the local and in-memory stores).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(pub String);

impl Version {
    /// Fingerprint a body for backends without native ETags.
    pub fn of(body: &[u8]) -> Self {
        let mut hasher = DefaultHasher::new();
        hasher.write(body);
        hasher.write_usize(body.len());
        Version(format!("{:016x}", hasher.finish()))
    }
}

#[derive(Debug)]
pub struct StoredValue {
    pub body: Vec<u8>,
    pub version: Version,
}

/// Write condition checked atomically by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Precondition {
    /// Overwrite whatever is there.
    None,
    /// Only write if the current revision is this one.
    IfMatch(Version),
    /// Only write if the key does not exist yet.
    IfAbsent,
}

/// A flat key/value store holding one JSON document per key.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<StoredValue>, StorageError>> + Send;

    /// Write a value. Fails with [`StorageError::PreconditionFailed`] when
    /// `precondition` does not hold. Returns the new revision.
    fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        precondition: Precondition,
    ) -> impl Future<Output = Result<Version, StorageError>> + Send;

    /// Delete a value. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}

impl<S: KeyValueStore> KeyValueStore for Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<StoredValue>, StorageError> {
        self.as_ref().get(key).await
    }

    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        precondition: Precondition,
    ) -> Result<Version, StorageError> {
        self.as_ref().put(key, body, precondition).await
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.as_ref().delete(key).await
    }
}

/// Check a precondition against the current revision, if any.
pub(crate) fn check_precondition(
    key: &str,
    precondition: &Precondition,
    current: Option<&Version>,
) -> Result<(), StorageError> {
    let ok = match (precondition, current) {
        (Precondition::None, _) => true,
        (Precondition::IfMatch(expected), Some(actual)) => expected == actual,
        (Precondition::IfMatch(_), None) => false,
        (Precondition::IfAbsent, current) => current.is_none(),
    };
    if ok {
        Ok(())
    } else {
        Err(StorageError::PreconditionFailed {
            key: key.to_string(),
        })
    }
}
