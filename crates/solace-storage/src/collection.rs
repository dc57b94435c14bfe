use std::marker::PhantomData;

use solace_core::entity::Entity;

use crate::error::StorageError;
use crate::store::{KeyValueStore, Precondition, Version};

/// Attempts made by [`Collection::mutate`] before giving up with
/// [`StorageError::Conflict`].
pub const MAX_WRITE_ATTEMPTS: usize = 3;

/// A loaded collection together with the revision it was read at.
pub struct Snapshot<T> {
    pub items: Vec<T>,
    /// `None` when the key did not exist.
    pub version: Option<Version>,
}

/// A JSON array of `T` stored under one key.
pub struct Collection<T, S> {
    store: S,
    key: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity, S: KeyValueStore> Collection<T, S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _entity: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the collection, falling back to seed data when the key is missing
    /// or holds malformed JSON.
    pub async fn load(&self) -> Result<Vec<T>, StorageError> {
        Ok(self.load_versioned().await?.items)
    }

    pub async fn load_versioned(&self) -> Result<Snapshot<T>, StorageError> {
        let Some(stored) = self.store.get(&self.key).await? else {
            tracing::debug!(key = %self.key, "collection absent, using seed data");
            return Ok(Snapshot {
                items: T::seed(),
                version: None,
            });
        };

        let items = match serde_json::from_slice::<Vec<T>>(&stored.body) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    collection = T::COLLECTION,
                    error = %e,
                    "malformed collection, falling back to seed data"
                );
                T::seed()
            }
        };

        Ok(Snapshot {
            items,
            version: Some(stored.version),
        })
    }

    /// Overwrite the whole collection, regardless of what is stored.
    pub async fn save(&self, items: &[T]) -> Result<(), StorageError> {
        let body = serde_json::to_vec_pretty(items)?;
        self.store.put(&self.key, body, Precondition::None).await?;
        Ok(())
    }

    /// Read-modify-write with optimistic locking.
    ///
    /// `f` may run more than once: if another writer changed the collection
    /// between the read and the write, the collection is reloaded and `f` is
    /// applied again to the fresh copy. Nothing is written if `f` fails.
    pub async fn mutate<R, F>(&self, mut f: F) -> Result<R, StorageError>
    where
        F: FnMut(&mut Vec<T>) -> Result<R, StorageError> + Send,
        R: Send,
    {
        for attempt in 1..=MAX_WRITE_ATTEMPTS {
            let Snapshot { mut items, version } = self.load_versioned().await?;
            let out = f(&mut items)?;

            let body = serde_json::to_vec_pretty(&items)?;
            let precondition = match version {
                Some(version) => Precondition::IfMatch(version),
                None => Precondition::IfAbsent,
            };

            match self.store.put(&self.key, body, precondition).await {
                Ok(_) => return Ok(out),
                Err(StorageError::PreconditionFailed { .. }) => {
                    tracing::warn!(key = %self.key, attempt, "concurrent write detected, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(StorageError::Conflict {
            key: self.key.clone(),
        })
    }
}
