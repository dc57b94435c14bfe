use solace_core::entity::{Entity, Keyed};
use solace_core::form::{self, Editor};
use solace_core::id::EntityId;
use solace_core::validation::Validate;

use crate::collection::Collection;
use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Validated create/update/delete by id over a [`Collection`].
///
/// Every write goes through [`Collection::mutate`], so concurrent edits to
/// different records of the same collection do not overwrite each other.
pub struct Repository<T, S> {
    collection: Collection<T, S>,
}

impl<T: Keyed + Validate, S: KeyValueStore> Repository<T, S> {
    /// Repository over the entity's standard collection key.
    pub fn for_entity(store: S) -> Self {
        Self::new(store, T::KEY)
    }
}

impl<T: Entity + Validate, S: KeyValueStore> Repository<T, S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            collection: Collection::new(store, key),
        }
    }

    pub fn collection(&self) -> &Collection<T, S> {
        &self.collection
    }

    pub async fn list(&self) -> Result<Vec<T>, StorageError> {
        self.collection.load().await
    }

    pub async fn get(&self, id: EntityId) -> Result<T, StorageError> {
        self.list()
            .await?
            .into_iter()
            .find(|item| item.id() == id)
            .ok_or(StorageError::RecordNotFound {
                collection: T::COLLECTION,
                id,
            })
    }

    /// Validate `draft`, assign it a new id, and prepend it.
    pub async fn create(&self, draft: T) -> Result<T, StorageError> {
        let created = self
            .collection
            .mutate(|items| Ok(Editor::add(draft.clone()).submit(items)?))
            .await?;
        tracing::info!(collection = T::COLLECTION, id = %created.id(), "record created");
        Ok(created)
    }

    /// Validate `draft` and replace the record with `id` by it.
    pub async fn update(&self, id: EntityId, draft: T) -> Result<T, StorageError> {
        let updated = self
            .collection
            .mutate(|items| Ok(Editor::edit(id, draft.clone()).submit(items)?))
            .await?;
        tracing::info!(collection = T::COLLECTION, %id, "record updated");
        Ok(updated)
    }

    /// Apply `f` to the record with `id` in place.
    ///
    /// Used for single-field changes (status, active flag, images) and does
    /// not re-run form validation.
    pub async fn modify<F>(&self, id: EntityId, f: F) -> Result<T, StorageError>
    where
        F: Fn(&mut T) + Send + Sync,
    {
        let modified = self
            .collection
            .mutate(|items| {
                let record = items
                    .iter_mut()
                    .find(|item| item.id() == id)
                    .ok_or(StorageError::RecordNotFound {
                        collection: T::COLLECTION,
                        id,
                    })?;
                f(record);
                Ok(record.clone())
            })
            .await?;
        tracing::info!(collection = T::COLLECTION, %id, "record modified");
        Ok(modified)
    }

    /// Remove the record with `id`, returning it.
    pub async fn delete(&self, id: EntityId) -> Result<T, StorageError> {
        let removed = self
            .collection
            .mutate(|items| {
                form::remove(items, id).ok_or(StorageError::RecordNotFound {
                    collection: T::COLLECTION,
                    id,
                })
            })
            .await?;
        tracing::info!(collection = T::COLLECTION, %id, "record deleted");
        Ok(removed)
    }
}
