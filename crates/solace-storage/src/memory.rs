use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use crate::error::StorageError;
use crate::store::{KeyValueStore, Precondition, StoredValue, Version, check_precondition};

/// In-process store. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_values<R>(&self, f: impl FnOnce(&mut BTreeMap<String, Vec<u8>>) -> R) -> R {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut values)
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<StoredValue>, StorageError> {
        Ok(self.with_values(|values| {
            values.get(key).map(|body| StoredValue {
                version: Version::of(body),
                body: body.clone(),
            })
        }))
    }

    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        precondition: Precondition,
    ) -> Result<Version, StorageError> {
        self.with_values(|values| {
            let current = values.get(key).map(|b| Version::of(b));
            check_precondition(key, &precondition, current.as_ref())?;
            let version = Version::of(&body);
            values.insert(key.to_string(), body);
            Ok(version)
        })
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.with_values(|values| values.remove(key));
        Ok(())
    }
}
