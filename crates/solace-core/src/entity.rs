use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::id::EntityId;

/// A persisted record type held in a JSON array collection.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name used in logs and error messages (e.g. "resources").
    const COLLECTION: &'static str;

    fn id(&self) -> EntityId;

    fn set_id(&mut self, id: EntityId);

    /// Default records used when the collection is absent or unreadable.
    fn seed() -> Vec<Self> {
        Vec::new()
    }
}

/// An entity whose whole collection lives under one fixed storage key.
pub trait Keyed: Entity {
    const KEY: &'static str;
}

/// Implements [`Entity`] for a model with a plain `id: EntityId` field.
macro_rules! impl_entity {
    ($ty:ty, $collection:expr, seed = $seed:path) => {
        impl $crate::entity::Entity for $ty {
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> $crate::id::EntityId {
                self.id
            }

            fn set_id(&mut self, id: $crate::id::EntityId) {
                self.id = id;
            }

            fn seed() -> Vec<Self> {
                $seed()
            }
        }
    };
    ($ty:ty, $collection:expr) => {
        impl $crate::entity::Entity for $ty {
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> $crate::id::EntityId {
                self.id
            }

            fn set_id(&mut self, id: $crate::id::EntityId) {
                self.id = id;
            }
        }
    };
}

pub(crate) use impl_entity;
