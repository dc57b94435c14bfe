//! Add/edit drafts and their write-back into a collection.

use crate::entity::Entity;
use crate::error::CoreError;
use crate::id::EntityId;
use crate::validation::{FieldErrors, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Add,
    Edit(EntityId),
}

/// A draft copy of one record, as held by an add or edit dialog.
#[derive(Debug, Clone)]
pub struct Editor<T> {
    mode: EditMode,
    draft: T,
}

impl<T: Entity + Validate> Editor<T> {
    pub fn add(draft: T) -> Self {
        Self {
            mode: EditMode::Add,
            draft,
        }
    }

    /// Edit `id`, starting from `draft`. The draft's own id is ignored.
    pub fn edit(id: EntityId, draft: T) -> Self {
        Self {
            mode: EditMode::Edit(id),
            draft,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    pub fn validate(&self) -> FieldErrors {
        self.draft.validate()
    }

    /// Validate and write the draft into `items`.
    ///
    /// Add prepends the draft under a freshly generated id. Edit replaces the
    /// record with the target id in place. Returns the stored record.
    pub fn submit(self, items: &mut Vec<T>) -> Result<T, CoreError> {
        self.validate().into_result().map_err(CoreError::Validation)?;

        let mut record = self.draft;
        match self.mode {
            EditMode::Add => {
                let id = EntityId::generate(items.iter().map(Entity::id));
                record.set_id(id);
                items.insert(0, record.clone());
            }
            EditMode::Edit(id) => {
                record.set_id(id);
                let slot = items
                    .iter_mut()
                    .find(|item| item.id() == id)
                    .ok_or(CoreError::RecordNotFound {
                        collection: T::COLLECTION,
                        id,
                    })?;
                *slot = record.clone();
            }
        }
        Ok(record)
    }
}

/// Remove the record with `id`. Returns it, or `None` if it was not present.
pub fn remove<T: Entity>(items: &mut Vec<T>, id: EntityId) -> Option<T> {
    let pos = items.iter().position(|item| item.id() == id)?;
    Some(items.remove(pos))
}
