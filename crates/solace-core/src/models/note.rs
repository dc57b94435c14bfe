use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entity::impl_entity;
use crate::id::EntityId;
use crate::validation::{FieldErrors, Validate};

/// A staff note attached to an inquiry. Stored per inquiry under
/// [`keys::inquiry_notes`](crate::keys::inquiry_notes); the parent may no
/// longer exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Note {
    #[serde(default)]
    pub id: EntityId,
    pub inquiry_id: EntityId,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
    pub created_at: jiff::Timestamp,
}

impl_entity!(Note, "notes");

impl Validate for Note {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("text", "Note", &self.text);
        errors
    }
}
